//! Typed configuration records populated from the process environment.
//!
//! Declare a struct, derive [`Record`], and read it from the environment:
//!
//! ```no_run
//! use envconf::Record;
//!
//! #[derive(Debug, Default, Record)]
//! struct ServerConfig {
//!     #[envconf(required)]
//!     pub port: i64,
//!     #[envconf(default = "0.0.0.0")]
//!     pub bind: String,
//! }
//!
//! let mut config = ServerConfig::default();
//! envconf::from_env(&mut config)?;
//! // or, reading MYSERVER_PORT and MYSERVER_BIND:
//! envconf::from_env_with_prefix("MYSERVER_", &mut config)?;
//! # Ok::<(), envconf::Error>(())
//! ```
//!
//! Supported field types are `String`, `i64`, `bool`, and `Vec`s of those;
//! list values are comma-separated. An empty value is treated as absent, so
//! a field cannot be configured to an explicit empty string.

#![warn(missing_docs, clippy::pedantic)]

pub use envconf_core::*;

/// Derive macro generating [`Record`] and [`Destination`] impls (enabled by
/// the `derive` feature).
#[cfg(feature = "derive")]
pub use envconf_derive::Record;
