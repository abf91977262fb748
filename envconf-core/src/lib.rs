//! Core types for populating typed configuration records from string lookups.
//!
//! A record describes its fields with [`FieldDescriptor`]s; [`populate`] looks
//! each exported field up by its uppercased name through an accessor
//! function, converts the string according to the field's [`FieldKind`], and
//! hands the resulting [`FieldValue`] back to the record.

#![warn(missing_docs, clippy::pedantic)]

mod descriptor;
mod error;
mod kind;
mod populate;
mod record;
mod source;
mod value;

/// Static per-field metadata.
pub use descriptor::FieldDescriptor;
/// Error type and result alias shared across envconf.
pub use error::{Error, ParseBoolError, Result};
/// Destination and field kinds.
pub use kind::{DestinationKind, FieldKind};
/// The populate routine and descriptor listing.
pub use populate::{describe, populate};
/// Traits implemented by configuration records.
pub use record::{Destination, Record};
/// Environment and map backed entry points.
pub use source::{env_var, from_env, from_env_with_prefix, from_map};
/// Converted values and the boolean grammar.
pub use value::{FieldValue, LIST_SEPARATOR, parse_bool};
