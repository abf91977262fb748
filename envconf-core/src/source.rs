//! Accessors over the process environment and in-memory maps.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::env;
use std::hash::{BuildHasher, Hash};

use crate::error::Result;
use crate::populate::populate;
use crate::record::Destination;

/// Looks up `key` in the process environment.
///
/// Unset variables and values that are not valid UTF-8 are reported as absent.
#[must_use]
pub fn env_var(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

/// Populates `dest` from the process environment.
///
/// A field named `port` is read from `PORT`.
///
/// # Errors
///
/// See [`populate`].
pub fn from_env<D>(dest: &mut D) -> Result<()>
where
    D: Destination + ?Sized,
{
    populate(dest, env_var)
}

/// Populates `dest` from the process environment, namespacing every lookup.
///
/// With prefix `MYSERVER_`, a field named `port` is read from `MYSERVER_PORT`.
/// The prefix is used as given; it is not uppercased.
///
/// # Errors
///
/// See [`populate`].
pub fn from_env_with_prefix<D>(prefix: &str, dest: &mut D) -> Result<()>
where
    D: Destination + ?Sized,
{
    populate(dest, |key: &str| env_var(&format!("{prefix}{key}")))
}

/// Populates `dest` from an in-memory map.
///
/// Keys absent from the map are reported as absent.
///
/// # Errors
///
/// See [`populate`].
pub fn from_map<D, K, V, S>(dest: &mut D, map: &HashMap<K, V, S>) -> Result<()>
where
    D: Destination + ?Sized,
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    populate(dest, |key: &str| {
        map.get(key)
            .map(|value| value.as_ref().to_owned())
            .unwrap_or_default()
    })
}
