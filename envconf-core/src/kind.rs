//! Closed sets of destination and field kinds.

use std::fmt;

use serde::Serialize;

/// Shape of the value handed to `populate`.
///
/// Only [`DestinationKind::Struct`] can be populated; the other kinds exist so
/// that non-record destinations can be reported by name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    /// A record with named fields.
    Struct,
    /// A key/value mapping such as `HashMap` or `BTreeMap`.
    Map,
    /// A sequence such as `Vec` or a slice.
    Slice,
}

impl DestinationKind {
    /// Lowercase label for the kind.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Map => "map",
            Self::Slice => "slice",
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Declared type of a record field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// `String`, assigned verbatim.
    String,
    /// `i64`, parsed as a base-10 signed integer.
    Int,
    /// `bool`, parsed with the permissive boolean grammar.
    Bool,
    /// `Vec<String>`, comma-separated.
    StringList,
    /// `Vec<i64>`, comma-separated.
    IntList,
    /// `Vec<bool>`, comma-separated.
    BoolList,
    /// Any other type; carries the type as written in the record.
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Int => f.write_str("i64"),
            Self::Bool => f.write_str("bool"),
            Self::StringList => f.write_str("Vec<String>"),
            Self::IntList => f.write_str("Vec<i64>"),
            Self::BoolList => f.write_str("Vec<bool>"),
            Self::Unsupported(ty) => f.write_str(ty),
        }
    }
}
