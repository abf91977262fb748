//! Error definitions for configuration population.

use std::num::ParseIntError;

use thiserror::Error;

use crate::kind::DestinationKind;

/// Result alias used throughout envconf.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while populating a configuration record.
#[derive(Debug, Error)]
pub enum Error {
    /// The destination handed to `populate` is not a record.
    #[error("invalid kind for config: {kind}")]
    InvalidDestinationKind {
        /// Kind of the destination that was actually supplied.
        kind: DestinationKind,
    },

    /// A field's declared type cannot be populated from a string.
    #[error("invalid kind for config field {field}: {kind}")]
    InvalidFieldKind {
        /// Declared field name.
        field: String,
        /// Declared type or kind of the field.
        kind: String,
    },

    /// An integer field, or an element of an integer list, failed to parse.
    #[error(transparent)]
    ParseInt {
        /// Source parsing error from the standard library.
        #[from]
        source: ParseIntError,
    },

    /// A boolean field, or an element of a boolean list, failed to parse.
    #[error(transparent)]
    ParseBool {
        /// Source parsing error from the boolean grammar.
        #[from]
        source: ParseBoolError,
    },

    /// One or more required fields had neither a value nor a default.
    #[error("missing config fields: {}", .keys.join(", "))]
    MissingFields {
        /// Lookup keys of the missing fields, in declaration order.
        keys: Vec<String>,
    },
}

impl Error {
    /// Helper to construct field kind errors from string-like values.
    #[must_use]
    pub fn invalid_field_kind(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::InvalidFieldKind {
            field: field.into(),
            kind: kind.into(),
        }
    }
}

/// Input that is not one of the accepted boolean literals.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid boolean literal {input:?}: expected one of 1, t, true, 0, f, false")]
pub struct ParseBoolError {
    input: String,
}

impl ParseBoolError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
