//! Static metadata describing one record field.

use serde::Serialize;

use crate::kind::FieldKind;

/// Describes a field of a configuration record.
///
/// Descriptors are normally generated by `#[derive(Record)]`. Hand-written
/// [`Record`](crate::Record) impls build them with the const builder methods:
///
/// ```
/// use envconf_core::{FieldDescriptor, FieldKind};
///
/// const PORT: FieldDescriptor = FieldDescriptor::new("port", FieldKind::Int).required();
/// assert_eq!(PORT.key(), "PORT");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: FieldKind,
    exported: bool,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'static str>,
}

impl FieldDescriptor {
    /// Creates an exported, optional descriptor with no default.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            exported: true,
            required: false,
            default: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the raw value used when the accessor returns nothing.
    ///
    /// An empty default is equivalent to no default.
    #[must_use]
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Marks the field as private so that it is never looked up.
    #[must_use]
    pub const fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Declared field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared field kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether the field is visible to population.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Whether an absent value is reported as missing.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Non-empty default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&'static str> {
        self.default.filter(|value| !value.is_empty())
    }

    /// Lookup key handed to the accessor: the field name uppercased.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_uppercase()
    }
}
