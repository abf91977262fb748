//! Converted field values and the string conversion rules behind them.

use crate::error::{Error, ParseBoolError, Result};
use crate::kind::FieldKind;

/// Separator between elements of list-valued fields.
pub const LIST_SEPARATOR: char = ',';

/// Typed value produced from a raw string, ready to be assigned to a field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    /// Value for a [`FieldKind::String`] field.
    String(String),
    /// Value for a [`FieldKind::Int`] field.
    Int(i64),
    /// Value for a [`FieldKind::Bool`] field.
    Bool(bool),
    /// Value for a [`FieldKind::StringList`] field.
    StringList(Vec<String>),
    /// Value for a [`FieldKind::IntList`] field.
    IntList(Vec<i64>),
    /// Value for a [`FieldKind::BoolList`] field.
    BoolList(Vec<bool>),
}

impl FieldValue {
    /// Kind of field this value can be assigned to.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::String(_) => FieldKind::String,
            Self::Int(_) => FieldKind::Int,
            Self::Bool(_) => FieldKind::Bool,
            Self::StringList(_) => FieldKind::StringList,
            Self::IntList(_) => FieldKind::IntList,
            Self::BoolList(_) => FieldKind::BoolList,
        }
    }
}

impl FieldKind {
    /// Converts `input` into a value of this kind.
    ///
    /// Lists are split on [`LIST_SEPARATOR`] without trimming, and every
    /// segment is kept, so an empty input yields a single empty element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseInt`] or [`Error::ParseBool`] for the first
    /// scalar or element that fails to parse, and
    /// [`Error::InvalidFieldKind`] naming `field` for unsupported kinds.
    pub fn convert(self, field: &str, input: &str) -> Result<FieldValue> {
        match self {
            Self::String => Ok(FieldValue::String(input.to_owned())),
            Self::Int => parse_int(input).map(FieldValue::Int),
            Self::Bool => parse_bool(input).map(FieldValue::Bool),
            Self::StringList => Ok(FieldValue::StringList(
                split(input).map(str::to_owned).collect(),
            )),
            Self::IntList => split(input)
                .map(parse_int)
                .collect::<Result<_>>()
                .map(FieldValue::IntList),
            Self::BoolList => split(input)
                .map(parse_bool)
                .collect::<Result<_>>()
                .map(FieldValue::BoolList),
            Self::Unsupported(ty) => Err(Error::invalid_field_kind(field, ty)),
        }
    }
}

fn split(input: &str) -> impl Iterator<Item = &str> {
    input.split(LIST_SEPARATOR)
}

fn parse_int(input: &str) -> Result<i64> {
    Ok(input.parse::<i64>()?)
}

/// Parses a boolean using the permissive grammar.
///
/// Accepts `1`, `t`, `T`, `0`, `f`, `F`, and `true`/`false` in any letter
/// case.
///
/// # Errors
///
/// Returns [`Error::ParseBool`] for anything else, including surrounding
/// whitespace.
pub fn parse_bool(input: &str) -> Result<bool> {
    match input {
        "1" | "t" | "T" => Ok(true),
        "0" | "f" | "F" => Ok(false),
        _ if input.eq_ignore_ascii_case("true") => Ok(true),
        _ if input.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(ParseBoolError::new(input).into()),
    }
}
