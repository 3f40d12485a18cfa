use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::member::Field;

/// Why a dataset was rejected. `index` is the position of the offending
/// member in the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("members is not a list, found {found}")]
    NotAList { found: &'static str },

    #[error("member #{index} is not a record, found {found}")]
    NotARecord { index: usize, found: &'static str },

    #[error("member #{index}: {field} is not type {}", .field.kind())]
    WrongType { index: usize, field: Field },

    #[error("member #{index}: at least one of nameLocal or nameAlt must be filled")]
    MissingName { index: usize },

    #[error("member #{index}: {field} must be within [{min}, {max}]")]
    OutOfRange {
        index: usize,
        field: Field,
        min: i64,
        max: i64,
    },

    #[error("member #{index}: image `{image}` should be imported as an asset")]
    ImageNotImported { index: usize, image: String },
}

/// Coarse classification of a `ValidationError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Shape,
    Type,
    MissingName,
    Range,
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::Shape => "ShapeError",
            ErrorKind::Type => "TypeError",
            ErrorKind::MissingName => "MissingNameError",
            ErrorKind::Range => "RangeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NotAList { .. } | ValidationError::NotARecord { .. } => {
                ErrorKind::Shape
            }
            ValidationError::WrongType { .. } | ValidationError::ImageNotImported { .. } => {
                ErrorKind::Type
            }
            ValidationError::MissingName { .. } => ErrorKind::MissingName,
            ValidationError::OutOfRange { .. } => ErrorKind::Range,
        }
    }

    /// Field the error is about, if it concerns a single field.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::WrongType { field, .. } | ValidationError::OutOfRange { field, .. } => {
                Some(*field)
            }
            ValidationError::ImageNotImported { .. } => Some(Field::Image),
            _ => None,
        }
    }

    /// Member position, absent when the list itself is malformed.
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::NotAList { .. } => None,
            ValidationError::NotARecord { index, .. }
            | ValidationError::WrongType { index, .. }
            | ValidationError::MissingName { index }
            | ValidationError::OutOfRange { index, .. }
            | ValidationError::ImageNotImported { index, .. } => Some(*index),
        }
    }
}

/// JSON type name of `value`, for shape errors.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
