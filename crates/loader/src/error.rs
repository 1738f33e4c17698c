//! Error types for the values loader.
//!
//! Responsibilities:
//! - Define the per-line errors accumulated during a load (`LoadError`).
//! - Define the per-type conversion failures (`ParseError`).
//! - Define lookup failures for the schema and the typed accessor.
//!
//! Invariants:
//! - Every `LoadError` except `FileUnreadable` names the 1-based line it came from.
//! - `ParseError` messages quote the trimmed raw text that failed to convert.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::ValueType;

/// A rejected line, or the failure to read the file at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error(
        "Could not read content of '{}'. Check if the file exists and if you are allowed to access it.",
        path.display()
    )]
    FileUnreadable { path: PathBuf },

    #[error("Missing '=' symbol at line {line}.")]
    MissingDelimiter { line: usize },

    #[error("Too many '=' symbols at line {line}.")]
    TooManyDelimiters { line: usize },

    #[error("No identifier found at line {line}.")]
    MissingIdentifier { line: usize },

    #[error(
        "Identifier '{identifier}' is unexpected at line {line} because it has not been defined in the schema."
    )]
    UndefinedIdentifier { identifier: String, line: usize },

    #[error(
        "Identifier '{identifier}' is unexpected at line {line} because it has already been defined previously in the file."
    )]
    DuplicateIdentifier { identifier: String, line: usize },

    #[error("Could not interpret {value_type} at line {line}: {source}")]
    InvalidValue {
        line: usize,
        value_type: ValueType,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// The 1-based line this error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::FileUnreadable { .. } => None,
            LoadError::MissingDelimiter { line }
            | LoadError::TooManyDelimiters { line }
            | LoadError::MissingIdentifier { line }
            | LoadError::UndefinedIdentifier { line, .. }
            | LoadError::DuplicateIdentifier { line, .. }
            | LoadError::InvalidValue { line, .. } => Some(*line),
        }
    }
}

/// A raw value that could not be converted to its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a valid integer value.")]
    InvalidInteger(String),

    #[error("'{0}' is too big or too small for an integer.")]
    IntegerOutOfRange(String),

    #[error("'{0}' is not a valid floating-point value.")]
    InvalidFloat(String),

    #[error("'{0}' is too big or too small for a floating-point.")]
    FloatOutOfRange(String),

    #[error("'{0}' is not a valid boolean value.")]
    InvalidBoolean(String),

    #[error("'{0}' is not a valid string literal, expected text enclosed in '\"'.")]
    MalformedString(String),
}

/// Schema lookup failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Identifier '{0}' is not declared in the schema")]
    NotFound(String),
}

/// Failure of the typed value accessor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("No value was loaded for identifier '{0}'")]
    NotFound(String),

    #[error("Identifier '{identifier}' holds a {found} value, not a {expected}")]
    TypeMismatch {
        identifier: String,
        expected: ValueType,
        found: ValueType,
    },
}
