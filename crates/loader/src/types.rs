//! Value types for the values loader.
//!
//! Responsibilities:
//! - Define the closed set of value kinds a schema can declare (`ValueType`).
//! - Define the tagged value stored for each parsed identifier (`TypedValue`).
//! - Provide `FromTypedValue` so callers can extract a native Rust type.
//!
//! Invariants:
//! - A `TypedValue` is never mutated after the loader stores it.
//! - `TypedValue::value_type()` always matches the schema declaration it was parsed for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value an identifier is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Integer,
    Float,
    Boolean,
    String,
}

impl ValueType {
    /// Lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed value, tagged by the type it was parsed as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TypedValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl TypedValue {
    /// Returns the tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            TypedValue::Integer(_) => ValueType::Integer,
            TypedValue::Float(_) => ValueType::Float,
            TypedValue::Boolean(_) => ValueType::Boolean,
            TypedValue::String(_) => ValueType::String,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(v) => write!(f, "{v}"),
            TypedValue::Float(v) => write!(f, "{v}"),
            TypedValue::Boolean(v) => write!(f, "{v}"),
            TypedValue::String(v) => write!(f, "\"{v}\""),
        }
    }
}

/// Conversion from a stored `TypedValue` into a native Rust type.
///
/// Implemented for the four types a schema can declare. `from_typed_value`
/// returns `None` when the stored tag does not match `VALUE_TYPE`.
pub trait FromTypedValue: Sized {
    /// The schema type this Rust type corresponds to.
    const VALUE_TYPE: ValueType;

    fn from_typed_value(value: &TypedValue) -> Option<Self>;
}

impl FromTypedValue for i64 {
    const VALUE_TYPE: ValueType = ValueType::Integer;

    fn from_typed_value(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromTypedValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Float;

    fn from_typed_value(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromTypedValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn from_typed_value(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromTypedValue for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn from_typed_value(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}
