//! Outcome of a single load.
//!
//! Responsibilities:
//! - Own the values and errors produced by one `ValuesLoader::load` call.
//! - Answer success, error and typed value queries.
//!
//! Invariants:
//! - A `LoadResult` is immutable once built.
//! - Success means no errors AND one value per schema declaration.
//! - Schema identifiers that never appeared in the file are reported by
//!   `missing_identifiers()`, not as entries of the error list.

use std::collections::BTreeMap;

use crate::error::{LoadError, ValueError};
use crate::schema::Schema;
use crate::types::{FromTypedValue, TypedValue};

/// Values and errors produced by one load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    values: BTreeMap<String, TypedValue>,
    errors: Vec<LoadError>,
    missing: Vec<String>,
    expected: usize,
}

impl LoadResult {
    pub(crate) fn new(
        schema: &Schema,
        values: BTreeMap<String, TypedValue>,
        errors: Vec<LoadError>,
    ) -> Self {
        let mut missing: Vec<String> = Vec::new();
        for identifier in schema.identifiers() {
            if !values.contains_key(identifier) && !missing.iter().any(|m| m == identifier) {
                missing.push(identifier.to_string());
            }
        }

        Self {
            values,
            errors,
            missing,
            expected: schema.len(),
        }
    }

    /// True when no line was rejected and every declared identifier got a value.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.values.len() == self.expected
    }

    /// Rendered error messages in detection order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Typed errors in detection order.
    pub fn load_errors(&self) -> &[LoadError] {
        &self.errors
    }

    /// Schema identifiers that received no value, in declaration order.
    pub fn missing_identifiers(&self) -> &[String] {
        &self.missing
    }

    /// Returns the value of `identifier` as `T`.
    ///
    /// # Errors
    ///
    /// - `ValueError::NotFound` if no value was loaded for `identifier`.
    /// - `ValueError::TypeMismatch` if the stored value is not a `T`.
    pub fn value<T: FromTypedValue>(&self, identifier: &str) -> Result<T, ValueError> {
        let stored = self
            .values
            .get(identifier)
            .ok_or_else(|| ValueError::NotFound(identifier.to_string()))?;

        T::from_typed_value(stored).ok_or_else(|| ValueError::TypeMismatch {
            identifier: identifier.to_string(),
            expected: T::VALUE_TYPE,
            found: stored.value_type(),
        })
    }

    pub fn get(&self, identifier: &str) -> Option<&TypedValue> {
        self.values.get(identifier)
    }

    /// Loaded values ordered by identifier.
    pub fn values(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of loaded values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
