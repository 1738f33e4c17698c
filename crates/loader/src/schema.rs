//! Schema of expected identifiers.
//!
//! Responsibilities:
//! - Hold the ordered `(identifier, ValueType)` declarations supplied by the caller.
//! - Answer lookups for the loader (`contains`, `type_of`).
//!
//! Does NOT handle:
//! - Parsing files or values (see `loader`).
//!
//! Invariants / Assumptions:
//! - Declaration order is preserved.
//! - Duplicate declarations are accepted but logged; the first one wins for `type_of`
//!   and every declaration counts toward `len`.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::types::ValueType;

/// A single declaration: an identifier and the type its value must parse as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub identifier: String,
    pub value_type: ValueType,
}

impl SchemaEntry {
    pub fn new(identifier: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            identifier: identifier.into(),
            value_type,
        }
    }
}

/// Ordered set of expected identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from a list of declarations, keeping their order.
    pub fn from_entries(entries: Vec<SchemaEntry>) -> Self {
        let schema = Self { entries };
        schema.warn_on_duplicates();
        schema
    }

    /// Append a declaration.
    pub fn with_entry(mut self, identifier: impl Into<String>, value_type: ValueType) -> Self {
        let entry = SchemaEntry::new(identifier, value_type);
        if self.contains(&entry.identifier) {
            tracing::warn!(
                identifier = %entry.identifier,
                "Identifier declared more than once in schema"
            );
        }
        self.entries.push(entry);
        self
    }

    /// Returns the declared type of `identifier`.
    pub fn type_of(&self, identifier: &str) -> Result<ValueType, SchemaError> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| entry.value_type)
            .ok_or_else(|| SchemaError::NotFound(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.identifier == identifier)
    }

    /// Number of declarations, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.iter()
    }

    /// Declared identifiers in declaration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.identifier.as_str())
    }

    fn warn_on_duplicates(&self) {
        for (index, entry) in self.entries.iter().enumerate() {
            if self.entries[..index]
                .iter()
                .any(|earlier| earlier.identifier == entry.identifier)
            {
                tracing::warn!(
                    identifier = %entry.identifier,
                    "Identifier declared more than once in schema"
                );
            }
        }
    }
}

impl FromIterator<SchemaEntry> for Schema {
    fn from_iter<I: IntoIterator<Item = SchemaEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a SchemaEntry;
    type IntoIter = std::slice::Iter<'a, SchemaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
