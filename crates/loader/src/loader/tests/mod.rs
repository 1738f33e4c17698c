//! Tests for the values loader pipeline.
//!
//! Responsibilities:
//! - Test line structure checks (delimiters, identifiers, duplicates).
//! - Test integer, float and boolean conversion through the loader.
//! - Test escape-aware string literal extraction.
//! - Test `LoadResult` success rules and typed accessors.
//!
//! Invariants:
//! - Tests run on in-memory text via `load_str`; file I/O is covered by the
//!   integration tests in `tests/`.

use crate::schema::Schema;
use crate::types::ValueType;
use crate::{LoadResult, ValuesLoader};

pub mod scalar_tests;

/// Load `content` against a schema built from `(identifier, type)` pairs.
pub fn load_with(entries: &[(&str, ValueType)], content: &str) -> LoadResult {
    let schema = entries
        .iter()
        .fold(Schema::new(), |schema, (id, value_type)| {
            schema.with_entry(*id, *value_type)
        });
    ValuesLoader::new(schema).load_str(content)
}
