//! Schema-driven loader for `identifier = value` files.
//!
//! Responsibilities:
//! - Read a values file in one blocking call and walk its lines in order.
//! - Run each non-empty line through split, identifier validation and typed conversion.
//! - Collect every rejected line as a `LoadError` and keep going.
//!
//! Does NOT handle:
//! - Locating the file or retrying reads.
//! - Comments, sections, arrays or nested values.
//!
//! Invariants / Assumptions:
//! - Line numbers in errors are 1-based.
//! - Empty lines are skipped before any trimming; a line of spaces is not empty.
//! - An unreadable file yields exactly one `FileUnreadable` error and no values.
//! - The first successful value for an identifier is kept; later lines for it are errors.

mod line;
mod parse;
mod result;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LoadError;
use crate::schema::Schema;
use crate::types::TypedValue;
use line::split_declaration;

pub use parse::{parse_boolean, parse_float, parse_integer, parse_string, parse_value};
pub use result::LoadResult;

/// Loads values files against a fixed schema.
#[derive(Debug, Clone)]
pub struct ValuesLoader {
    schema: Schema,
}

impl ValuesLoader {
    /// Create a loader that validates against `schema`.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Read the file at `path` and parse every line.
    ///
    /// Never fails: read and parse problems are reported through the returned
    /// `LoadResult`. Each call produces an independent result. Invalid UTF-8
    /// sequences are replaced with U+FFFD, so they only affect their own line.
    pub fn load(&self, path: impl AsRef<Path>) -> LoadResult {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(bytes) => self.load_str(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not read values file"
                );
                LoadResult::new(
                    &self.schema,
                    BTreeMap::new(),
                    vec![LoadError::FileUnreadable {
                        path: path.to_path_buf(),
                    }],
                )
            }
        }
    }

    /// Parse values from text already in memory.
    pub fn load_str(&self, content: &str) -> LoadResult {
        let mut values: BTreeMap<String, TypedValue> = BTreeMap::new();
        let mut errors: Vec<LoadError> = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_number = index + 1;

            match self.parse_line(line, line_number, &values) {
                Ok((identifier, value)) => {
                    tracing::debug!(
                        line = line_number,
                        identifier = %identifier,
                        value = %value,
                        "Loaded value"
                    );
                    values.insert(identifier, value);
                }
                Err(error) => {
                    tracing::warn!(line = line_number, error = %error, "Rejected line");
                    errors.push(error);
                }
            }
        }

        let result = LoadResult::new(&self.schema, values, errors);
        if !result.missing_identifiers().is_empty() {
            tracing::warn!(
                missing = ?result.missing_identifiers(),
                "Schema identifiers without a value"
            );
        }
        tracing::info!(
            values = result.len(),
            errors = result.load_errors().len(),
            success = result.is_success(),
            "Finished loading values"
        );
        result
    }

    fn parse_line(
        &self,
        line: &str,
        line_number: usize,
        values: &BTreeMap<String, TypedValue>,
    ) -> Result<(String, TypedValue), LoadError> {
        let declaration = split_declaration(line, line_number)?;
        let identifier = declaration.identifier;

        let value_type = match self.schema.type_of(&identifier) {
            Ok(value_type) => value_type,
            Err(_) => {
                return Err(LoadError::UndefinedIdentifier {
                    identifier,
                    line: line_number,
                });
            }
        };

        if values.contains_key(&identifier) {
            return Err(LoadError::DuplicateIdentifier {
                identifier,
                line: line_number,
            });
        }

        let value = parse_value(value_type, declaration.raw_value).map_err(|source| {
            LoadError::InvalidValue {
                line: line_number,
                value_type,
                source,
            }
        })?;

        Ok((identifier, value))
    }
}
