//! Splitting a line into identifier and raw value.
//!
//! Invariants:
//! - A line must contain exactly one `=`; zero or several are rejected.
//! - The identifier has every space removed and must not end up empty.
//! - The raw value is returned untouched; trimming is up to the type parser.

use super::parse::remove_spaces;
use crate::constants::IDENTIFIER_VALUE_DELIMITER;
use crate::error::LoadError;

/// A line that passed the structural checks.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Declaration<'a> {
    pub identifier: String,
    pub raw_value: &'a str,
}

/// Split `line` on its single delimiter. `line_number` is 1-based.
pub(crate) fn split_declaration(
    line: &str,
    line_number: usize,
) -> Result<Declaration<'_>, LoadError> {
    let (left, raw_value) = match line.matches(IDENTIFIER_VALUE_DELIMITER).count() {
        0 => return Err(LoadError::MissingDelimiter { line: line_number }),
        1 => line
            .split_once(IDENTIFIER_VALUE_DELIMITER)
            .ok_or(LoadError::MissingDelimiter { line: line_number })?,
        _ => return Err(LoadError::TooManyDelimiters { line: line_number }),
    };

    let identifier = remove_spaces(left);
    if identifier.is_empty() {
        return Err(LoadError::MissingIdentifier { line: line_number });
    }

    Ok(Declaration {
        identifier,
        raw_value,
    })
}
