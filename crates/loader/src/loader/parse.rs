//! Per-type conversion of raw values.
//!
//! Responsibilities:
//! - Convert the raw right-hand text of a line into a `TypedValue` of the declared type.
//! - Report malformed and out-of-range text as a `ParseError` instead of panicking.
//!
//! Does NOT handle:
//! - Splitting lines or validating identifiers (see `line.rs`).
//!
//! Invariants:
//! - Integer, float and boolean text has every space removed before conversion.
//! - String text is never trimmed; only the part between the first two
//!   non-escaped quotes is kept, with every escape character stripped from it.

use std::num::IntErrorKind;

use crate::constants::{
    ESCAPE_CHARACTER, FALSE_TOKENS, STRING_DELIMITER, TRIMMED_CHARACTER, TRUE_TOKENS,
};
use crate::error::ParseError;
use crate::types::{TypedValue, ValueType};

/// Remove every space character, not only the leading and trailing ones.
pub(crate) fn remove_spaces(text: &str) -> String {
    text.replace(TRIMMED_CHARACTER, "")
}

/// Convert `raw` to the declared `value_type`.
pub fn parse_value(value_type: ValueType, raw: &str) -> Result<TypedValue, ParseError> {
    match value_type {
        ValueType::Integer => parse_integer(raw),
        ValueType::Float => parse_float(raw),
        ValueType::Boolean => parse_boolean(raw),
        ValueType::String => parse_string(raw),
    }
}

/// Parse a signed 64-bit decimal integer with an optional sign.
///
/// The whole trimmed text must be a number: a numeric prefix followed by
/// other characters (`12abc`) is rejected rather than read as `12`.
pub fn parse_integer(raw: &str) -> Result<TypedValue, ParseError> {
    let text = remove_spaces(raw);
    match text.parse::<i64>() {
        Ok(value) => Ok(TypedValue::Integer(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(ParseError::IntegerOutOfRange(text))
            }
            _ => Err(ParseError::InvalidInteger(text)),
        },
    }
}

/// Parse a 64-bit floating-point number.
///
/// Finite literals that overflow to infinity, or that carry significant digits
/// but underflow to zero, are out of range. Explicit `inf`/`NaN` spellings are accepted.
/// As with integers, trailing text after a valid prefix (`1.2.3`) is rejected.
pub fn parse_float(raw: &str) -> Result<TypedValue, ParseError> {
    let text = remove_spaces(raw);
    let value = match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => return Err(ParseError::InvalidFloat(text)),
    };

    if value.is_infinite() && !spells_infinity(&text) {
        return Err(ParseError::FloatOutOfRange(text));
    }
    if value == 0.0 && has_significant_digits(&text) {
        return Err(ParseError::FloatOutOfRange(text));
    }

    Ok(TypedValue::Float(value))
}

fn spells_infinity(text: &str) -> bool {
    text.to_ascii_lowercase().contains("inf")
}

fn has_significant_digits(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.chars().any(|c| matches!(c, '1'..='9')))
}

/// Parse one of the literal tokens `0`, `false`, `1`, `true` (case-sensitive).
pub fn parse_boolean(raw: &str) -> Result<TypedValue, ParseError> {
    let text = remove_spaces(raw);
    if TRUE_TOKENS.contains(&text.as_str()) {
        Ok(TypedValue::Boolean(true))
    } else if FALSE_TOKENS.contains(&text.as_str()) {
        Ok(TypedValue::Boolean(false))
    } else {
        Err(ParseError::InvalidBoolean(text))
    }
}

/// Extract the text between the first two non-escaped quotes.
///
/// Anything after the closing quote is ignored. Every escape character inside
/// the literal is removed, so `\"` becomes `"` and `\n` becomes `n`.
pub fn parse_string(raw: &str) -> Result<TypedValue, ParseError> {
    let mut quotes = unescaped_positions(raw, STRING_DELIMITER, ESCAPE_CHARACTER);
    match (quotes.next(), quotes.next()) {
        (Some(first), Some(second)) => {
            let inner = &raw[first + STRING_DELIMITER.len_utf8()..second];
            let value: String = inner.chars().filter(|&c| c != ESCAPE_CHARACTER).collect();
            Ok(TypedValue::String(value))
        }
        _ => Err(ParseError::MalformedString(raw.to_string())),
    }
}

/// Byte offsets of every `target` not immediately preceded by `escape`.
///
/// The first character of `text` is never considered escaped.
fn unescaped_positions(
    text: &str,
    target: char,
    escape: char,
) -> impl Iterator<Item = usize> + '_ {
    text.char_indices()
        .scan(None, move |previous: &mut Option<char>, (index, c)| {
            let escaped = *previous == Some(escape);
            *previous = Some(c);
            Some((index, c, escaped))
        })
        .filter(move |&(_, c, escaped)| c == target && !escaped)
        .map(|(index, _, _)| index)
}
