//! Centralized constants for the values loader.
//!
//! Characters that drive the line grammar live here so the tokenizer and the
//! per-type parsers agree on them.

// =============================================================================
// Line Grammar
// =============================================================================

/// Separates the identifier from its raw value. Exactly one per line.
pub const IDENTIFIER_VALUE_DELIMITER: char = '=';

/// Opens and closes a string literal.
pub const STRING_DELIMITER: char = '"';

/// Marks the following character as escaped inside a string literal.
pub const ESCAPE_CHARACTER: char = '\\';

/// The only character removed when trimming identifiers and scalar values.
pub const TRIMMED_CHARACTER: char = ' ';

// =============================================================================
// Boolean Tokens
// =============================================================================

/// Literal tokens accepted as `true`.
pub const TRUE_TOKENS: [&str; 2] = ["1", "true"];

/// Literal tokens accepted as `false`.
pub const FALSE_TOKENS: [&str; 2] = ["0", "false"];

// =============================================================================
// CLI Defaults
// =============================================================================

/// Values file read by the demo binary when no override is given.
pub const DEFAULT_VALUES_FILE: &str = "values.txt";

/// Environment variable the demo binary consults to override the values file.
pub const VALUES_FILE_ENV_VAR: &str = "VALUES_LOADER_FILE";
