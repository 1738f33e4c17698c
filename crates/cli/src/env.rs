//! Environment lookups for the demo binary.
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(String::new()), None);
        assert_eq!(non_blank("   \t".to_string()), None);
    }

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(
            non_blank("  values.txt ".to_string()),
            Some("values.txt".to_string())
        );
        assert_eq!(non_blank("a.txt".to_string()), Some("a.txt".to_string()));
    }
}
