//! Integer, float and boolean conversion through the loader.

use super::load_with;
use crate::error::{LoadError, ParseError};
use crate::loader::{parse_boolean, parse_float, parse_integer};
use crate::types::{TypedValue, ValueType};

// ============================================================================
// Integer
// ============================================================================

#[test]
fn test_integer_scenario() {
    let result = load_with(&[("count", ValueType::Integer)], "count = 42");
    assert!(result.is_success());
    assert_eq!(result.value::<i64>("count").unwrap(), 42);
}

#[test]
fn test_integer_signs_and_inner_spaces() {
    assert_eq!(parse_integer(" -17 ").unwrap(), TypedValue::Integer(-17));
    assert_eq!(parse_integer("+5").unwrap(), TypedValue::Integer(5));
    assert_eq!(parse_integer("1 000").unwrap(), TypedValue::Integer(1000));
}

#[test]
fn test_integer_malformed() {
    assert_eq!(
        parse_integer(" 12abc"),
        Err(ParseError::InvalidInteger("12abc".to_string()))
    );
    assert_eq!(parse_integer(""), Err(ParseError::InvalidInteger(String::new())));
    assert!(matches!(parse_integer("1.5"), Err(ParseError::InvalidInteger(_))));
}

#[test]
fn test_integer_out_of_range() {
    assert_eq!(
        parse_integer("9223372036854775808"),
        Err(ParseError::IntegerOutOfRange("9223372036854775808".to_string()))
    );
    assert!(matches!(
        parse_integer("-9223372036854775809"),
        Err(ParseError::IntegerOutOfRange(_))
    ));
    assert_eq!(
        parse_integer("-9223372036854775808").unwrap(),
        TypedValue::Integer(i64::MIN)
    );
}

#[test]
fn test_integer_error_message_through_loader() {
    let result = load_with(&[("n", ValueType::Integer)], "n = ten");
    assert_eq!(
        result.errors(),
        vec!["Could not interpret integer at line 1: 'ten' is not a valid integer value."]
    );
}

#[test]
fn test_empty_raw_value_is_invalid() {
    let result = load_with(&[("n", ValueType::Integer)], "n =");
    assert_eq!(
        result.load_errors(),
        &[LoadError::InvalidValue {
            line: 1,
            value_type: ValueType::Integer,
            source: ParseError::InvalidInteger(String::new()),
        }]
    );
}

// ============================================================================
// Float
// ============================================================================

#[test]
fn test_float_forms() {
    assert_eq!(parse_float(" 3.25 ").unwrap(), TypedValue::Float(3.25));
    assert_eq!(parse_float("-1e3").unwrap(), TypedValue::Float(-1000.0));
    assert_eq!(parse_float("7").unwrap(), TypedValue::Float(7.0));
    assert_eq!(parse_float("0.0").unwrap(), TypedValue::Float(0.0));
    assert_eq!(parse_float("inf").unwrap(), TypedValue::Float(f64::INFINITY));
}

#[test]
fn test_float_malformed() {
    assert_eq!(
        parse_float("1.2.3"),
        Err(ParseError::InvalidFloat("1.2.3".to_string()))
    );
    assert!(matches!(parse_float("abc"), Err(ParseError::InvalidFloat(_))));
}

#[test]
fn test_float_out_of_range() {
    assert_eq!(
        parse_float("1e400"),
        Err(ParseError::FloatOutOfRange("1e400".to_string()))
    );
    assert!(matches!(parse_float("-1e400"), Err(ParseError::FloatOutOfRange(_))));
    assert!(matches!(parse_float("1e-400"), Err(ParseError::FloatOutOfRange(_))));
}

#[test]
fn test_float_through_loader() {
    let result = load_with(&[("ratio", ValueType::Float)], "ratio = 0.5");
    assert!(result.is_success());
    assert_eq!(result.value::<f64>("ratio").unwrap(), 0.5);
}

// ============================================================================
// Boolean
// ============================================================================

#[test]
fn test_boolean_tokens() {
    assert_eq!(parse_boolean("1").unwrap(), TypedValue::Boolean(true));
    assert_eq!(parse_boolean("true").unwrap(), TypedValue::Boolean(true));
    assert_eq!(parse_boolean("0").unwrap(), TypedValue::Boolean(false));
    assert_eq!(parse_boolean("false").unwrap(), TypedValue::Boolean(false));
}

#[test]
fn test_boolean_surrounding_spaces_trimmed() {
    assert_eq!(parse_boolean(" true ").unwrap(), TypedValue::Boolean(true));
}

#[test]
fn test_boolean_is_case_sensitive() {
    assert_eq!(
        parse_boolean("True"),
        Err(ParseError::InvalidBoolean("True".to_string()))
    );
    assert!(parse_boolean("FALSE").is_err());
    assert!(parse_boolean("yes").is_err());
}

#[test]
fn test_boolean_scenario_invalid_value() {
    let result = load_with(&[("flag", ValueType::Boolean)], "flag = yes");

    assert!(!result.is_success());
    assert!(result.get("flag").is_none());
    match &result.load_errors()[0] {
        LoadError::InvalidValue { source, .. } => {
            assert_eq!(source.to_string(), "'yes' is not a valid boolean value.");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
    assert!(result.errors()[0].contains("'yes' is not a valid boolean value."));
}

#[test]
fn test_conversion_error_renders_context_and_cause_as_one_message() {
    let result = load_with(
        &[("flag", ValueType::Boolean), ("ratio", ValueType::Float)],
        "flag = yes
ratio = 1e400
",
    );

    assert_eq!(
        result.errors(),
        vec![
            "Could not interpret boolean at line 1: 'yes' is not a valid boolean value.",
            "Could not interpret float at line 2: '1e400' is too big or too small for a floating-point.",
        ]
    );
}
