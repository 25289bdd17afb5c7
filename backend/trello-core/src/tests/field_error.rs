// Unit tests for FieldError parsing and sentence rendering

use crate::classifier::{FieldError, FieldErrorCode};

use serde_json::json;

fn render(entry: serde_json::Value) -> String {
    FieldError::from_value(&entry).unwrap().render()
}

/// **VALUE**: Verifies every known code renders its fixed sentence.
///
/// **WHY THIS MATTERS**: These sentences are shown to users verbatim and some
/// callers match on them.
///
/// **BUG THIS CATCHES**: Would catch a swapped template, a missing quote, or the
/// `missing` template losing its value.
#[test]
fn given_known_codes_when_rendered_then_use_fixed_templates() {
    assert_eq!(
        render(json!({"code": "missing", "field": "id", "value": "5", "resource": "Card"})),
        "The id 5 does not exist, for resource \"Card\""
    );
    assert_eq!(
        render(json!({"code": "missing_field", "field": "name", "resource": "Board"})),
        "Field \"name\" is missing, for resource \"Board\""
    );
    assert_eq!(
        render(json!({"code": "invalid", "field": "due", "resource": "Card"})),
        "Field \"due\" is invalid, for resource \"Card\""
    );
    assert_eq!(
        render(json!({"code": "already_exists", "field": "email", "resource": "Member"})),
        "Field \"email\" already exists, for resource \"Member\""
    );
}

/// **VALUE**: Verifies unknown codes use the entry's own message verbatim.
///
/// **BUG THIS CATCHES**: Would catch the fallback branch formatting or trimming the message.
#[test]
fn given_unknown_code_when_rendered_then_returns_message_verbatim() {
    assert_eq!(
        render(json!({"code": "custom", "message": "  custom text  "})),
        "  custom text  "
    );
}

/// **VALUE**: Verifies that numbers are rendered in text form and absent parts as empty.
///
/// **WHY THIS MATTERS**: Ids sometimes arrive as numbers. A strict string parse would
/// reject the whole entry.
///
/// **BUG THIS CATCHES**: Would catch `Option<String>` fields without the lenient
/// scalar deserializer.
#[test]
fn given_numeric_and_missing_attributes_when_rendered_then_fills_text_and_blanks() {
    assert_eq!(
        render(json!({"code": "missing", "field": "idList", "value": 12, "resource": "Card"})),
        "The idList 12 does not exist, for resource \"Card\""
    );
    assert_eq!(
        render(json!({"code": "invalid"})),
        "Field \"\" is invalid, for resource \"\""
    );
}

/// **VALUE**: Verifies an entry without code or message renders as empty text.
#[test]
fn given_entry_without_code_or_message_when_rendered_then_empty() {
    // GIVEN: An entry with only a field
    let entry = FieldError::from_value(&json!({"field": "name"})).unwrap();

    // THEN: Default code, empty sentence
    assert_eq!(entry.code, FieldErrorCode::Other(String::new()));
    assert_eq!(entry.render(), "");
}

/// **VALUE**: Verifies non-object entries are rejected by the parser.
///
/// **BUG THIS CATCHES**: Would catch the parser silently accepting a list as an entry.
#[test]
fn given_non_object_when_parsed_then_returns_error() {
    assert!(FieldError::from_value(&json!("text")).is_err());
    assert!(FieldError::from_value(&json!([1, 2])).is_err());
}

/// **VALUE**: Verifies code parsing and its string form agree.
#[test]
fn given_code_strings_when_parsed_then_as_str_returns_original() {
    for code in ["missing", "missing_field", "invalid", "already_exists", "unprocessable"] {
        assert_eq!(FieldErrorCode::parse(code).as_str(), code);
    }
    assert_eq!(FieldErrorCode::parse("invalid"), FieldErrorCode::Invalid);
}
