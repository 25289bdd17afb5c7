// Unit tests for ClassifiedError helpers and serialization

use crate::error::ClassifiedError;
use crate::error::classified::RATE_LIMITED_MESSAGE;

use common::HttpStatusCode;

use serde_json::json;

/// **VALUE**: Verifies each variant reports the status it stands for.
///
/// **WHY THIS MATTERS**: Callers log and branch on `status_code()` without matching
/// on the variant.
///
/// **BUG THIS CATCHES**: Would catch a variant mapped to the wrong constant.
#[test]
fn given_each_variant_when_status_code_called_then_returns_fixed_or_given_status() {
    let message = String::from("m");
    assert_eq!(ClassifiedError::rate_limited().status_code(), HttpStatusCode(429));
    assert_eq!(
        ClassifiedError::BadRequest { message: message.clone() }.status_code(),
        HttpStatusCode(400)
    );
    assert_eq!(
        ClassifiedError::Unauthorized { message }.status_code(),
        HttpStatusCode(401)
    );
    assert_eq!(
        ClassifiedError::ValidationFailed { messages: vec![] }.status_code(),
        HttpStatusCode(422)
    );
    assert_eq!(
        ClassifiedError::Generic {
            status_code: HttpStatusCode(503),
            message: json!(null),
        }
        .status_code(),
        HttpStatusCode(503)
    );
}

/// **VALUE**: Verifies the composite validation message.
///
/// **WHY THIS MATTERS**: Callers that only display errors must not have to unpack
/// the list.
///
/// **BUG THIS CATCHES**: Would catch a changed prefix or separator.
#[test]
fn given_validation_failed_when_message_called_then_joins_with_prefix() {
    // GIVEN: Two rendered field errors
    let error = ClassifiedError::ValidationFailed {
        messages: vec!["first".to_string(), "second".to_string()],
    };

    // WHEN / THEN
    assert_eq!(error.message(), "Validation Failed: first, second");
    assert_eq!(error.validation_messages().len(), 2);
    assert_eq!(error.error_category(), "validation_failed");
}

/// **VALUE**: Verifies the rate-limit constructor and display text.
#[test]
fn given_rate_limited_when_displayed_then_shows_fixed_message() {
    let error = ClassifiedError::rate_limited();

    assert_eq!(error.to_string(), RATE_LIMITED_MESSAGE);
    assert_eq!(error.error_category(), "rate_limited");
    assert!(error.validation_messages().is_empty());
}

/// **VALUE**: Verifies generic messages render strings unquoted and null as empty.
///
/// **BUG THIS CATCHES**: Would catch `Value`'s JSON Display leaking quotes into
/// user-facing text.
#[test]
fn given_generic_with_various_bodies_when_displayed_then_renders_text() {
    let text = ClassifiedError::Generic {
        status_code: HttpStatusCode(500),
        message: json!("Server exploded"),
    };
    let empty = ClassifiedError::Generic {
        status_code: HttpStatusCode(502),
        message: json!(null),
    };
    let list = ClassifiedError::Generic {
        status_code: HttpStatusCode(500),
        message: json!(["a", 1]),
    };

    assert_eq!(text.to_string(), "Server exploded");
    assert_eq!(empty.to_string(), "");
    assert_eq!(list.to_string(), r#"["a",1]"#);
}

/// **VALUE**: Verifies tagged serialization for forwarding errors to other processes.
///
/// **BUG THIS CATCHES**: Would catch removal of the serde tag/content attributes.
#[test]
fn given_classified_error_when_serialized_then_uses_type_and_data_tags() {
    // GIVEN: A generic error
    let error = ClassifiedError::Generic {
        status_code: HttpStatusCode(500),
        message: json!([1, 2]),
    };

    // WHEN: Serializing
    let value = serde_json::to_value(&error).unwrap();

    // THEN: Tagged layout with a numeric status
    assert_eq!(
        value,
        json!({"type": "Generic", "data": {"status_code": 500, "message": [1, 2]}})
    );
}
