use trello_core::{ClassifiedError, ResponseErrorClassifier, classify};

use common::HttpStatusCode;

use serde_json::{Value, json};

/// **VALUE**: Verifies that every 429 is rate limited no matter what the body says.
///
/// **WHY THIS MATTERS**: Rate-limit responses are checked before anything else and
/// their body is ignored. Callers branch on RateLimited to back off; a validation-shaped
/// 429 body must not turn it into ValidationFailed.
///
/// **BUG THIS CATCHES**: Would catch a reordered rule table or a body inspection
/// sneaking in before the rate-limit rule.
#[test]
fn given_429_with_any_body_when_classified_then_returns_rate_limited() {
    // GIVEN: A range of bodies, including malformed and validation-shaped ones
    let bodies: Vec<Option<Value>> = vec![
        None,
        Some(json!("<html>slow down</html>")),
        Some(json!([1, 2, 3])),
        Some(json!({"message": "custom"})),
        Some(json!({"message": "x", "errors": [{"code": "invalid", "field": "f", "resource": "r"}]})),
    ];

    for body in &bodies {
        // WHEN: Classifying a 429
        let error = classify(429, body.as_ref());

        // THEN: Always the fixed rate-limit error
        assert_eq!(
            error,
            ClassifiedError::RateLimited {
                message: "Wait a second.".to_string()
            },
            "body {body:?} should be ignored"
        );
        assert_eq!(error.status_code(), HttpStatusCode::TOO_MANY_REQUESTS);
    }
}

/// **VALUE**: Verifies 400 and 401 bodies with a message map to their own variants.
///
/// **BUG THIS CATCHES**: Would catch 400/401 being swapped or sent to Generic.
#[test]
fn given_400_and_401_with_message_when_classified_then_returns_typed_variants() {
    // GIVEN: Two bodies with messages
    let bad_input = json!({"message": "bad input"});
    let no_access = json!({"message": "no access"});

    // WHEN: Classifying
    let bad_request = classify(400, Some(&bad_input));
    let unauthorized = classify(401, Some(&no_access));

    // THEN: Typed variants carrying the message
    assert_eq!(
        bad_request,
        ClassifiedError::BadRequest {
            message: "bad input".to_string()
        }
    );
    assert_eq!(
        unauthorized,
        ClassifiedError::Unauthorized {
            message: "no access".to_string()
        }
    );
}

/// **VALUE**: Verifies 422 field errors are rendered in order with their templates.
///
/// **WHY THIS MATTERS**: Callers show the composite message directly and may also
/// inspect individual entries; order must match the response.
///
/// **BUG THIS CATCHES**: Would catch reordering, dropped entries, or a wrong template.
#[test]
fn given_422_with_errors_list_when_classified_then_returns_rendered_messages_in_order() {
    // GIVEN: A validation response with mixed codes
    let body = json!({
        "message": "Validation Failed",
        "errors": [
            {"code": "missing", "field": "id", "value": "5", "resource": "Card"},
            {"code": "already_exists", "field": "name", "resource": "Label"},
            {"code": "something_new", "message": "custom text"}
        ]
    });

    // WHEN: Classifying
    let error = classify(422, Some(&body));

    // THEN: One sentence per entry, response order
    assert_eq!(
        error,
        ClassifiedError::ValidationFailed {
            messages: vec![
                "The id 5 does not exist, for resource \"Card\"".to_string(),
                "Field \"name\" already exists, for resource \"Label\"".to_string(),
                "custom text".to_string(),
            ]
        }
    );
    assert_eq!(
        error.to_string(),
        "Validation Failed: The id 5 does not exist, for resource \"Card\", \
         Field \"name\" already exists, for resource \"Label\", custom text"
    );
}

/// **VALUE**: Verifies the single-entry example from the API documentation.
#[test]
fn given_422_with_single_missing_entry_when_classified_then_returns_one_sentence() {
    let body = json!({
        "message": "x",
        "errors": [{"code": "missing", "field": "id", "value": "5", "resource": "Card"}]
    });

    let error = classify(422, Some(&body));

    assert_eq!(
        error.validation_messages(),
        ["The id 5 does not exist, for resource \"Card\"".to_string()]
    );
}

/// **VALUE**: Verifies that a 422 without an `errors` list falls through to Generic.
///
/// **WHY THIS MATTERS**: Existing callers depend on this fallback shape; it is a
/// deliberate narrow case, not a gap to fill.
///
/// **BUG THIS CATCHES**: Would catch someone "improving" this into an empty
/// ValidationFailed.
#[test]
fn given_422_with_message_but_no_errors_when_classified_then_returns_generic() {
    // GIVEN: A 422 with only a message
    let body = json!({"message": "unprocessable"});

    // WHEN: Classifying
    let error = classify(422, Some(&body));

    // THEN: Generic with the message
    assert_eq!(
        error,
        ClassifiedError::Generic {
            status_code: HttpStatusCode(422),
            message: json!("unprocessable"),
        }
    );
}

/// **VALUE**: Verifies that bodies without a message reach Generic unchanged.
///
/// **BUG THIS CATCHES**: Would catch the fallback dropping list/scalar bodies or
/// inventing a message for absent ones.
#[test]
fn given_500_without_message_when_classified_then_generic_carries_raw_body() {
    // GIVEN: List, scalar and absent bodies
    let list = json!(["a", "b"]);
    let scalar = json!("Internal Server Error");

    // WHEN / THEN
    assert_eq!(
        classify(500, Some(&list)),
        ClassifiedError::Generic {
            status_code: HttpStatusCode(500),
            message: list.clone(),
        }
    );
    assert_eq!(
        classify(500, Some(&scalar)),
        ClassifiedError::Generic {
            status_code: HttpStatusCode(500),
            message: scalar.clone(),
        }
    );
    assert_eq!(
        classify(500, None),
        ClassifiedError::Generic {
            status_code: HttpStatusCode(500),
            message: Value::Null,
        }
    );
}

/// **VALUE**: Verifies 400/401 without a message body also fall back to Generic.
///
/// **BUG THIS CATCHES**: Would catch typed variants being produced with an empty message.
#[test]
fn given_400_without_message_when_classified_then_returns_generic() {
    let body = json!("invalid value for idBoard");

    let error = classify(400, Some(&body));

    assert_eq!(
        error,
        ClassifiedError::Generic {
            status_code: HttpStatusCode::BAD_REQUEST,
            message: body.clone(),
        }
    );
}

/// **VALUE**: Verifies a 422 with an `errors` list but no `message` falls back to
/// Generic carrying the whole body.
///
/// **WHY THIS MATTERS**: Field errors are only rendered for bodies that also carry a
/// message; without one the caller gets the untouched body.
///
/// **BUG THIS CATCHES**: Would catch the validation rule skipping the message check.
#[test]
fn given_422_with_errors_but_no_message_when_classified_then_returns_generic_with_body() {
    // GIVEN: A field error list without a message
    let body = json!({
        "errors": [{"code": "invalid", "field": "name", "resource": "Board"}]
    });

    // WHEN: Classifying
    let error = classify(422, Some(&body));

    // THEN: Generic with the whole object
    assert_eq!(
        error,
        ClassifiedError::Generic {
            status_code: HttpStatusCode::UNPROCESSABLE_ENTITY,
            message: body.clone(),
        }
    );
}

/// **VALUE**: Verifies a 401 object body without `message` falls back to Generic.
///
/// **BUG THIS CATCHES**: Would catch the unauthorized rule matching on status alone.
#[test]
fn given_401_object_without_message_when_classified_then_returns_generic_with_body() {
    // GIVEN: An object body with only an error field
    let body = json!({"error": "invalid token"});

    // WHEN: Classifying
    let error = classify(401, Some(&body));

    // THEN: Generic with the whole object
    assert_eq!(
        error,
        ClassifiedError::Generic {
            status_code: HttpStatusCode::UNAUTHORIZED,
            message: body.clone(),
        }
    );
}

/// **VALUE**: Verifies classification is a pure function.
///
/// **WHY THIS MATTERS**: The classifier is shared across requests and threads; any
/// hidden state would make identical failures classify differently.
///
/// **BUG THIS CATCHES**: Would catch caching or mutation inside the classifier.
#[test]
fn given_identical_inputs_when_classified_twice_then_results_are_equal() {
    // GIVEN: A single classifier and a validation body
    let classifier = ResponseErrorClassifier::new();
    let body = json!({"message": "x", "errors": [{"code": "invalid", "field": "f", "resource": "r"}]});

    // WHEN: Classifying twice
    let first = classifier.classify(422, Some(&body));
    let second = classifier.classify(422, Some(&body));

    // THEN: Value-equal
    assert_eq!(first, second);
}

/// **VALUE**: Verifies concurrent use from several threads needs no coordination.
#[test]
fn given_shared_classifier_when_used_from_threads_then_each_gets_same_result() {
    let classifier = ResponseErrorClassifier::new();
    let body = json!({"message": "no access"});

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| classifier.classify(401, Some(&body))))
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                ClassifiedError::Unauthorized {
                    message: "no access".to_string()
                }
            );
        }
    });
}
