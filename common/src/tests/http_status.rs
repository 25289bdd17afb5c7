use crate::HttpStatusCode;

/// **VALUE**: Verifies the success range the transport uses to decide whether to classify.
///
/// **WHY THIS MATTERS**: Only non-2xx/3xx responses reach the classifier. A wrong
/// boundary would either classify successful responses or swallow failures.
///
/// **BUG THIS CATCHES**: Off-by-one errors at 199/200 and 399/400.
#[test]
fn given_status_boundaries_when_is_success_called_then_only_2xx_and_3xx_succeed() {
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(304).is_success());
    assert!(HttpStatusCode(399).is_success());
    assert!(!HttpStatusCode(400).is_success());
    assert!(!HttpStatusCode(500).is_success());
}

/// **VALUE**: Verifies client/server error ranges used for error categories.
///
/// **BUG THIS CATCHES**: A 5xx counted as client error (or vice versa) in log fields.
#[test]
fn given_error_statuses_when_categorized_then_ranges_are_disjoint() {
    assert!(HttpStatusCode::TOO_MANY_REQUESTS.is_client_error());
    assert!(!HttpStatusCode::TOO_MANY_REQUESTS.is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());
}

/// **VALUE**: Verifies that the status serializes as a bare number.
///
/// **WHY THIS MATTERS**: Serialized classified errors expose `status_code: 422`,
/// not `status_code: [422]`.
#[test]
fn given_status_code_when_serialized_then_is_plain_number() {
    // GIVEN: A status code
    let status = HttpStatusCode::UNPROCESSABLE_ENTITY;

    // WHEN: Serializing
    let json = serde_json::to_string(&status).unwrap();

    // THEN: Transparent
    assert_eq!(json, "422");
    assert_eq!(status.to_string(), "422");
    assert_eq!(HttpStatusCode::from(401), HttpStatusCode::UNAUTHORIZED);
}
