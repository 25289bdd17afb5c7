use trello_core::ClassifiedError;
use trello_core::error::ApiClientError;

use common::HttpStatusCode;

use std::error::Error;

/// **VALUE**: Verifies that a classified failure's display names status, message and location.
///
/// **WHY THIS MATTERS**: Logs show only the top-level error string. It must say what
/// the server answered and where the client gave up.
///
/// **BUG THIS CATCHES**: Would catch the location or status being dropped from Display.
#[test]
fn given_classified_error_when_formatted_then_includes_status_message_and_location() {
    // GIVEN: A wrapped bad request
    let err = ApiClientError::classified(ClassifiedError::BadRequest {
        message: "invalid value for idList".to_string(),
    });

    // WHEN: Formatting
    let error_string = format!("{}", err);

    // THEN: Everything is there
    assert!(error_string.contains("Trello API Error"));
    assert!(error_string.contains("HTTP 400"));
    assert!(error_string.contains("invalid value for idList"));
    assert!(error_string.contains("api_client.rs"));
}

/// **VALUE**: Verifies that the classified error is reachable as the error source.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[source]`, which breaks
/// error-chain reporting.
#[test]
fn given_classified_error_when_source_inspected_then_returns_classification() {
    // GIVEN: A wrapped rate limit
    let err = ApiClientError::classified(ClassifiedError::rate_limited());

    // WHEN: Inspecting source and accessors
    let source = err.source();

    // THEN: Same classification both ways
    assert_eq!(source.map(|s| s.to_string()), Some("Wait a second.".to_string()));
    assert_eq!(err.status_code(), Some(HttpStatusCode::TOO_MANY_REQUESTS));
    assert!(matches!(
        err.as_classified(),
        Some(ClassifiedError::RateLimited { .. })
    ));
}

/// **VALUE**: Verifies URL errors convert with `?` and carry no status.
#[test]
fn given_url_parse_error_when_converted_then_is_url_parse_variant() {
    // GIVEN: A bad URL
    let parse_error = url::Url::parse("not a url").unwrap_err();

    // WHEN: Converting
    let err = ApiClientError::from(parse_error);

    // THEN: UrlParse without status
    assert!(matches!(err, ApiClientError::UrlParse { .. }));
    assert_eq!(err.status_code(), None);
}
