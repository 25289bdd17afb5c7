use trello_core::error::ApiClientError;
use trello_core::{ClassifiedError, ClientConfig, TrelloClient};

use common::HttpStatusCode;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test helper: client pointed at the mock server's `/1/` prefix with credentials.
fn client_for(server: &MockServer) -> TrelloClient {
    let config = ClientConfig {
        base_url: format!("{}/1", server.uri()),
        ..ClientConfig::default()
    }
    .with_credentials("test-key", "test-token");

    TrelloClient::new(&config).expect("client should build")
}

/// **VALUE**: Verifies successful responses are decoded and credentials are sent as
/// `key`/`token` query parameters.
///
/// **WHY THIS MATTERS**: Trello rejects any request without both parameters.
///
/// **BUG THIS CATCHES**: Would catch credentials being dropped when the caller also
/// passes its own query parameters, or the `/1/` prefix being lost by `Url::join`.
#[tokio::test]
async fn given_success_response_when_get_called_then_returns_json_and_sends_credentials() {
    // GIVEN: A mock board endpoint
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/boards/abc"))
        .and(query_param("fields", "name"))
        .and(query_param("key", "test-key"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc", "name": "Roadmap"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching the board
    let board = client_for(&server)
        .get("/boards/abc", &[("fields", "name")])
        .await
        .unwrap();

    // THEN: Decoded body
    assert_eq!(board, json!({"id": "abc", "name": "Roadmap"}));
}

/// **VALUE**: Verifies a 422 response flows through the classifier to the caller.
///
/// **WHY THIS MATTERS**: This is the error hook: every failed request must surface
/// as a classified error the caller can match on.
///
/// **BUG THIS CATCHES**: Would catch the transport returning a raw HTTP error instead
/// of classifying.
#[tokio::test]
async fn given_validation_failure_when_post_called_then_returns_classified_validation_error() {
    // GIVEN: A card endpoint rejecting the payload
    let server = MockServer::start().await;
    let payload = json!({"name": "New card"});
    Mock::given(method("POST"))
        .and(path("/1/cards"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "errors": [{"code": "missing_field", "field": "idList", "resource": "Card"}]
        })))
        .mount(&server)
        .await;

    // WHEN: Creating the card
    let result = client_for(&server).post("cards", &payload).await;

    // THEN: ValidationFailed with the rendered field error
    match result {
        Err(ApiClientError::Classified { error, .. }) => assert_eq!(
            error,
            ClassifiedError::ValidationFailed {
                messages: vec!["Field \"idList\" is missing, for resource \"Card\"".to_string()]
            }
        ),
        other => panic!("Expected classified validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 429 is classified as rate limited even with a JSON body.
///
/// **BUG THIS CATCHES**: Would catch the transport retrying or the body leaking
/// into the rate-limit message.
#[tokio::test]
async fn given_rate_limited_response_when_put_called_then_returns_rate_limited_once() {
    // GIVEN: An endpoint that rate limits
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/1/cards/xyz"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"message": "API_TOKEN_LIMIT_EXCEEDED"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Updating
    let err = client_for(&server)
        .put("cards/xyz", &json!({"closed": true}))
        .await
        .unwrap_err();

    // THEN: RateLimited, no retry (expect(1) verified on drop)
    assert_eq!(err.as_classified(), Some(&ClassifiedError::rate_limited()));
}

/// **VALUE**: Verifies a non-JSON error body is classified as "no structured body".
///
/// **BUG THIS CATCHES**: Would catch a JSON error replacing the classified failure.
#[tokio::test]
async fn given_plain_text_error_when_delete_called_then_returns_generic_with_null_message() {
    // GIVEN: A 404 with a text body
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/1/labels/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("The requested resource was not found."))
        .mount(&server)
        .await;

    // WHEN: Deleting
    let err = client_for(&server).delete("labels/missing").await.unwrap_err();

    // THEN: Generic 404 without a structured message
    assert_eq!(
        err.as_classified(),
        Some(&ClassifiedError::Generic {
            status_code: HttpStatusCode(404),
            message: serde_json::Value::Null,
        })
    );
    assert_eq!(err.status_code(), Some(HttpStatusCode(404)));
}

/// **VALUE**: Verifies 401 responses surface as Unauthorized with the server's message.
#[tokio::test]
async fn given_unauthorized_response_when_get_called_then_returns_unauthorized() {
    // GIVEN: An endpoint rejecting the token
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/members/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "invalid token"})))
        .mount(&server)
        .await;

    // WHEN: Fetching the member
    let err = client_for(&server).get("members/me", &[]).await.unwrap_err();

    // THEN: Unauthorized
    assert!(matches!(
        err,
        ApiClientError::Classified {
            error: ClassifiedError::Unauthorized { ref message },
            ..
        } if message == "invalid token"
    ));
}

/// **VALUE**: Verifies an empty success body decodes to null instead of failing.
#[tokio::test]
async fn given_empty_success_body_when_delete_called_then_returns_null() {
    // GIVEN: A 200 with no body
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/1/webhooks/w1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    // WHEN: Deleting
    let value = client_for(&server).delete("webhooks/w1").await.unwrap();

    // THEN: Null
    assert!(value.is_null());
}

/// **VALUE**: Verifies an invalid base URL is rejected at construction.
#[test]
fn given_invalid_base_url_when_client_created_then_returns_url_parse_error() {
    // GIVEN: A config with a broken URL
    let config = ClientConfig {
        base_url: "not a url".to_string(),
        ..ClientConfig::default()
    };

    // WHEN: Building the client
    let result = TrelloClient::new(&config);

    // THEN: UrlParse
    assert!(matches!(result, Err(ApiClientError::UrlParse { .. })));
}
