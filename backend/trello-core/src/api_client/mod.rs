//! Thin Trello REST transport.
//!
//! Every response outside 2xx/3xx is handed to the
//! [`ResponseErrorClassifier`] and surfaces as
//! [`ApiClientError::Classified`]. Nothing is retried.

use crate::classifier::ResponseErrorClassifier;
use crate::config::ClientConfig;
use crate::error::api_client::ApiClientError;

use common::{HttpStatusCode, RedactedCredential};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

const KEY_QUERY_PARAM: &str = "key";
const TOKEN_QUERY_PARAM: &str = "token";

#[derive(Clone)]
pub struct TrelloClient {
    base_url: Url,
    client: Client,
    api_key: Option<RedactedCredential>,
    token: Option<RedactedCredential>,
    classifier: ResponseErrorClassifier,
}

impl TrelloClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let mut base_url_str = config.base_url.clone();
        if !base_url_str.ends_with('/') {
            base_url_str.push('/');
        }
        let base_url = Url::parse(&base_url_str)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            client,
            api_key: config.api_key.clone(),
            token: config.token.clone(),
            classifier: ResponseErrorClassifier::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL and attach credentials and
    /// `query` as query parameters.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiClientError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;

        let credentials = [
            (KEY_QUERY_PARAM, self.api_key.as_ref()),
            (TOKEN_QUERY_PARAM, self.token.as_ref()),
        ];
        let has_params =
            !query.is_empty() || credentials.iter().any(|(_, value)| value.is_some());

        if has_params {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
            for (name, credential) in credentials {
                if let Some(credential) = credential {
                    pairs.append_pair(name, credential.expose());
                }
            }
        }

        Ok(url)
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiClientError> {
        let url = self.endpoint(path, query)?;
        self.execute(self.client.get(url)).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiClientError> {
        let url = self.endpoint(path, &[])?;
        self.execute(self.client.post(url).json(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiClientError> {
        let url = self.endpoint(path, &[])?;
        self.execute(self.client.put(url).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiClientError> {
        let url = self.endpoint(path, &[])?;
        self.execute(self.client.delete(url)).await
    }

    /// Send the request and either decode the success body or classify the
    /// failure.
    ///
    /// # Errors
    /// Returns [`ApiClientError::Classified`] for any non-2xx/3xx status, and
    /// the transport/JSON variants when the exchange itself fails.
    async fn execute(&self, request: RequestBuilder) -> Result<Value, ApiClientError> {
        let response = request.send().await?;
        let status_code = HttpStatusCode::from(response.status().as_u16());
        let text = response.text().await?;

        if !status_code.is_success() {
            let body = decode_error_body(&text);
            let error = self.classifier.classify(status_code, body.as_ref());
            warn!(
                "Trello request failed: HTTP {} ({}): {}",
                status_code,
                error.error_category(),
                error
            );
            return Err(ApiClientError::classified(error));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Error bodies that are empty or not JSON count as "no structured body".
pub(crate) fn decode_error_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }

    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Error response body is not JSON ({}), classifying without it", e);
            None
        }
    }
}
