//! HTTP transport used by the client.
//!
//! The client only ever needs one capability from the network: POST a JSON
//! body to a path under the phone-number endpoint and decode the reply.
//! [`Transport`] is that seam. [`HttpTransport`] talks to the Graph API;
//! [`MockTransport`] records requests in memory.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, ErrorEnvelope, Result};

/// Something that can POST JSON to the messaging endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `path` (relative to the endpoint base) and
    /// decode the response.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send;
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP Transport
// ─────────────────────────────────────────────────────────────────────────────

/// reqwest-backed transport bound to `https://<host>/<version>/<phone-number-id>/`.
///
/// The bearer token and JSON content type are installed as default headers
/// when the client is built, so they apply to every request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpTransport {
    pub(crate) fn new(http: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            http,
            base_url,
            timeout,
        }
    }

    /// The phone-number endpoint requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for an endpoint path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(Error::from)
    }

    /// Extract an error from a failed response.
    async fn extract_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        match response.json::<ErrorEnvelope>().await {
            Ok(ErrorEnvelope { error }) => {
                tracing::warn!(
                    status,
                    code = ?error.code,
                    error_subcode = ?error.error_subcode,
                    fbtrace_id = ?error.fbtrace_id,
                    message = %error.message,
                    "WhatsApp API returned an error"
                );
                if status == 401 {
                    Error::Auth(error.message)
                } else {
                    Error::Api {
                        status,
                        code: error.code,
                        error_subcode: error.error_subcode,
                        error_type: error.error_type,
                        message: error.message,
                        fbtrace_id: error.fbtrace_id,
                    }
                }
            }
            Err(_) => {
                tracing::warn!(status, "WhatsApp API returned an unparseable error body");
                Error::Api {
                    status,
                    code: None,
                    error_subcode: None,
                    error_type: None,
                    message: format!("HTTP {}", status),
                    fbtrace_id: None,
                }
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send,
    {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::extract_error(response).await)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mock Transport
// ─────────────────────────────────────────────────────────────────────────────

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub body: serde_json::Value,
}

/// An in-memory transport for tests.
///
/// Every request is recorded as JSON. Queued responses are returned in order;
/// once the queue is empty a canned reply is returned that decodes as both a
/// message response and a status response.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<serde_json::Value>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that replays `responses` in order.
    pub fn with_responses(responses: Vec<serde_json::Value>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    /// Queue another response.
    pub fn push_response(&self, response: serde_json::Value) {
        self.responses.lock().push_back(response);
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn canned_response() -> serde_json::Value {
        serde_json::json!({
            "messaging_product": "whatsapp",
            "contacts": [],
            "messages": [{ "id": "wamid.mock" }],
            "success": true
        })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send,
    {
        let body = serde_json::to_value(body)?;
        self.requests.lock().push(RecordedRequest {
            path: path.to_string(),
            body,
        });

        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(Self::canned_response);
        Ok(serde_json::from_value(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wacloud_types::{MessageResponse, StatusResponse};

    #[test]
    fn test_url_building() {
        let transport = HttpTransport::new(
            reqwest::Client::new(),
            Url::parse("https://graph.facebook.com/v20.0/123/").unwrap(),
            Duration::from_secs(1),
        );

        let url = transport.url("messages").unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.facebook.com/v20.0/123/messages"
        );

        let url = transport.url("/messages").unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.facebook.com/v20.0/123/messages"
        );
    }

    #[tokio::test]
    async fn test_mock_records_and_replays() {
        let mock = MockTransport::with_responses(vec![json!({
            "messaging_product": "whatsapp",
            "messages": [{ "id": "wamid.first" }]
        })]);

        let first: MessageResponse = mock.post("/messages", &json!({ "a": 1 })).await.unwrap();
        assert_eq!(first.message_id(), Some("wamid.first"));

        let second: StatusResponse = mock.post("/messages", &json!({ "b": 2 })).await.unwrap();
        assert!(second.success);

        assert_eq!(mock.request_count(), 2);
        assert_eq!(
            mock.last_request(),
            Some(RecordedRequest {
                path: "/messages".to_string(),
                body: json!({ "b": 2 }),
            })
        );
    }

    #[tokio::test]
    async fn test_mock_decode_failure_is_json_error() {
        let mock = MockTransport::with_responses(vec![json!({ "unexpected": true })]);
        let result: Result<StatusResponse> = mock.post("/messages", &json!({})).await;
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
