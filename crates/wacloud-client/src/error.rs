//! Client error types.

use thiserror::Error;

/// Graph error codes that signal throttling.
const RATE_LIMIT_CODES: [i64; 2] = [130429, 131056];

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The Graph API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Graph error code, when the body carried one.
        code: Option<i64>,
        /// Finer-grained Graph error code, e.g. `2494010`.
        error_subcode: Option<i64>,
        /// Graph error type, e.g. `OAuthException`.
        error_type: Option<String>,
        /// Error message from the API.
        message: String,
        /// Trace id to quote when contacting Meta support.
        fbtrace_id: Option<String>,
    },

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_)) || matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Error::Api { status: 429, .. } => true,
            Error::Api {
                code: Some(code), ..
            } => RATE_LIMIT_CODES.contains(code),
            _ => false,
        }
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the Graph API: `{"error": {...}}`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: GraphError,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphError {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub error_subcode: Option<i64>,
    #[serde(default)]
    pub fbtrace_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, code: Option<i64>) -> Error {
        Error::Api {
            status,
            code,
            error_subcode: None,
            error_type: None,
            message: "boom".to_string(),
            fbtrace_id: None,
        }
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(api(429, None).is_rate_limited());
        assert!(api(400, Some(131056)).is_rate_limited());
        assert!(api(400, Some(130429)).is_rate_limited());
        assert!(!api(400, Some(100)).is_rate_limited());
        assert!(!Error::Config("x".into()).is_rate_limited());
    }

    #[test]
    fn test_status_predicates() {
        assert!(api(401, Some(190)).is_auth_error());
        assert!(Error::Auth("expired".into()).is_auth_error());
        assert!(api(503, None).is_server_error());
        assert!(!api(400, None).is_server_error());
    }

    #[test]
    fn test_parse_graph_error() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"error":{"message":"Invalid parameter","type":"OAuthException","code":100,"error_subcode":2494010,"fbtrace_id":"AbC"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error.message, "Invalid parameter");
        assert_eq!(envelope.error.error_type.as_deref(), Some("OAuthException"));
        assert_eq!(envelope.error.code, Some(100));
        assert_eq!(envelope.error.error_subcode, Some(2494010));
        assert_eq!(envelope.error.fbtrace_id.as_deref(), Some("AbC"));
    }

    #[test]
    fn test_parse_graph_error_without_subcode() {
        let body = r#"{"error":{"message":"Bad","code":131000}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, Some(131000));
        assert_eq!(envelope.error.error_subcode, None);
        assert_eq!(envelope.error.error_type, None);
    }

    #[test]
    fn test_display() {
        assert_eq!(api(400, None).to_string(), "API error (400): boom");
    }
}
