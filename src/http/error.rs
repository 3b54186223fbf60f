//! Error type for API calls.
//!
//! Distinguishes backend-reported failures (non-success status) from
//! transport failures, malformed response bodies, and the local
//! "no token held" precondition.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the content API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// No response was received (connection refused, DNS, TLS, ...).
    #[error("{source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected schema.
    #[error("Unexpected response from '{endpoint}': {source}")]
    UnexpectedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// An authenticated action was attempted without a stored token.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// A document id that cannot address a single resource.
    #[error("Invalid document id '{id}'")]
    InvalidDocumentId { id: String },

    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A local file could not be read for upload.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status reported by the backend, if the failure came with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for the local missing-token precondition.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, ApiError::AuthenticationRequired)
    }

    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Http { .. } => "http_error",
            ApiError::Transport { .. } => "transport_error",
            ApiError::UnexpectedResponse { .. } => "unexpected_response",
            ApiError::Encode(_) => "encode_error",
            ApiError::AuthenticationRequired => "authentication_required",
            ApiError::InvalidDocumentId { .. } => "invalid_document_id",
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::ClientBuild(_) => "client_build_error",
            ApiError::Io { .. } => "io_error",
        }
    }
}

/// Pull the human-readable message out of an error body.
///
/// Prefers the nested `error.message`, then a top-level `message`,
/// then a synthesized status message.
pub(crate) fn error_message(body: Option<&Value>, status: u16) -> String {
    body.and_then(|b| {
        non_empty_str(b.get("error").and_then(|e| e.get("message")))
            .or_else(|| non_empty_str(b.get("message")))
    })
    .map(str::to_string)
    .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_error_message_wins() {
        let body = json!({"error": {"message": "Invalid identifier or password"}, "message": "outer"});
        assert_eq!(error_message(Some(&body), 400), "Invalid identifier or password");
    }

    #[test]
    fn falls_back_to_top_level_message() {
        let body = json!({"message": "Forbidden"});
        assert_eq!(error_message(Some(&body), 403), "Forbidden");
    }

    #[test]
    fn empty_messages_are_skipped() {
        let body = json!({"error": {"message": ""}, "message": ""});
        assert_eq!(error_message(Some(&body), 500), "HTTP error! status: 500");
    }

    #[test]
    fn synthesizes_message_without_body() {
        assert_eq!(error_message(None, 502), "HTTP error! status: 502");
    }

    #[test]
    fn http_error_displays_backend_message() {
        let err = ApiError::Http {
            endpoint: "/api/articles".to_string(),
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), "http_error");
    }

    #[test]
    fn auth_required_has_no_status() {
        let err = ApiError::AuthenticationRequired;
        assert!(err.is_auth_required());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Authentication required");
    }
}
