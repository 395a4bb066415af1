/*
[INPUT]:  Error sources (HTTP transport, API error bodies, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the Mailchimp adapter
#[derive(Error, Debug)]
pub enum MailchimpError {
    /// Construction was attempted without an API key
    #[error("you must provide a Mailchimp API key")]
    MissingApiKey,

    /// Client construction failed
    #[error("configuration error: {0}")]
    Config(String),

    /// Request parameters failed to serialize
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The HTTP exchange did not complete (DNS, refused, timeout, TLS)
    #[error("API call to {path} failed: {source}")]
    Transport {
        path: String,
        source: reqwest::Error,
    },

    /// A success status carried a body that is not JSON
    #[error("API call to {path} returned an invalid response body: {source}")]
    InvalidResponseBody {
        path: String,
        source: serde_json::Error,
    },

    /// The API answered with a 4xx/5xx status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl MailchimpError {
    /// Build an API error from a 4xx/5xx status and the raw response body.
    ///
    /// The message is `"<title> : <detail>"` when the body carries both
    /// fields; otherwise the status line's canonical reason stands in.
    pub fn api(status: StatusCode, body: &str) -> Self {
        let message = title_and_detail(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_owned)
                .unwrap_or_else(|| format!("HTTP status {}", status.as_u16()))
        });

        MailchimpError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Check if the error was raised before any request was made
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MailchimpError::MissingApiKey | MailchimpError::Config(_)
        )
    }

    /// Check if the error came from the transport rather than the API
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            MailchimpError::Transport { .. } | MailchimpError::InvalidResponseBody { .. }
        )
    }

    /// Check if the API itself rejected the request
    pub fn is_api_error(&self) -> bool {
        matches!(self, MailchimpError::Api { .. })
    }

    /// HTTP status of an API rejection, if that is what this error is
    pub fn status(&self) -> Option<u16> {
        match self {
            MailchimpError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn title_and_detail(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    let title = parsed.get("title")?.as_str()?;
    let detail = parsed.get("detail")?.as_str()?;
    Some(format!("{title} : {detail}"))
}

/// Result type alias for Mailchimp operations
pub type Result<T> = std::result::Result<T, MailchimpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_title_and_detail() {
        let body = r#"{"type":"about:blank","title":"Bad Request","detail":"name too short","status":400}"#;
        let err = MailchimpError::api(StatusCode::BAD_REQUEST, body);
        match err {
            MailchimpError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bad Request : name too short");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_api_error_falls_back_on_non_json_body() {
        let err = MailchimpError::api(StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>");
        match err {
            MailchimpError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_api_error_falls_back_on_missing_fields() {
        let err = MailchimpError::api(StatusCode::NOT_FOUND, r#"{"title":"Resource Not Found"}"#);
        match err {
            MailchimpError::Api { message, .. } => assert_eq!(message, "Not Found"),
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(MailchimpError::MissingApiKey.is_config_error());
        assert!(!MailchimpError::MissingApiKey.is_api_error());

        let api = MailchimpError::api(StatusCode::FORBIDDEN, "{}");
        assert!(api.is_api_error());
        assert_eq!(api.status(), Some(403));
        assert!(!api.is_transport_error());
    }
}
