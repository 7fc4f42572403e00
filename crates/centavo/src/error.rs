use serde::Deserialize;
use thiserror::Error;

/// Errors returned by Centavo API operations.
///
/// The request executor is the single point translating HTTP and
/// transport failures into this taxonomy; every resource method
/// surfaces exactly this type.
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected the credentials (HTTP 401/403).
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The request was malformed or referenced a missing resource
    /// (HTTP 400/404/422). `param` names the offending field when the
    /// server reports one.
    #[error("invalid request: {message}")]
    InvalidRequest {
        message: String,
        param: Option<String>,
    },

    /// Too many requests (HTTP 429).
    #[error("rate limited: {message}")]
    RateLimited { message: String },

    /// Any other non-2xx response.
    #[error("api error (status {status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        param: Option<String>,
    },

    /// A single attempt exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure (DNS, connect, TLS, broken stream).
    #[error("network error: {0}")]
    Network(String),

    /// Client construction failed (bad key prefix, bad base URL).
    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// JSON error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
}

impl Error {
    /// Classify a non-2xx response by status code and (best-effort) body.
    ///
    /// Bodies that don't match the documented envelope degrade to a
    /// generic [`Error::Api`] carrying the raw text.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
        let (code, message, param) = match parsed {
            Some(envelope) => (
                envelope.error.code,
                envelope
                    .error
                    .message
                    .unwrap_or_else(|| format!("HTTP {status}")),
                envelope.error.param,
            ),
            None => {
                let text = body.trim();
                let message = if text.is_empty() {
                    format!("HTTP {status}")
                } else {
                    text.to_string()
                };
                (None, message, None)
            }
        };

        match status {
            401 | 403 => Error::Authentication { message },
            400 | 404 | 422 => Error::InvalidRequest { message, param },
            429 => Error::RateLimited { message },
            _ => Error::Api {
                status,
                code,
                message,
                param,
            },
        }
    }

    /// Whether the retry loop may attempt this request again.
    ///
    /// Rate limits, 5xx responses, timeouts, and transport failures are
    /// transient; everything else surfaces immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited { .. } | Error::Timeout | Error::Network(_) => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_authentication() {
        let body = r#"{"error":{"code":"invalid_key","message":"bad key"}}"#;
        let err = Error::from_response(401, body);
        assert!(matches!(err, Error::Authentication { ref message } if message == "bad key"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_400_carries_offending_param() {
        let body = r#"{"error":{"code":"parameter_invalid","message":"amount must be positive","param":"amount"}}"#;
        match Error::from_response(400, body) {
            Error::InvalidRequest { message, param } => {
                assert_eq!(message, "amount must be positive");
                assert_eq!(param.as_deref(), Some("amount"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_429_maps_to_rate_limited_and_is_retryable() {
        let err = Error::from_response(429, r#"{"error":{"message":"slow down"}}"#);
        assert!(matches!(err, Error::RateLimited { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_5xx_is_retryable_generic_api_error() {
        let err = Error::from_response(503, "");
        match &err {
            Error::Api {
                status, message, ..
            } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "HTTP 503");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_retryable());
    }

    #[test]
    fn test_unparseable_body_keeps_raw_text() {
        let err = Error::from_response(500, "<html>gateway exploded</html>");
        match err {
            Error::Api { message, code, .. } => {
                assert_eq!(message, "<html>gateway exploded</html>");
                assert!(code.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_timeout_and_network_are_retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(Error::Network("connection reset".into()).is_retryable());
        assert!(!Error::Config("bad key".into()).is_retryable());
    }
}
