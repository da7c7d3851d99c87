//! RSO error types and error-body normalization.

use std::fmt;

use serde::Deserialize;

/// Phase in which a local (non-HTTP) failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemErrorKind {
    /// Request construction or network failure.
    Http,
    /// Response body could not be read.
    Io,
    /// Response body could not be decoded.
    Json,
}

impl SystemErrorKind {
    /// Short code naming the failing phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http_err",
            Self::Io => "io_err",
            Self::Json => "json_err",
        }
    }
}

impl fmt::Display for SystemErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by RSO operations.
///
/// `Provider` means the server answered with a non-200 status; `System` means
/// the call failed before or while talking to the server. Callers can branch
/// on [`RsoError::is_system`] or [`RsoError::status_code`] (which uses the
/// `-1` sentinel for system errors).
#[derive(Debug, thiserror::Error)]
pub enum RsoError {
    /// The provider answered with a non-200 status.
    #[error("provider error ({status} {error}): {description}")]
    Provider {
        /// HTTP status code of the response.
        status: u16,
        /// Error code from the response body, or `"UNKNOWN"` when the body
        /// was not the expected JSON shape.
        error: String,
        /// Human-readable description; the raw body when unparseable.
        description: String,
    },

    /// The request failed locally: no usable HTTP response was received.
    #[error("{kind}: {message}")]
    System {
        /// Failing phase.
        kind: SystemErrorKind,
        /// Message of the underlying failure.
        message: String,
        /// Underlying cause, kept for programmatic inspection.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Wire shape of a provider error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    error_description: String,
}

impl RsoError {
    /// Normalize a non-200 response into a provider error.
    ///
    /// Never fails: a body that is not the expected
    /// `{error, error_description}` JSON degrades to kind `"UNKNOWN"` with
    /// the raw body as the description. The status code is preserved either
    /// way.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => Self::Provider {
                status,
                error: parsed.error,
                description: parsed.error_description,
            },
            Err(_) => Self::Provider {
                status,
                error: "UNKNOWN".into(),
                description: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }

    fn system(kind: SystemErrorKind, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::System {
            kind,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Wrap a request-construction or network failure.
    pub(crate) fn http(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::system(SystemErrorKind::Http, err)
    }

    /// Wrap a body-read failure.
    pub(crate) fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::system(SystemErrorKind::Io, err)
    }

    /// Wrap a response-decode failure.
    pub(crate) fn json(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::system(SystemErrorKind::Json, err)
    }

    /// HTTP status of a provider error, or `-1` when no response was
    /// received.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Provider { status, .. } => i32::from(*status),
            Self::System { .. } => -1,
        }
    }

    /// Error code: the provider's `error` field, or the failing-phase code
    /// (`http_err`, `io_err`, `json_err`) for system errors.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Provider { error, .. } => error,
            Self::System { kind, .. } => kind.as_str(),
        }
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Provider { description, .. } => description,
            Self::System { message, .. } => message,
        }
    }

    /// Whether the error originated locally rather than from the provider.
    #[must_use]
    pub const fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }
}

/// Result type for RSO operations.
pub type RsoResult<T> = Result<T, RsoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_well_formed_body() {
        let body = br#"{"error":"invalid_grant","error_description":"code expired"}"#;
        let err = RsoError::from_response(400, body);

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.kind(), "invalid_grant");
        assert_eq!(err.description(), "code expired");
        assert!(!err.is_system());
    }

    #[test]
    fn test_from_response_malformed_body() {
        let body = b"<html>502 Bad Gateway</html>";
        let err = RsoError::from_response(502, body);

        assert_eq!(err.status_code(), 502);
        assert_eq!(err.kind(), "UNKNOWN");
        assert_eq!(err.description(), "<html>502 Bad Gateway</html>");
    }

    #[test]
    fn test_from_response_missing_description() {
        let body = br#"{"error":"invalid_client"}"#;
        let err = RsoError::from_response(401, body);

        assert_eq!(err.kind(), "invalid_client");
        assert_eq!(err.description(), "");
    }

    #[test]
    fn test_system_error_sentinel_status() {
        let err = RsoError::json(serde_json::from_str::<String>("not json").unwrap_err());

        assert_eq!(err.status_code(), -1);
        assert_eq!(err.kind(), "json_err");
        assert!(!err.description().is_empty());
        assert!(err.is_system());
    }

    #[test]
    fn test_system_error_keeps_source() {
        let err = RsoError::json(serde_json::from_str::<String>("{").unwrap_err());
        assert!(std::error::Error::source(&err).is_some());
    }
}
