//! API-specific error types
//!
//! Transport and decode failures carry the underlying error unchanged; only
//! HTTP 401 is classified from the response status.

use ppe_domain::PpeError;
use thiserror::Error;

/// Categories of API errors, used as stable logging labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Credentials rejected (401)
    Authorization,
    /// Network, DNS, TLS or timeout failure
    Transport,
    /// Request or response body could not be (de)serialized
    Codec,
    /// Service reported per-item failures in a create call
    Rejected,
    /// Scoped lookup returned an empty collection
    NotFound,
    /// Client construction or input validation failure
    Config,
}

impl ApiErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authorization => "authorization",
            Self::Transport => "transport",
            Self::Codec => "codec",
            Self::Rejected => "rejected",
            Self::NotFound => "not_found",
            Self::Config => "config",
        }
    }
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized => ApiErrorCategory::Authorization,
            Self::Transport(_) => ApiErrorCategory::Transport,
            Self::Decode(_) | Self::Encode(_) => ApiErrorCategory::Codec,
            Self::Rejected(_) => ApiErrorCategory::Rejected,
            Self::NotFound(_) => ApiErrorCategory::NotFound,
            Self::Config(_) | Self::InvalidInput(_) => ApiErrorCategory::Config,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<PpeError> for ApiError {
    fn from(err: PpeError) -> Self {
        match err {
            PpeError::Config(message) => Self::Config(message),
            PpeError::InvalidInput(message) => Self::InvalidInput(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Unauthorized.category(), ApiErrorCategory::Authorization);
        assert_eq!(
            ApiError::Rejected("duplicate".to_string()).category(),
            ApiErrorCategory::Rejected
        );
        assert_eq!(ApiError::NotFound("x".to_string()).category(), ApiErrorCategory::NotFound);

        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(ApiError::from(decode).category(), ApiErrorCategory::Codec);
    }

    #[test]
    fn test_unauthorized_message_has_no_payload() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Config("x".to_string()).is_unauthorized());
    }

    #[test]
    fn test_rejection_message_is_server_text() {
        let err = ApiError::Rejected("Domain already exists".to_string());
        assert_eq!(err.to_string(), "Domain already exists");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: ApiError = PpeError::InvalidInput("bad email".to_string()).into();
        assert!(matches!(err, ApiError::InvalidInput(ref m) if m == "bad email"));
        assert_eq!(err.category().as_str(), "config");
    }
}
