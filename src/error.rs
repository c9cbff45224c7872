//! Error types
//!
//! Every operation in the crate returns [`EcloudError`]. A 404 on a by-ID call
//! becomes [`EcloudError::NotFound`], tagged with the registry key of the
//! resource that was missing. Everything the transport reports is passed
//! through untouched.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EcloudError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EcloudError {
    /// Local precondition failure, raised before any request is sent
    #[error("invalid parameter: {0}")]
    Validation(&'static str),

    /// The API answered 404 for the given resource
    #[error("{resource} not found with ID [{id}]")]
    NotFound { resource: &'static str, id: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Any non-2xx status other than a mapped 404
    #[error("API request failed: {status}")]
    Api { status: StatusCode, body: String },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("build url error: {0}")]
    Url(#[from] url::ParseError),

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("{resource} has no action named {action}")]
    UnsupportedAction { resource: &'static str, action: String },
}

impl EcloudError {
    /// Build a NotFound error for a resource key
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a NotFound for the given resource key
    pub fn is_not_found_for(&self, key: &str) -> bool {
        matches!(self, Self::NotFound { resource, .. } if *resource == key)
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_id() {
        let err = EcloudError::not_found("vip", "vip-abcdef12");
        assert_eq!(err.to_string(), "vip not found with ID [vip-abcdef12]");
        assert!(err.is_not_found());
        assert!(err.is_not_found_for("vip"));
        assert!(!err.is_not_found_for("vpc"));
    }

    #[test]
    fn test_not_found_with_integer_id() {
        let err = EcloudError::not_found("virtual-machine", 123);
        assert!(matches!(
            err,
            EcloudError::NotFound { resource: "virtual-machine", ref id } if id == "123"
        ));
    }

    #[test]
    fn test_status_of_api_error() {
        let err = EcloudError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_has_no_status() {
        let err = EcloudError::Validation("id must not be empty");
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "invalid parameter: id must not be empty");
    }
}
