//! Error types for the foundation API client.
//!
//! # Design
//! The taxonomy is flat. Usage errors (`MissingParameter`) are raised while a
//! request is being built, before any I/O. `Transport` covers failures where
//! no response was received at all. Every response outside 200–299 lands in
//! `Http` with the raw status, headers and body; a 400 body that parses as a
//! `VersionError` is attached as well.

use thiserror::Error;

use crate::models::VersionError;

/// Errors returned by request building, dispatch, and response decoding.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required path parameter was empty.
    #[error("{operation}: missing required parameter `{parameter}`")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status outside 200–299.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
        version_error: Option<VersionError>,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded `VersionError` payload of a 400 response.
    pub fn version_error(&self) -> Option<&VersionError> {
        match self {
            ApiError::Http { version_error, .. } => version_error.as_ref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_names_operation_and_parameter() {
        let err = ApiError::MissingParameter {
            operation: "get_organization",
            parameter: "organization-id",
        };
        assert_eq!(
            err.to_string(),
            "get_organization: missing required parameter `organization-id`"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn http_error_exposes_status_and_payload() {
        let err = ApiError::Http {
            status: 400,
            headers: Vec::new(),
            body: "{}".to_string(),
            version_error: Some(VersionError {
                message: Some("unsupported".to_string()),
                ..VersionError::default()
            }),
        };
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
        assert_eq!(
            err.version_error().and_then(|v| v.message.as_deref()),
            Some("unsupported")
        );
    }

    #[test]
    fn not_found_is_detected_from_status() {
        let err = ApiError::Http {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
            version_error: None,
        };
        assert!(err.is_not_found());
        assert!(err.version_error().is_none());
    }
}
