//! Error taxonomy for the admin console.
//!
//! Remote failures never escape a screen: call sites log them and turn them
//! into notifications. Validation runs before any request is issued.

use thiserror::Error;

/// A request failed or the server answered with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("{method} {url} failed: {reason}")]
    Transport {
        method: &'static str,
        url: String,
        reason: String,
    },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Required fields were missing or blank. Nothing was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
}

/// File transfer to a bulk-import endpoint failed or was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("upload of {file_name} was rejected: {source}")]
    Rejected {
        file_name: String,
        #[source]
        source: NetworkError,
    },
}

/// Failure of a managed-list operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

pub type ListResult<T> = Result<T, ListError>;

/// Login failures. Only ever surfaced on the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    #[error("You do not have admin privileges.")]
    NotAdmin,

    #[error("Unable to reach the server: {0}")]
    Network(#[from] NetworkError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_fields() {
        let err = ValidationError {
            missing: vec!["name".into(), "code".into()],
        };
        assert_eq!(err.to_string(), "missing required fields: name, code");
    }

    #[test]
    fn list_error_wraps_network_transparently() {
        let err: ListError = NetworkError::Status {
            method: "DELETE",
            url: "http://localhost:9000/api/courses/3".into(),
            status: 404,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "DELETE http://localhost:9000/api/courses/3 returned HTTP 404"
        );
    }
}
