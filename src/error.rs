//! Error types for the HubSpot list synchronizer.
//!
//! The layers fail in different shapes:
//!
//! - the HubSpot client returns expected 4xx answers as data and only fails
//!   with [`HubSpotClientError`] for statuses outside the protocol;
//! - repositories report known failures as [`RepositoryError`] and wrap
//!   everything else as [`PortError::Unexpected`];
//! - queries wrap repository failures in their own error type while
//!   commands return them as a value.

use thiserror::Error;

/// Faults raised by the HubSpot client for responses the protocol does not
/// anticipate.
#[derive(Error, Debug)]
pub enum HubSpotClientError {
    /// The API answered with a status outside the documented set
    #[error("{message} (status {status})")]
    UnexpectedStatus { status: u16, message: String },

    /// The request never produced a response
    #[error("{message}: {reason}")]
    Transport { message: String, reason: String },

    /// A success response body did not match the documented shape
    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl HubSpotClientError {
    /// HTTP status of the failed call, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Classification of a [`RepositoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryErrorKind {
    /// The target resource does not exist
    NotFound,
    /// The request payload was rejected
    Malformed,
    /// The record already exists
    Conflict,
    /// The operation is not allowed on this kind of resource
    NotPermitted,
    /// The remote service faulted
    Remote,
    /// The local source could not be read
    Source,
}

/// A known failure reported by a repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RepositoryError {
    pub kind: RepositoryErrorKind,
    pub message: String,
}

impl RepositoryError {
    pub fn new(kind: RepositoryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RepositoryErrorKind::NotFound, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(RepositoryErrorKind::Malformed, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(RepositoryErrorKind::Conflict, message)
    }

    pub fn not_permitted(message: impl Into<String>) -> Self {
        Self::new(RepositoryErrorKind::NotPermitted, message)
    }
}

impl From<HubSpotClientError> for RepositoryError {
    fn from(error: HubSpotClientError) -> Self {
        Self::new(RepositoryErrorKind::Remote, error.to_string())
    }
}

/// Errors returned by repository ports.
#[derive(Error, Debug)]
pub enum PortError {
    /// A failure the domain knows how to report
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Anything else; never turned into a domain outcome
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<HubSpotClientError> for PortError {
    fn from(error: HubSpotClientError) -> Self {
        Self::Repository(error.into())
    }
}

/// Errors from the import-all-contacts query.
#[derive(Error, Debug)]
pub enum ImportContactsError {
    #[error("Not possible import contacts")]
    Import {
        #[source]
        cause: RepositoryError,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Errors from the import-contacts-of-list query.
#[derive(Error, Debug)]
pub enum ImportListContactsError {
    #[error("Not possible import contacts of list")]
    Import {
        #[source]
        cause: RepositoryError,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<PortError> for ImportContactsError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Repository(cause) => Self::Import { cause },
            PortError::Unexpected(error) => Self::Unexpected(error),
        }
    }
}

impl From<PortError> for ImportListContactsError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Repository(cause) => Self::Import { cause },
            PortError::Unexpected(error) => Self::Unexpected(error),
        }
    }
}

/// Errors from the list domain report.
#[derive(Error, Debug)]
pub enum DomainReportError {
    /// The list identifier is not a non-negative integer
    #[error("Invalid list id")]
    InvalidListId(String),

    #[error(transparent)]
    Import(#[from] ImportListContactsError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with HubSpotClientError
pub type ClientResult<T> = Result<T, HubSpotClientError>;

/// Convenience type alias for Results with PortError
pub type PortResult<T> = Result<T, PortError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = HubSpotClientError::UnexpectedStatus {
            status: 500,
            message: "Not possible get all contacts in HubSpot".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Not possible get all contacts in HubSpot (status 500)"
        );
        assert_eq!(err.status(), Some(500));

        let err = RepositoryError::not_found("Contact list does not exist");
        assert_eq!(err.to_string(), "Contact list does not exist");

        let err = ConfigError::MissingVar("HUBSPOT_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: HUBSPOT_API_KEY"
        );
    }

    #[test]
    fn test_client_fault_becomes_remote_repository_error() {
        let fault = HubSpotClientError::Transport {
            message: "Not possible add contacts in HubSpot".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(fault.status(), None);

        match PortError::from(fault) {
            PortError::Repository(err) => {
                assert_eq!(err.kind, RepositoryErrorKind::Remote);
                assert!(err.message.contains("connection refused"));
            }
            other => panic!("Expected repository error, got: {:?}", other),
        }
    }

    #[test]
    fn test_query_errors_keep_cause() {
        let err = ImportListContactsError::Import {
            cause: RepositoryError::not_found("Contact list does not exist"),
        };
        assert_eq!(err.to_string(), "Not possible import contacts of list");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Contact list does not exist".to_string())
        );

        let err = DomainReportError::from(err);
        assert_eq!(err.to_string(), "Not possible import contacts of list");
    }
}
