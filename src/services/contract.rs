//! Execution contract shared by the use cases.
//!
//! Commands report known repository failures as a [`CommandResponse::Failure`]
//! value and only fail for unexpected errors. Queries return their output
//! directly and fail with a query-specific error that keeps the cause.

use crate::error::{PortError, PortResult, RepositoryError};
use async_trait::async_trait;

/// Outcome of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResponse<T> {
    Success(T),
    Failure(RepositoryError),
}

impl<T> CommandResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CommandResponse<U> {
        match self {
            Self::Success(value) => CommandResponse::Success(f(value)),
            Self::Failure(error) => CommandResponse::Failure(error),
        }
    }

    pub fn into_result(self) -> Result<T, RepositoryError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

/// Split a port result into a command outcome and an unexpected fault.
pub(crate) fn respond<T>(result: PortResult<T>) -> anyhow::Result<CommandResponse<T>> {
    match result {
        Ok(value) => Ok(CommandResponse::Success(value)),
        Err(PortError::Repository(error)) => Ok(CommandResponse::Failure(error)),
        Err(PortError::Unexpected(error)) => Err(error),
    }
}

/// A mutating use case.
#[async_trait]
pub trait Command: Send + Sync {
    type Output: Send;

    async fn execute(&self) -> anyhow::Result<CommandResponse<Self::Output>>;
}

/// A read-only use case.
#[async_trait]
pub trait Query: Send + Sync {
    type Input: Send;
    type Output: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
