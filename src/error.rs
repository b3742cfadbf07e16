use thiserror::Error;

/// Errors returned by the query string entry points.
///
/// Only a violated input contract is an error. Malformed query text, a
/// missing `=` or an empty mapping all degrade to partial or empty output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryStringError {
    /// The input handed to `operation` was not of an accepted shape.
    #[error("[QueryString.{operation}] {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },
}

impl QueryStringError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        QueryStringError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryStringError>;
