//! Report error types.

use thiserror::Error;

use crate::ledger::StoreError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Store failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Day-by-day breakdown requested over too many days.
    #[error("Range covers {days} days; at most {max} are allowed")]
    RangeTooLong {
        /// Requested span, inclusive.
        days: i64,
        /// Allowed span.
        max: i64,
    },
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Store(_) => "STORE_ERROR",
            Self::RangeTooLong { .. } => "RANGE_TOO_LONG",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Store(_) => 500,
            Self::RangeTooLong { .. } => 400,
        }
    }
}
