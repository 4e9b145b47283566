//! Ledger error types.
//!
//! Errors are split by origin: input validation, access policy, and the
//! backing store. `LedgerError` is what the service hands to its caller.

use chrono::NaiveDate;
use shopledger_shared::types::EntryId;
use thiserror::Error;

/// A specific input rule that was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty after trimming.
    #[error("Title is required")]
    EmptyTitle,

    /// Title is longer than the stored column allows.
    #[error("Title must be at most {max} characters")]
    TitleTooLong {
        /// Allowed length in characters.
        max: usize,
    },

    /// Amount is zero or negative.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount carries more decimal places than are stored.
    #[error("Amount must have at most {max_scale} decimal places")]
    AmountTooPrecise {
        /// Allowed decimal places.
        max_scale: u32,
    },

    /// Amount does not fit the stored precision.
    #[error("Amount is too large")]
    AmountTooLarge,

    /// Entry type is not one of the defined variants.
    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    /// Entry type was not supplied.
    #[error("Entry type is required")]
    MissingEntryType,
}

impl ValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "EMPTY_TITLE",
            Self::TitleTooLong { .. } => "TITLE_TOO_LONG",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::AmountTooPrecise { .. } => "AMOUNT_TOO_PRECISE",
            Self::AmountTooLarge => "AMOUNT_TOO_LARGE",
            Self::InvalidEntryType(_) => "INVALID_ENTRY_TYPE",
            Self::MissingEntryType => "MISSING_ENTRY_TYPE",
        }
    }
}

/// Reason the access policy refused an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// Caller is neither an administrator nor the owner.
    #[error("Entry belongs to another user")]
    NotOwner,

    /// Owner tried to change an entry after its business day ended.
    #[error("Entry from {created_on} can no longer be changed on {today}")]
    OutsideBusinessDay {
        /// Local date the entry was created on.
        created_on: NaiveDate,
        /// Current local date.
        today: NaiveDate,
    },
}

/// Failures reported by an entry store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The entry does not exist, possibly removed concurrently.
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// Backend failure.
    #[error("Store error: {0}")]
    Backend(String),
}

/// Errors returned by the ledger service.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Input broke a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entry does not exist.
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// Access policy refused the operation.
    #[error("Forbidden: {0}")]
    Forbidden(#[from] AccessDenied),

    /// Store failure, propagated unchanged.
    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Backend(message) => Self::Store(message),
        }
    }
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.error_code(),
            Self::NotFound(_) => "ENTRY_NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Store(_) => 500,
        }
    }
}
