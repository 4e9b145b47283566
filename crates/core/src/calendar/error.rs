//! Calendar configuration errors.

use thiserror::Error;

/// Errors raised while building a [`super::BusinessCalendar`].
#[derive(Debug, Error)]
pub enum CalendarError {
    /// The configured timezone name is not a known IANA zone.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}
