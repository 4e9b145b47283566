//! Business-day calendar.
//!
//! Every time-scoped query in the ledger is expressed in local calendar dates
//! of one fixed timezone. This module converts those dates into inclusive UTC
//! windows and maps stored UTC instants back onto local dates.

mod business_day;
mod clock;
mod error;

pub use business_day::BusinessCalendar;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CalendarError;
