//! Ledger reports.
//!
//! Read-only aggregations over business days:
//! - Daily listing with totals
//! - Per-day range with grand totals
//! - Range summary
//! - Per-user totals

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::{MAX_RANGE_DAYS, ReportService};
pub use types::*;
