//! Report output shapes.

use chrono::NaiveDate;
use serde::Serialize;
use shopledger_shared::types::UserId;

use crate::ledger::{AdminEntryView, DaySummary, Totals};

/// Every entry of one local day, with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    /// Local date.
    pub date: NaiveDate,
    /// Entries newest first, with tracking fields.
    pub items: Vec<AdminEntryView>,
    /// Totals over `items`.
    pub totals: Totals,
}

/// One totals row per local date, plus grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    /// First date, inclusive.
    pub from: NaiveDate,
    /// Last date, inclusive.
    pub to: NaiveDate,
    /// One row per date in `from..=to`, empty if `from > to`.
    pub days: Vec<DaySummary>,
    /// Sum of every row.
    pub grand_totals: Totals,
}

/// Totals over a whole range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// First date, inclusive.
    pub from: NaiveDate,
    /// Last date, inclusive.
    pub to: NaiveDate,
    /// Totals over the range.
    pub totals: Totals,
}

/// Totals of one creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTotals {
    /// Creator id.
    pub user_id: UserId,
    /// Creator display name, if the user still exists.
    pub user_name: Option<String>,
    /// Totals of that creator's entries.
    #[serde(flatten)]
    pub totals: Totals,
}

/// Per-creator totals over a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByUserReport {
    /// First date, inclusive.
    pub from: NaiveDate,
    /// Last date, inclusive.
    pub to: NaiveDate,
    /// Only creators with at least one entry, ordered by name.
    pub users: Vec<UserTotals>,
}
