//! Report generation service.
//!
//! Reports are read-only and recompute from the store on every call. Access
//! is limited to administrators by the transport layer.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use shopledger_shared::types::UserId;

use super::error::ReportError;
use super::types::{ByUserReport, DailyReport, RangeReport, SummaryReport, UserTotals};
use crate::calendar::BusinessCalendar;
use crate::ledger::store::creator_names;
use crate::ledger::{AdminEntryView, DaySummary, EntryOrder, EntryQuery, EntryStore, Totals};

/// Longest span, in days, that `range` will break down day by day.
pub const MAX_RANGE_DAYS: i64 = 3_660;

/// Service for aggregating entries over business days.
pub struct ReportService<S: EntryStore> {
    store: Arc<S>,
    calendar: BusinessCalendar,
}

impl<S: EntryStore> ReportService<S> {
    /// Creates a new report service.
    #[must_use]
    pub fn new(store: Arc<S>, calendar: BusinessCalendar) -> Self {
        Self { store, calendar }
    }

    /// Lists one local day's entries with their totals.
    pub async fn daily(
        &self,
        date: NaiveDate,
        user: Option<UserId>,
    ) -> Result<DailyReport, ReportError> {
        let (from, to) = self.calendar.day_bounds_utc(date);
        let query = EntryQuery::window(from, to)
            .created_by(user)
            .order(EntryOrder::NewestFirst);
        let entries = self.store.query_window(&query).await?;
        let names = creator_names(self.store.as_ref(), &entries).await?;

        let totals = Totals::from_entries(&entries);
        let items = entries
            .iter()
            .map(|entry| {
                let name = names.get(&entry.created_by).cloned();
                AdminEntryView::from_entry(entry, &self.calendar, name)
            })
            .collect();

        Ok(DailyReport { date, items, totals })
    }

    /// Produces one totals row per local date in `from..=to`.
    ///
    /// Entries are fetched with a single windowed query and bucketed by
    /// local creation date, so the grand totals always equal a direct
    /// aggregation of the whole range.
    ///
    /// # Errors
    ///
    /// `RangeTooLong` if the span exceeds `MAX_RANGE_DAYS`.
    pub async fn range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        user: Option<UserId>,
    ) -> Result<RangeReport, ReportError> {
        if from > to {
            return Ok(RangeReport {
                from,
                to,
                days: Vec::new(),
                grand_totals: Totals::default(),
            });
        }
        let days = (to - from).num_days() + 1;
        if days > MAX_RANGE_DAYS {
            return Err(ReportError::RangeTooLong {
                days,
                max: MAX_RANGE_DAYS,
            });
        }

        let mut buckets: BTreeMap<NaiveDate, Totals> = from
            .iter_days()
            .take_while(|day| *day <= to)
            .map(|day| (day, Totals::default()))
            .collect();

        let (start, end) = self.calendar.range_bounds_utc(from, to);
        let query = EntryQuery::window(start, end).created_by(user);
        for entry in self.store.query_window(&query).await? {
            let day = self.calendar.local_date(entry.created_at);
            if let Some(totals) = buckets.get_mut(&day) {
                totals.record(entry.entry_type, entry.amount);
            }
        }

        let days: Vec<DaySummary> = buckets
            .into_iter()
            .map(|(date, totals)| DaySummary { date, totals })
            .collect();
        let grand_totals = days.iter().map(|day| day.totals).sum();

        Ok(RangeReport {
            from,
            to,
            days,
            grand_totals,
        })
    }

    /// Totals over the whole range `[from, to]`.
    pub async fn summary(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        user: Option<UserId>,
    ) -> Result<SummaryReport, ReportError> {
        if from > to {
            return Ok(SummaryReport {
                from,
                to,
                totals: Totals::default(),
            });
        }

        let (start, end) = self.calendar.range_bounds_utc(from, to);
        let query = EntryQuery::window(start, end).created_by(user);
        let entries = self.store.query_window(&query).await?;

        Ok(SummaryReport {
            from,
            to,
            totals: Totals::from_entries(&entries),
        })
    }

    /// Totals per creator over the whole range.
    ///
    /// Only creators with at least one entry in range are listed.
    pub async fn by_user(&self, from: NaiveDate, to: NaiveDate) -> Result<ByUserReport, ReportError> {
        if from > to {
            return Ok(ByUserReport {
                from,
                to,
                users: Vec::new(),
            });
        }

        let (start, end) = self.calendar.range_bounds_utc(from, to);
        let entries = self.store.query_window(&EntryQuery::window(start, end)).await?;

        let mut per_user: HashMap<UserId, Totals> = HashMap::new();
        for entry in &entries {
            per_user
                .entry(entry.created_by)
                .or_default()
                .record(entry.entry_type, entry.amount);
        }

        let mut names = creator_names(self.store.as_ref(), &entries).await?;

        let mut users: Vec<UserTotals> = per_user
            .into_iter()
            .map(|(user_id, totals)| UserTotals {
                user_id,
                user_name: names.remove(&user_id),
                totals,
            })
            .collect();
        users.sort_by(|a, b| {
            (a.user_name.is_none(), &a.user_name, a.user_id)
                .cmp(&(b.user_name.is_none(), &b.user_name, b.user_id))
        });

        Ok(ByUserReport { from, to, users })
    }
}
