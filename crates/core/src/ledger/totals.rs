//! Per-type totals shared by listings and every report shape.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::entry::{Entry, EntryType};

/// Net result of a set of movements: sales minus everything spent.
#[must_use]
pub fn net_total(purchases: Decimal, expenses: Decimal, sales: Decimal) -> Decimal {
    sales - (purchases + expenses)
}

/// Sums of entry amounts by type, plus the derived net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    /// Sum of purchase amounts.
    pub purchases_total: Decimal,
    /// Sum of expense amounts.
    pub expenses_total: Decimal,
    /// Sum of sale amounts.
    pub sales_total: Decimal,
    /// `sales_total - (purchases_total + expenses_total)`.
    pub net_total: Decimal,
}

impl Totals {
    /// Builds totals from per-type sums.
    pub fn new(purchases: Decimal, expenses: Decimal, sales: Decimal) -> Self {
        Self {
            purchases_total: purchases,
            expenses_total: expenses,
            sales_total: sales,
            net_total: net_total(purchases, expenses, sales),
        }
    }

    /// Aggregates a set of entries in one pass.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            totals.record(entry.entry_type, entry.amount);
        }
        totals
    }

    /// Adds one movement.
    pub fn record(&mut self, entry_type: EntryType, amount: Decimal) {
        match entry_type {
            EntryType::Purchase => self.purchases_total += amount,
            EntryType::Expense => self.expenses_total += amount,
            EntryType::Sale => self.sales_total += amount,
        }
        self.net_total = net_total(self.purchases_total, self.expenses_total, self.sales_total);
    }
}

impl Add for Totals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.purchases_total + rhs.purchases_total,
            self.expenses_total + rhs.expenses_total,
            self.sales_total + rhs.sales_total,
        )
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Totals for one local business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    /// Local date.
    pub date: NaiveDate,
    /// Totals for that date.
    #[serde(flatten)]
    pub totals: Totals,
}
