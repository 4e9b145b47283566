//! Ledger entry lifecycle.
//!
//! This module implements:
//! - Entry types and write inputs
//! - Validation and normalisation of inputs
//! - The access policy (read, mutate, field visibility)
//! - Per-type totals
//! - The store seam implemented by the db crate
//! - `LedgerService` for create, patch, delete and today's listing

pub mod entry;
pub mod error;
pub mod policy;
pub mod service;
pub mod store;
pub mod totals;
pub mod validation;
pub mod view;

#[cfg(test)]
pub(crate) mod memory;
#[cfg(test)]
mod validation_props;

pub use entry::{CreateEntryInput, Entry, EntryType, EntryTypeInput, NewEntry, PatchEntryInput};
pub use error::{AccessDenied, LedgerError, StoreError, ValidationError};
pub use policy::Caller;
pub use service::{LedgerService, TodayListing};
pub use store::{EntryChanges, EntryOrder, EntryQuery, EntryStore};
pub use totals::{DaySummary, Totals};
pub use view::{AdminEntryView, EntryItem, EntryView};
