//! Ledger service: the entry lifecycle as seen by end users.

use std::sync::Arc;

use serde::Serialize;
use shopledger_shared::types::EntryId;

use super::entry::{CreateEntryInput, Entry, NewEntry, PatchEntryInput};
use super::error::LedgerError;
use super::policy::{self, Caller};
use super::store::{EntryChanges, EntryOrder, EntryQuery, EntryStore, creator_names};
use super::totals::{DaySummary, Totals};
use super::validation::{
    normalize_notes, validate_amount, validate_create, validate_entry_type, validate_title,
};
use super::view::EntryView;
use crate::calendar::BusinessCalendar;

/// Entries of the current business day with their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayListing {
    /// Entries visible to the caller, newest first.
    pub items: Vec<EntryView>,
    /// Totals over `items`.
    pub summary: DaySummary,
}

/// Ledger service for recording and maintaining entries.
pub struct LedgerService<S: EntryStore> {
    store: Arc<S>,
    calendar: BusinessCalendar,
}

impl<S: EntryStore> LedgerService<S> {
    /// Creates a new ledger service.
    #[must_use]
    pub fn new(store: Arc<S>, calendar: BusinessCalendar) -> Self {
        Self { store, calendar }
    }

    /// Lists today's entries.
    ///
    /// Administrators see every entry; everyone else sees only their own,
    /// and the summary covers exactly the listed items.
    pub async fn list_today(&self, caller: &Caller) -> Result<TodayListing, LedgerError> {
        let today = self.calendar.today();
        let (from, to) = self.calendar.day_bounds_utc(today);
        let query = EntryQuery::window(from, to)
            .created_by((!caller.is_admin).then_some(caller.user_id))
            .order(EntryOrder::NewestFirst);

        let entries = self.store.query_window(&query).await?;
        let names = creator_names(self.store.as_ref(), &entries).await?;
        let totals = Totals::from_entries(&entries);

        let items = entries
            .iter()
            .map(|entry| {
                let name = names.get(&entry.created_by).cloned();
                policy::project(caller, entry, &self.calendar, name)
            })
            .collect();

        Ok(TodayListing {
            items,
            summary: DaySummary {
                date: today,
                totals,
            },
        })
    }

    /// Fetches one entry.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id does not exist, then `Forbidden` if the caller
    /// may not read it.
    pub async fn get_entry(&self, caller: &Caller, id: EntryId) -> Result<EntryView, LedgerError> {
        let entry = self.load(id).await?;
        policy::check_read(caller, &entry)?;

        let name = self
            .store
            .user_names(&[entry.created_by])
            .await?
            .remove(&entry.created_by);
        Ok(policy::project(caller, &entry, &self.calendar, name))
    }

    /// Records a new entry owned by the caller and returns its id.
    pub async fn create_entry(
        &self,
        caller: &Caller,
        input: CreateEntryInput,
    ) -> Result<EntryId, LedgerError> {
        let valid = validate_create(&input)?;
        let entry = NewEntry {
            entry_type: valid.entry_type,
            title: valid.title,
            amount: valid.amount,
            notes: valid.notes,
            created_at: self.calendar.now_utc(),
            created_by: caller.user_id,
        };

        let stored = self.store.insert(entry).await?;
        Ok(stored.id)
    }

    /// Applies a partial update.
    ///
    /// Checks run in order: existence, access, then each supplied field.
    /// Only supplied fields are written. Every successful patch stamps the
    /// last-modified fields; an administrator editing someone else's entry
    /// also raises `is_admin_edited`, which the store never lowers.
    pub async fn patch_entry(
        &self,
        caller: &Caller,
        id: EntryId,
        input: PatchEntryInput,
    ) -> Result<(), LedgerError> {
        let entry = self.load(id).await?;
        policy::check_mutation(caller, &entry, &self.calendar, self.calendar.today())?;

        let mut changes = EntryChanges::stamped(caller.user_id, self.calendar.now_utc());
        if let Some(raw) = &input.entry_type {
            changes.entry_type = Some(validate_entry_type(raw)?);
        }
        if let Some(title) = &input.title {
            changes.title = Some(validate_title(title)?);
        }
        if let Some(amount) = input.amount {
            changes.amount = Some(validate_amount(amount)?);
        }
        if let Some(notes) = &input.notes {
            changes.notes = Some(normalize_notes(notes.as_deref()));
        }
        changes.mark_admin_edited = caller.is_admin && !caller.owns(&entry);

        self.store.update(id, &changes).await?;
        Ok(())
    }

    /// Physically removes an entry, under the same rules as `patch_entry`.
    pub async fn delete_entry(&self, caller: &Caller, id: EntryId) -> Result<(), LedgerError> {
        let entry = self.load(id).await?;
        policy::check_mutation(caller, &entry, &self.calendar, self.calendar.today())?;

        self.store.delete(id).await?;
        Ok(())
    }

    async fn load(&self, id: EntryId) -> Result<Entry, LedgerError> {
        self.store
            .find(id)
            .await?
            .ok_or(LedgerError::NotFound(id))
    }
}
