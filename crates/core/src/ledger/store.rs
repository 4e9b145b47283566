//! Persistence seam for ledger entries.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shopledger_shared::types::{EntryId, UserId};

use super::entry::{Entry, EntryType, NewEntry};
use super::error::StoreError;

/// Ordering requested from a windowed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// Any order; used by aggregations.
    #[default]
    Unordered,
    /// Highest id first; used by listings.
    NewestFirst,
}

/// A windowed query over `created_at`, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    /// First instant of the window.
    pub from: DateTime<Utc>,
    /// Last instant of the window.
    pub to: DateTime<Utc>,
    /// Restrict to entries created by this user.
    pub created_by: Option<UserId>,
    /// Result ordering.
    pub order: EntryOrder,
}

impl EntryQuery {
    /// Builds an unordered query for `[from, to]`.
    #[must_use]
    pub fn window(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from,
            to,
            created_by: None,
            order: EntryOrder::Unordered,
        }
    }

    /// Restricts the query to one creator when `user` is set.
    #[must_use]
    pub fn created_by(mut self, user: Option<UserId>) -> Self {
        self.created_by = user;
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns true if `entry` falls inside this query.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        entry.created_at >= self.from
            && entry.created_at <= self.to
            && self.created_by.is_none_or(|user| entry.created_by == user)
    }
}

/// Validated field changes for one entry.
///
/// Only supplied fields are written, so concurrent patches touching
/// different fields both survive. `mark_admin_edited` can only raise the
/// stored flag, never clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChanges {
    /// New type, if supplied.
    pub entry_type: Option<EntryType>,
    /// New trimmed title, if supplied.
    pub title: Option<String>,
    /// New amount, if supplied.
    pub amount: Option<Decimal>,
    /// New notes, if supplied. `Some(None)` clears them.
    pub notes: Option<Option<String>>,
    /// Raise `is_admin_edited`.
    pub mark_admin_edited: bool,
    /// Mutation instant.
    pub modified_at: DateTime<Utc>,
    /// Mutating user.
    pub modified_by: UserId,
}

impl EntryChanges {
    /// Starts an empty change set stamped with `modified_by` at `modified_at`.
    #[must_use]
    pub fn stamped(modified_by: UserId, modified_at: DateTime<Utc>) -> Self {
        Self {
            entry_type: None,
            title: None,
            amount: None,
            notes: None,
            mark_admin_edited: false,
            modified_at,
            modified_by,
        }
    }

    /// Applies the changes to an in-memory entry.
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(entry_type) = self.entry_type {
            entry.entry_type = entry_type;
        }
        if let Some(title) = &self.title {
            entry.title.clone_from(title);
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
        if let Some(notes) = &self.notes {
            entry.notes.clone_from(notes);
        }
        entry.is_admin_edited |= self.mark_admin_edited;
        entry.last_modified_at = Some(self.modified_at);
        entry.last_modified_by = Some(self.modified_by);
    }
}

/// Repository trait for entry persistence.
///
/// This trait is implemented by the db crate. It carries no business rules.
pub trait EntryStore: Send + Sync {
    /// Persists a new entry and returns it with its assigned id.
    fn insert(
        &self,
        entry: NewEntry,
    ) -> impl std::future::Future<Output = Result<Entry, StoreError>> + Send;

    /// Finds an entry by id.
    fn find(
        &self,
        id: EntryId,
    ) -> impl std::future::Future<Output = Result<Option<Entry>, StoreError>> + Send;

    /// Returns every entry matching `query`.
    fn query_window(
        &self,
        query: &EntryQuery,
    ) -> impl std::future::Future<Output = Result<Vec<Entry>, StoreError>> + Send;

    /// Writes `changes` to one entry in a single statement.
    ///
    /// Fails with `StoreError::NotFound` if the id no longer exists.
    fn update(
        &self,
        id: EntryId,
        changes: &EntryChanges,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Removes an entry.
    ///
    /// Fails with `StoreError::NotFound` if the id no longer exists.
    fn delete(&self, id: EntryId)
    -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Resolves display names for the given users. Unknown ids are omitted.
    fn user_names(
        &self,
        ids: &[UserId],
    ) -> impl std::future::Future<Output = Result<HashMap<UserId, String>, StoreError>> + Send;
}

/// Resolves display names for the distinct creators of `entries`.
pub(crate) async fn creator_names<S: EntryStore>(
    store: &S,
    entries: &[Entry],
) -> Result<HashMap<UserId, String>, StoreError> {
    let ids: Vec<UserId> = entries
        .iter()
        .map(|e| e.created_by)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    store.user_names(&ids).await
}
