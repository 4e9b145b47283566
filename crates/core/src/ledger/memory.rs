//! In-memory entry store used by unit tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use shopledger_shared::types::{EntryId, UserId};

use super::entry::{Entry, NewEntry};
use super::error::StoreError;
use super::store::{EntryChanges, EntryOrder, EntryQuery, EntryStore};

#[derive(Debug, Default)]
struct State {
    next_id: EntryId,
    entries: BTreeMap<EntryId, Entry>,
    users: HashMap<UserId, String>,
}

/// Entry store backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a display name.
    pub(crate) fn with_user(self, id: UserId, name: &str) -> Self {
        self.lock().users.insert(id, name.to_string());
        self
    }

    /// Stores an entry as-is, bypassing the service.
    pub(crate) fn seed(&self, entry: NewEntry) -> Entry {
        let mut state = self.lock();
        state.next_id += 1;
        let stored = entry.into_entry(state.next_id);
        state.entries.insert(stored.id, stored.clone());
        stored
    }

    pub(crate) fn get(&self, id: EntryId) -> Option<Entry> {
        self.lock().entries.get(&id).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().entries.len()
    }
}

impl EntryStore for MemoryStore {
    async fn insert(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        Ok(self.seed(entry))
    }

    async fn find(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        Ok(self.get(id))
    }

    async fn query_window(&self, query: &EntryQuery) -> Result<Vec<Entry>, StoreError> {
        let state = self.lock();
        let matching = state.entries.values().filter(|e| query.matches(e)).cloned();
        Ok(match query.order {
            EntryOrder::Unordered => matching.collect(),
            EntryOrder::NewestFirst => matching.rev().collect(),
        })
    }

    async fn update(&self, id: EntryId, changes: &EntryChanges) -> Result<(), StoreError> {
        let mut state = self.lock();
        let slot = state.entries.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        changes.apply_to(slot);
        Ok(())
    }

    async fn delete(&self, id: EntryId) -> Result<(), StoreError> {
        self.lock()
            .entries
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn user_names(&self, ids: &[UserId]) -> Result<HashMap<UserId, String>, StoreError> {
        let state = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| state.users.get(id).map(|name| (*id, name.clone())))
            .collect())
    }
}
