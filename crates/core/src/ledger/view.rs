//! Role-dependent projections of an entry.

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shopledger_shared::types::{EntryId, UserId};

use super::entry::{Entry, EntryType};
use crate::calendar::BusinessCalendar;

/// Business fields of an entry, visible to every reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryItem {
    /// Entry id.
    pub id: EntryId,
    /// Entry type.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Title.
    pub title: String,
    /// Amount.
    pub amount: Decimal,
    /// Notes.
    pub notes: Option<String>,
    /// Creation time in the business timezone.
    pub created_at_local: DateTime<FixedOffset>,
    /// Owner id.
    pub created_by_user_id: UserId,
    /// Owner display name, if known.
    pub created_by_user_name: Option<String>,
}

/// Full projection including edit tracking, for administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminEntryView {
    /// Business fields.
    #[serde(flatten)]
    pub item: EntryItem,
    /// Whether an administrator has edited another user's entry.
    pub is_admin_edited: bool,
    /// Last mutation instant.
    pub last_modified_at_utc: Option<DateTime<Utc>>,
    /// Last mutation instant in the business timezone.
    pub last_modified_at_local: Option<DateTime<FixedOffset>>,
    /// Author of the last mutation.
    pub last_modified_by_user_id: Option<UserId>,
}

/// What a caller is allowed to see of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryView {
    /// Full projection.
    Admin(AdminEntryView),
    /// Business fields only.
    Staff(EntryItem),
}

impl EntryView {
    /// Returns the business fields common to both projections.
    #[must_use]
    pub fn item(&self) -> &EntryItem {
        match self {
            Self::Admin(view) => &view.item,
            Self::Staff(item) => item,
        }
    }
}

impl EntryItem {
    /// Projects the business fields of `entry`.
    #[must_use]
    pub fn from_entry(
        entry: &Entry,
        calendar: &BusinessCalendar,
        created_by_user_name: Option<String>,
    ) -> Self {
        Self {
            id: entry.id,
            entry_type: entry.entry_type,
            title: entry.title.clone(),
            amount: entry.amount,
            notes: entry.notes.clone(),
            created_at_local: calendar.to_local(entry.created_at),
            created_by_user_id: entry.created_by,
            created_by_user_name,
        }
    }
}

impl AdminEntryView {
    /// Projects every field of `entry`.
    #[must_use]
    pub fn from_entry(
        entry: &Entry,
        calendar: &BusinessCalendar,
        created_by_user_name: Option<String>,
    ) -> Self {
        Self {
            item: EntryItem::from_entry(entry, calendar, created_by_user_name),
            is_admin_edited: entry.is_admin_edited,
            last_modified_at_utc: entry.last_modified_at,
            last_modified_at_local: entry.last_modified_at.map(|at| calendar.to_local(at)),
            last_modified_by_user_id: entry.last_modified_by,
        }
    }
}
