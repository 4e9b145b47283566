//! Ledger entry domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopledger_shared::types::{EntryId, UserId};

/// Classification of a financial movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Goods bought for resale.
    Purchase,
    /// Operating cost.
    Expense,
    /// Revenue from a sale.
    Sale,
}

impl EntryType {
    /// All defined variants, in legacy code order.
    pub const ALL: [Self; 3] = [Self::Purchase, Self::Expense, Self::Sale];

    /// Returns the legacy numeric code (1 Purchase, 2 Expense, 3 Sale).
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Purchase => 1,
            Self::Expense => 2,
            Self::Sale => 3,
        }
    }

    /// Looks up a variant by its legacy numeric code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Looks up a variant by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Expense => "expense",
            Self::Sale => "sale",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry type as supplied by a caller, before it is checked against the
/// defined variants.
///
/// Clients may send either the name (`"sale"`) or the legacy numeric code (`3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryTypeInput {
    /// Legacy numeric code.
    Code(i64),
    /// Variant name.
    Name(String),
}

impl EntryTypeInput {
    /// Resolves the raw value to a defined variant.
    #[must_use]
    pub fn resolve(&self) -> Option<EntryType> {
        match self {
            Self::Code(code) => EntryType::from_code(*code),
            Self::Name(name) => EntryType::from_name(name),
        }
    }
}

impl std::fmt::Display for EntryTypeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<EntryType> for EntryTypeInput {
    fn from(entry_type: EntryType) -> Self {
        Self::Name(entry_type.as_str().to_string())
    }
}

/// A stored financial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Classification.
    pub entry_type: EntryType,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Strictly positive amount.
    pub amount: Decimal,
    /// Trimmed notes, `None` when blank.
    pub notes: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Owner.
    pub created_by: UserId,
    /// Set once an administrator edits another user's entry; never cleared.
    pub is_admin_edited: bool,
    /// Instant of the last mutation.
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Author of the last mutation.
    pub last_modified_by: Option<UserId>,
}

/// A validated entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Classification.
    pub entry_type: EntryType,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Strictly positive amount.
    pub amount: Decimal,
    /// Trimmed notes.
    pub notes: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Owner.
    pub created_by: UserId,
}

impl NewEntry {
    /// Attaches the store-assigned id, producing an untouched entry.
    #[must_use]
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            entry_type: self.entry_type,
            title: self.title,
            amount: self.amount,
            notes: self.notes,
            created_at: self.created_at,
            created_by: self.created_by,
            is_admin_edited: false,
            last_modified_at: None,
            last_modified_by: None,
        }
    }
}

/// Request to record a new entry.
///
/// Missing fields deserialize to values that fail validation, so the caller
/// always gets the specific rule that was broken.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEntryInput {
    /// Entry type.
    #[serde(rename = "type", default)]
    pub entry_type: Option<EntryTypeInput>,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Amount; must be strictly positive.
    #[serde(default)]
    pub amount: Decimal,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update of an entry.
///
/// Each field is applied only when present. `notes` distinguishes "absent"
/// (`None`) from "explicitly null or blank" (`Some(None)` / `Some(Some(""))`),
/// both of which clear the notes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchEntryInput {
    /// New entry type.
    #[serde(rename = "type", default)]
    pub entry_type: Option<EntryTypeInput>,
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// New notes.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notes: Option<Option<String>>,
}
