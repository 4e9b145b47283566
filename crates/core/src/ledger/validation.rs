//! Input validation and normalisation for entry writes.

use rust_decimal::Decimal;

use super::entry::{CreateEntryInput, EntryType, EntryTypeInput};
use super::error::ValidationError;

/// Longest title accepted, in characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// Most fractional digits an amount may carry.
pub const MAX_AMOUNT_SCALE: u32 = 4;

/// Smallest amount that is too large to store (15 integer digits).
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Create input after validation, ready to be stamped and stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    /// Resolved type.
    pub entry_type: EntryType,
    /// Trimmed title.
    pub title: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Normalised notes.
    pub notes: Option<String>,
}

/// Validates a title and returns it trimmed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyTitle` if nothing is left after trimming,
/// or `TitleTooLong` past `MAX_TITLE_CHARS`.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong {
            max: MAX_TITLE_CHARS,
        });
    }
    Ok(title.to_string())
}

/// Validates an amount and returns it without trailing zeros.
///
/// # Errors
///
/// - `NonPositiveAmount` if the amount is not above zero.
/// - `AmountTooPrecise` for more than `MAX_AMOUNT_SCALE` decimal places.
/// - `AmountTooLarge` at or beyond `AMOUNT_LIMIT`.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    let amount = amount.normalize();
    if amount.scale() > MAX_AMOUNT_SCALE {
        return Err(ValidationError::AmountTooPrecise {
            max_scale: MAX_AMOUNT_SCALE,
        });
    }
    if amount >= AMOUNT_LIMIT {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(amount)
}

/// Resolves a raw entry type.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEntryType` for values outside the defined set.
pub fn validate_entry_type(input: &EntryTypeInput) -> Result<EntryType, ValidationError> {
    input
        .resolve()
        .ok_or_else(|| ValidationError::InvalidEntryType(input.to_string()))
}

/// Trims notes; blank notes become `None`.
#[must_use]
pub fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(ToString::to_string)
}

/// Validates a create request, reporting the first rule that fails.
///
/// Rules are checked in order: title, amount, type.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn validate_create(input: &CreateEntryInput) -> Result<ValidatedEntry, ValidationError> {
    let title = validate_title(&input.title)?;
    let amount = validate_amount(input.amount)?;
    let entry_type = input
        .entry_type
        .as_ref()
        .ok_or(ValidationError::MissingEntryType)
        .and_then(validate_entry_type)?;

    Ok(ValidatedEntry {
        entry_type,
        title,
        amount,
        notes: normalize_notes(input.notes.as_deref()),
    })
}
