//! Access decisions for ledger entries.
//!
//! Everything here is pure: callers pass in the current business day so the
//! rules can be checked without a clock or a store.

use chrono::NaiveDate;
use shopledger_shared::types::UserId;

use super::entry::Entry;
use super::error::AccessDenied;
use super::view::{AdminEntryView, EntryItem, EntryView};
use crate::calendar::BusinessCalendar;

/// An authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// Caller's user id.
    pub user_id: UserId,
    /// Whether the caller holds the admin role.
    pub is_admin: bool,
}

impl Caller {
    /// Creates a caller.
    #[must_use]
    pub const fn new(user_id: UserId, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    /// Creates an administrator.
    #[must_use]
    pub const fn admin(user_id: UserId) -> Self {
        Self::new(user_id, true)
    }

    /// Creates a regular employee.
    #[must_use]
    pub const fn employee(user_id: UserId) -> Self {
        Self::new(user_id, false)
    }

    /// Returns true if the caller created `entry`.
    #[must_use]
    pub fn owns(&self, entry: &Entry) -> bool {
        entry.created_by == self.user_id
    }
}

/// Returns true if `caller` may read `entry`.
#[must_use]
pub fn can_read(caller: &Caller, entry: &Entry) -> bool {
    caller.is_admin || caller.owns(entry)
}

/// Checks read access.
///
/// # Errors
///
/// Returns `AccessDenied::NotOwner` if the caller is neither admin nor owner.
pub fn check_read(caller: &Caller, entry: &Entry) -> Result<(), AccessDenied> {
    if can_read(caller, entry) {
        Ok(())
    } else {
        Err(AccessDenied::NotOwner)
    }
}

/// Checks whether `caller` may patch or delete `entry` on `today`.
///
/// Administrators always may. Owners may only while the entry's local
/// creation date is still the current business day.
///
/// # Errors
///
/// Returns the reason the mutation is refused.
pub fn check_mutation(
    caller: &Caller,
    entry: &Entry,
    calendar: &BusinessCalendar,
    today: NaiveDate,
) -> Result<(), AccessDenied> {
    if caller.is_admin {
        return Ok(());
    }
    if !caller.owns(entry) {
        return Err(AccessDenied::NotOwner);
    }

    let created_on = calendar.local_date(entry.created_at);
    if created_on == today {
        Ok(())
    } else {
        Err(AccessDenied::OutsideBusinessDay { created_on, today })
    }
}

/// Returns true if `caller` may patch or delete `entry` on `today`.
#[must_use]
pub fn can_mutate(
    caller: &Caller,
    entry: &Entry,
    calendar: &BusinessCalendar,
    today: NaiveDate,
) -> bool {
    check_mutation(caller, entry, calendar, today).is_ok()
}

/// Projects `entry` to the fields `caller` is allowed to see.
#[must_use]
pub fn project(
    caller: &Caller,
    entry: &Entry,
    calendar: &BusinessCalendar,
    created_by_user_name: Option<String>,
) -> EntryView {
    if caller.is_admin {
        EntryView::Admin(AdminEntryView::from_entry(entry, calendar, created_by_user_name))
    } else {
        EntryView::Staff(EntryItem::from_entry(entry, calendar, created_by_user_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryType;
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn calendar() -> BusinessCalendar {
        BusinessCalendar::new(chrono_tz::Europe::Rome)
    }

    fn entry_by(owner: UserId, created_at: DateTime<Utc>) -> Entry {
        Entry {
            id: 1,
            entry_type: EntryType::Sale,
            title: "Widget".to_string(),
            amount: dec!(50),
            notes: None,
            created_at,
            created_by: owner,
            is_admin_edited: true,
            last_modified_at: Some(created_at),
            last_modified_by: Some(owner),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[rstest]
    #[case(true, false, true)]
    #[case(false, true, true)]
    #[case(false, false, false)]
    fn test_can_read(#[case] is_admin: bool, #[case] is_owner: bool, #[case] expected: bool) {
        let owner = UserId::new();
        let caller = Caller::new(if is_owner { owner } else { UserId::new() }, is_admin);
        let entry = entry_by(owner, Utc::now());

        assert_eq!(can_read(&caller, &entry), expected);
    }

    #[test]
    fn test_owner_may_mutate_on_creation_day() {
        let owner = UserId::new();
        // 23:30 local on Jan 15 in Rome.
        let entry = entry_by(owner, Utc.with_ymd_and_hms(2024, 1, 15, 22, 30, 0).unwrap());

        assert!(can_mutate(&Caller::employee(owner), &entry, &calendar(), day(15)));
    }

    #[test]
    fn test_owner_loses_rights_after_local_midnight() {
        let owner = UserId::new();
        let entry = entry_by(owner, Utc.with_ymd_and_hms(2024, 1, 15, 22, 30, 0).unwrap());

        let err = check_mutation(&Caller::employee(owner), &entry, &calendar(), day(16))
            .unwrap_err();
        assert_eq!(
            err,
            AccessDenied::OutsideBusinessDay {
                created_on: day(15),
                today: day(16),
            }
        );
    }

    #[test]
    fn test_creation_day_uses_local_date_not_utc() {
        let owner = UserId::new();
        // 23:30 UTC on Jan 15 is already Jan 16 in Rome.
        let entry = entry_by(owner, Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap());

        assert!(can_mutate(&Caller::employee(owner), &entry, &calendar(), day(16)));
        assert!(!can_mutate(&Caller::employee(owner), &entry, &calendar(), day(15)));
    }

    #[test]
    fn test_non_owner_employee_is_refused() {
        let entry = entry_by(UserId::new(), Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
        let err = check_mutation(&Caller::employee(UserId::new()), &entry, &calendar(), day(15))
            .unwrap_err();

        assert_eq!(err, AccessDenied::NotOwner);
    }

    #[test]
    fn test_admin_may_always_mutate() {
        let entry = entry_by(UserId::new(), Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap());
        assert!(can_mutate(&Caller::admin(UserId::new()), &entry, &calendar(), day(15)));
    }

    #[test]
    fn test_staff_projection_hides_tracking_fields() {
        let owner = UserId::new();
        let entry = entry_by(owner, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
        let view = project(&Caller::employee(owner), &entry, &calendar(), Some("emp".into()));

        assert!(matches!(view, EntryView::Staff(_)));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["type"], "sale");
        assert_eq!(json["created_by_user_name"], "emp");
        assert_eq!(json["created_at_local"], "2024-01-15T11:00:00+01:00");
        assert!(json.get("is_admin_edited").is_none());
        assert!(json.get("last_modified_by_user_id").is_none());
    }

    #[test]
    fn test_admin_projection_includes_tracking_fields() {
        let owner = UserId::new();
        let entry = entry_by(owner, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
        let view = project(&Caller::admin(UserId::new()), &entry, &calendar(), None);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["is_admin_edited"], true);
        assert_eq!(json["last_modified_at_local"], "2024-01-15T11:00:00+01:00");
        assert_eq!(json["last_modified_by_user_id"], owner.to_string());
        assert_eq!(view.item().title, "Widget");
    }
}
