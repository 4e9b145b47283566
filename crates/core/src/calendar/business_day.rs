//! Conversion between local business days and UTC windows.

use std::sync::Arc;

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Utc,
};
use chrono_tz::Tz;

use super::clock::{Clock, SystemClock};
use super::error::CalendarError;

/// Longest DST gap we are prepared to skip when a local midnight does not exist.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Calendar bound to one fixed IANA timezone.
///
/// A business day is a local calendar date in that zone. Its UTC window runs
/// from the first instant of the date to the last one, inclusive on both ends,
/// so consecutive days tile the timeline with no gap and no overlap.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    tz: Tz,
    clock: Arc<dyn Clock>,
}

impl BusinessCalendar {
    /// Creates a calendar for `tz` driven by the system clock.
    #[must_use]
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            clock: Arc::new(SystemClock),
        }
    }

    /// Resolves an IANA zone name such as `Asia/Hebron`.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::UnknownTimezone` if the name is not recognised.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| CalendarError::UnknownTimezone(name.to_string()))
    }

    /// Replaces the clock used for `now_utc` and `today`.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the configured timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Returns the current instant.
    #[must_use]
    pub fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now_utc()
    }

    /// Returns the current local business day.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.local_date(self.now_utc())
    }

    /// Returns the local calendar date an instant falls on.
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Renders an instant as local wall-clock time with its offset.
    #[must_use]
    pub fn to_local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.tz).fixed_offset()
    }

    /// Returns the inclusive UTC window `(from, to)` covering a local date.
    #[must_use]
    pub fn day_bounds_utc(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start_of_day(date), self.end_of_day(date))
    }

    /// Returns the inclusive UTC window from the start of `from` to the end of `to`.
    #[must_use]
    pub fn range_bounds_utc(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start_of_day(from), self.end_of_day(to))
    }

    fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(NaiveTime::MIN);
        match self.tz.from_local_datetime(&midnight) {
            LocalResult::Single(start) | LocalResult::Ambiguous(start, _) => {
                start.with_timezone(&Utc)
            }
            // Midnight skipped by a DST jump: the day starts at the transition.
            LocalResult::None => self
                .first_existing_after(midnight)
                .unwrap_or_else(|| Utc.from_utc_datetime(&midnight)),
        }
    }

    fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        date.succ_opt().map_or(DateTime::<Utc>::MAX_UTC, |next| {
            self.start_of_day(next) - TimeDelta::nanoseconds(1)
        })
    }

    fn first_existing_after(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        (1..=MAX_GAP_MINUTES).find_map(|minutes| {
            self.tz
                .from_local_datetime(&(local + TimeDelta::minutes(minutes)))
                .earliest()
                .map(|instant| instant.with_timezone(&Utc))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ManualClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let err = BusinessCalendar::from_name("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err.to_string(), "unknown timezone: Mars/Olympus_Mons");
    }

    #[test]
    fn test_known_timezone_resolves() {
        let calendar = BusinessCalendar::from_name("Asia/Hebron").unwrap();
        assert_eq!(calendar.timezone(), chrono_tz::Asia::Hebron);
    }

    #[test]
    fn test_day_bounds_in_utc_zone() {
        let calendar = BusinessCalendar::new(chrono_tz::UTC);
        let (from, to) = calendar.day_bounds_utc(date(2024, 1, 2));

        assert_eq!(from, utc(2024, 1, 2, 0, 0, 0));
        assert_eq!(to, utc(2024, 1, 3, 0, 0, 0) - TimeDelta::nanoseconds(1));
    }

    #[test]
    fn test_day_bounds_follow_local_offset() {
        // Rome is UTC+1 in January.
        let calendar = BusinessCalendar::new(chrono_tz::Europe::Rome);
        let (from, to) = calendar.day_bounds_utc(date(2024, 1, 15));

        assert_eq!(from, utc(2024, 1, 14, 23, 0, 0));
        assert_eq!(to, utc(2024, 1, 15, 23, 0, 0) - TimeDelta::nanoseconds(1));
    }

    #[test]
    fn test_spring_forward_day_is_23_hours() {
        let calendar = BusinessCalendar::new(chrono_tz::Europe::Rome);
        let (from, to) = calendar.day_bounds_utc(date(2024, 3, 31));

        assert_eq!(from, utc(2024, 3, 30, 23, 0, 0));
        assert_eq!(to + TimeDelta::nanoseconds(1) - from, TimeDelta::hours(23));
    }

    #[test]
    fn test_fall_back_day_is_25_hours() {
        let calendar = BusinessCalendar::new(chrono_tz::Europe::Rome);
        let (from, to) = calendar.day_bounds_utc(date(2024, 10, 27));

        assert_eq!(from, utc(2024, 10, 26, 22, 0, 0));
        assert_eq!(to + TimeDelta::nanoseconds(1) - from, TimeDelta::hours(25));
    }

    #[test]
    fn test_missing_midnight_starts_day_at_transition() {
        // Brazil moved clocks from 00:00 to 01:00 on 2018-11-04.
        let calendar = BusinessCalendar::new(chrono_tz::America::Sao_Paulo);
        let (from, to) = calendar.day_bounds_utc(date(2018, 11, 4));
        let (_, previous_end) = calendar.day_bounds_utc(date(2018, 11, 3));

        assert_eq!(from, utc(2018, 11, 4, 3, 0, 0));
        assert_eq!(previous_end + TimeDelta::nanoseconds(1), from);
        assert_eq!(to + TimeDelta::nanoseconds(1) - from, TimeDelta::hours(23));
    }

    #[test]
    fn test_consecutive_days_tile_without_gaps() {
        let calendar = BusinessCalendar::from_name("Asia/Hebron").unwrap();
        let mut day = date(2024, 1, 1);
        while day < date(2025, 1, 1) {
            let (_, end) = calendar.day_bounds_utc(day);
            let next = day.succ_opt().unwrap();
            let (start, _) = calendar.day_bounds_utc(next);
            assert_eq!(end + TimeDelta::nanoseconds(1), start, "gap after {day}");
            day = next;
        }
    }

    #[test]
    fn test_range_bounds_span_whole_days() {
        let calendar = BusinessCalendar::new(chrono_tz::Europe::Rome);
        let (from, to) = calendar.range_bounds_utc(date(2024, 1, 1), date(2024, 1, 3));

        assert_eq!(from, calendar.day_bounds_utc(date(2024, 1, 1)).0);
        assert_eq!(to, calendar.day_bounds_utc(date(2024, 1, 3)).1);
    }

    #[test]
    fn test_today_follows_clock_across_local_midnight() {
        let clock = Arc::new(ManualClock::new(utc(2024, 1, 15, 22, 30, 0)));
        let calendar =
            BusinessCalendar::new(chrono_tz::Europe::Rome).with_clock(clock.clone());

        assert_eq!(calendar.today(), date(2024, 1, 15));
        clock.advance(TimeDelta::minutes(45));
        assert_eq!(calendar.today(), date(2024, 1, 16));
    }

    #[test]
    fn test_to_local_keeps_instant() {
        let calendar = BusinessCalendar::new(chrono_tz::Europe::Rome);
        let instant = utc(2024, 7, 1, 10, 0, 0);
        let local = calendar.to_local(instant);

        assert_eq!(local.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(local.with_timezone(&Utc), instant);
        assert_eq!(calendar.local_date(utc(2024, 7, 1, 22, 30, 0)), date(2024, 7, 2));
    }
}
