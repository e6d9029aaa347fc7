//! `BusinessDate` — a date-time value bound to a [`BusinessCalendar`].
//!
//! A business date exposes an explicit subset of the wrapped value's
//! accessors, the holiday/business-day decisions, and the business-day
//! arithmetic:
//!
//! * [`diff_business_days`](BusinessDate::diff_business_days) counts business
//!   days over a half-open range, forward or backward.
//! * [`plus_business`](BusinessDate::plus_business) and
//!   [`minus_business`](BusinessDate::minus_business) step over weekends and
//!   holidays.
//!
//! Every operation that produces a new date-time re-wraps it with the same
//! calendar.
//!
//! # Invalid values
//!
//! A business date may be *invalid* (built from an impossible y/m/d triple,
//! unparsable text, or arithmetic leaving chrono's range).  Invalid values
//! propagate: accessors return `None`, arithmetic returns invalid results,
//! and decisions return `false`.  Nothing panics, so a chain of operations
//! can be checked once at the end.

use crate::business_calendar::BusinessCalendar;
use crate::duration::BusinessDuration;
use crate::period::Period;
use crate::weekday::Weekday;
use bizcal_core::errors::{Error, Result};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Longest run of consecutive non-business days
/// [`plus_business`](BusinessDate::plus_business) walks through before
/// giving up.  Only reachable with holiday rules that cover (almost) every
/// day; the weekend invariant alone guarantees a business day each week.
pub const MAX_NON_BUSINESS_RUN: u32 = 3660;

/// Anything that can stand in for a date-time endpoint.
///
/// Bare dates are taken at midnight.  `None` means invalid.
pub trait DateLike {
    /// The underlying date-time, or `None` if invalid.
    fn to_datetime(&self) -> Option<NaiveDateTime>;
}

impl DateLike for NaiveDateTime {
    fn to_datetime(&self) -> Option<NaiveDateTime> {
        Some(*self)
    }
}

impl DateLike for NaiveDate {
    fn to_datetime(&self) -> Option<NaiveDateTime> {
        Some(self.and_time(NaiveTime::MIN))
    }
}

impl DateLike for BusinessDate {
    fn to_datetime(&self) -> Option<NaiveDateTime> {
        self.datetime()
    }
}

impl<T: DateLike> DateLike for Option<T> {
    fn to_datetime(&self) -> Option<NaiveDateTime> {
        self.as_ref().and_then(DateLike::to_datetime)
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_datetime(&self) -> Option<NaiveDateTime> {
        (**self).to_datetime()
    }
}

/// Options for [`BusinessDate::diff_business_days`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffOptions {
    /// Drop the starting day's contribution when it is a business day.
    pub exclude_starting_day: bool,
}

impl DiffOptions {
    /// Options with `exclude_starting_day` set.
    pub fn excluding_start() -> Self {
        Self {
            exclude_starting_day: true,
        }
    }
}

#[derive(Debug, Clone)]
enum Value {
    Valid(NaiveDateTime),
    Invalid(Arc<str>),
}

/// A date-time value paired with a business calendar.
#[derive(Debug, Clone)]
pub struct BusinessDate {
    value: Value,
    calendar: BusinessCalendar,
}

impl BusinessDate {
    pub(crate) fn from_parts(value: NaiveDateTime, calendar: BusinessCalendar) -> Self {
        Self {
            value: Value::Valid(value),
            calendar,
        }
    }

    pub(crate) fn invalid_with(calendar: BusinessCalendar, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug!(%reason, "invalid business date");
        Self {
            value: Value::Invalid(reason.into()),
            calendar,
        }
    }

    fn rewrap(&self, value: Option<NaiveDateTime>, reason: &str) -> Self {
        match (&self.value, value) {
            (Value::Invalid(_), _) => self.clone(),
            (Value::Valid(_), Some(dt)) => Self::from_parts(dt, self.calendar.clone()),
            (Value::Valid(_), None) => Self::invalid_with(self.calendar.clone(), reason),
        }
    }

    // ── Validity and raw values ───────────────────────────────────────────────

    /// The calendar this value is bound to.
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Return `true` unless this value is invalid.
    pub fn is_valid(&self) -> bool {
        matches!(self.value, Value::Valid(_))
    }

    /// Why this value is invalid, if it is.
    pub fn invalid_reason(&self) -> Option<&str> {
        match &self.value {
            Value::Valid(_) => None,
            Value::Invalid(reason) => Some(reason.as_ref()),
        }
    }

    /// The wrapped date-time.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self.value {
            Value::Valid(dt) => Some(dt),
            Value::Invalid(_) => None,
        }
    }

    /// The wrapped date-time, or the invalidity reason as an error.  Lets a
    /// chain of operations be checked once with `?`.
    ///
    /// # Errors
    /// [`Error::Date`] if this value is invalid.
    pub fn try_datetime(&self) -> Result<NaiveDateTime> {
        match &self.value {
            Value::Valid(dt) => Ok(*dt),
            Value::Invalid(reason) => Err(Error::Date(reason.to_string())),
        }
    }

    /// The wrapped calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.datetime().map(|dt| dt.date())
    }

    // ── Delegated accessors ───────────────────────────────────────────────────

    /// Calendar year.
    pub fn year(&self) -> Option<i32> {
        self.datetime().map(|dt| dt.year())
    }

    /// Month, 1–12.
    pub fn month(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.month())
    }

    /// Day of the month, 1–31.
    pub fn day(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.day())
    }

    /// Day of the year, 1–366.
    pub fn ordinal(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.ordinal())
    }

    /// ISO weekday.
    pub fn weekday(&self) -> Option<Weekday> {
        self.datetime().map(|dt| dt.weekday().into())
    }

    /// Hour, 0–23.
    pub fn hour(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.hour())
    }

    /// Minute, 0–59.
    pub fn minute(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.minute())
    }

    /// Second, 0–59.
    pub fn second(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.second())
    }

    /// `YYYY-MM-DD`.
    pub fn to_iso_date(&self) -> Option<String> {
        self.format("%Y-%m-%d")
    }

    /// `YYYY-MM-DDTHH:MM:SS.mmm`.
    pub fn to_iso(&self) -> Option<String> {
        self.format("%Y-%m-%dT%H:%M:%S%.3f")
    }

    /// Format with a chrono `strftime` pattern.
    pub fn format(&self, fmt: &str) -> Option<String> {
        self.datetime().map(|dt| dt.format(fmt).to_string())
    }

    /// Return `true` if both values are valid and fall on the same calendar
    /// day.
    pub fn has_same_day(&self, other: &impl DateLike) -> bool {
        match (self.date(), other.to_datetime()) {
            (Some(a), Some(b)) => a == b.date(),
            _ => false,
        }
    }

    // ── Re-wrapping operations ────────────────────────────────────────────────

    /// Add a calendar time span.
    pub fn plus(&self, delta: TimeDelta) -> Self {
        let next = self.datetime().and_then(|dt| dt.checked_add_signed(delta));
        self.rewrap(next, "date-time arithmetic overflowed")
    }

    /// Subtract a calendar time span.
    pub fn minus(&self, delta: TimeDelta) -> Self {
        let next = self.datetime().and_then(|dt| dt.checked_sub_signed(delta));
        self.rewrap(next, "date-time arithmetic overflowed")
    }

    /// Add `n` calendar days (negative goes back).
    pub fn plus_days(&self, n: i64) -> Self {
        let next = self.datetime().and_then(|dt| shift_days(dt, n));
        self.rewrap(next, "date arithmetic overflowed")
    }

    /// Subtract `n` calendar days.
    pub fn minus_days(&self, n: i64) -> Self {
        match n.checked_neg() {
            Some(neg) => self.plus_days(neg),
            None => self.rewrap(None, "date arithmetic overflowed"),
        }
    }

    /// Midnight of the same day.
    pub fn start_of_day(&self) -> Self {
        let next = self.date().map(|d| d.and_time(NaiveTime::MIN));
        self.rewrap(next, "")
    }

    /// Same time of day on another date.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        let next = self.datetime().map(|dt| date.and_time(dt.time()));
        self.rewrap(next, "")
    }

    // ── Decisions ─────────────────────────────────────────────────────────────

    /// Return `true` if the weekday is a configured weekend day.
    pub fn is_weekend(&self) -> bool {
        self.date().map_or(false, |d| self.calendar.is_weekend(d))
    }

    /// Return `true` if any holiday rule matches.
    pub fn is_holiday(&self) -> bool {
        self.date().map_or(false, |d| self.calendar.is_holiday(d))
    }

    /// Return `true` if neither a weekend day nor a holiday.
    pub fn is_business_day(&self) -> bool {
        self.date().map_or(false, |d| self.calendar.is_business_day(d))
    }

    /// Name of the first matching holiday rule.
    pub fn holiday_name(&self) -> Option<&str> {
        self.calendar.holiday_name(self.date()?)
    }

    // ── Business-day arithmetic ───────────────────────────────────────────────

    /// Business days from `self` to `other`.
    ///
    /// Days are counted over `[self, other)` when `other` is later and over
    /// `(other, self]` (negatively) when it is earlier, one calendar day at a
    /// time.  Same calendar day gives zero.  With
    /// [`DiffOptions::exclude_starting_day`] a business starting day is
    /// skipped before counting.
    ///
    /// The returned duration is the count in days plus the difference of the
    /// two times of day; see [`BusinessDuration`].  An invalid endpoint gives
    /// an invalid duration.
    ///
    /// ```
    /// use bizcal_time::{BusinessCalendar, DiffOptions};
    /// use chrono::NaiveDate;
    ///
    /// let cal = BusinessCalendar::weekends_only();
    /// let mon = cal.at_ymd(2024, 1, 8);
    /// let next_mon = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let all = mon.diff_business_days(&next_mon, DiffOptions::default());
    /// let excl = mon.diff_business_days(&next_mon, DiffOptions::excluding_start());
    /// assert_eq!(all.business_days(), Some(5));
    /// assert_eq!(excl.business_days(), Some(4));
    /// ```
    pub fn diff_business_days(
        &self,
        other: &impl DateLike,
        options: DiffOptions,
    ) -> BusinessDuration {
        let (Some(from), Some(to)) = (self.datetime(), other.to_datetime()) else {
            return BusinessDuration::invalid();
        };
        let (start, end) = (from.date(), to.date());
        if start == end {
            return BusinessDuration::zero();
        }

        let forward = end > start;
        let mut cursor = start;
        if options.exclude_starting_day && self.calendar.is_business_day(cursor) {
            cursor = match step_date(cursor, forward) {
                Some(d) => d,
                None => return BusinessDuration::invalid(),
            };
        }

        let mut count: i64 = 0;
        while (forward && cursor < end) || (!forward && cursor > end) {
            if self.calendar.is_business_day(cursor) {
                count += 1;
            }
            cursor = match step_date(cursor, forward) {
                Some(d) => d,
                None => break,
            };
        }
        if !forward {
            count = -count;
        }

        let remainder = to.time().signed_duration_since(from.time());
        trace!(%start, %end, count, "counted business days");
        BusinessDuration::new(count, remainder)
    }

    /// Step forward by `period` business days.
    ///
    /// The period is converted to days ([`Period::as_days`]) and its
    /// magnitude rounded up; a negative period steps backward.  Each step
    /// moves one calendar day and only counts when it lands on a business
    /// day, so the result is always a business day.  The time of day is
    /// kept.  A zero period returns `self` unchanged, even on a weekend or
    /// holiday.
    ///
    /// ```
    /// use bizcal_time::BusinessCalendar;
    ///
    /// let cal = BusinessCalendar::weekends_only();
    /// let mon = cal.at_ymd(2024, 1, 1);
    /// assert_eq!(mon.plus_business(6).to_iso_date().as_deref(), Some("2024-01-09"));
    /// ```
    pub fn plus_business(&self, period: impl Into<Period>) -> Self {
        let period = period.into();
        let Some(start) = self.datetime() else {
            return self.clone();
        };
        let steps = period.business_steps();
        if steps == 0 {
            return self.clone();
        }

        let forward = steps > 0;
        let mut remaining = steps.unsigned_abs();
        let mut current = start;
        let mut run = 0u32;
        while remaining > 0 {
            current = match shift_days(current, if forward { 1 } else { -1 }) {
                Some(dt) => dt,
                None => return self.rewrap(None, "business-day stepping left the date range"),
            };
            if self.calendar.is_business_day(current.date()) {
                remaining -= 1;
                run = 0;
            } else {
                run += 1;
                if run > MAX_NON_BUSINESS_RUN {
                    warn!(
                        from = %start,
                        run,
                        "no business day found, holiday rules may cover every day"
                    );
                    return self.rewrap(
                        None,
                        &format!("no business day within {MAX_NON_BUSINESS_RUN} days of {current}"),
                    );
                }
            }
        }
        trace!(from = %start, to = %current, %period, "stepped business days");
        Self::from_parts(current, self.calendar.clone())
    }

    /// Step backward by `period` business days; the negation of
    /// [`plus_business`](BusinessDate::plus_business).
    ///
    /// A period that cannot be negated (length `i64::MIN`) gives an invalid
    /// value.
    pub fn minus_business(&self, period: impl Into<Period>) -> Self {
        let period: Period = period.into();
        match period.checked_neg() {
            Some(back) => self.plus_business(back),
            None => self.rewrap(None, "business-day period overflowed on negation"),
        }
    }
}

fn step_date(d: NaiveDate, forward: bool) -> Option<NaiveDate> {
    if forward {
        d.succ_opt()
    } else {
        d.pred_opt()
    }
}

fn shift_days(dt: NaiveDateTime, n: i64) -> Option<NaiveDateTime> {
    let days = Days::new(n.unsigned_abs());
    if n >= 0 {
        dt.checked_add_days(days)
    } else {
        dt.checked_sub_days(days)
    }
}

/// Values compare by their date-time only; the calendar is ignored.
/// Invalid values are equal to nothing, themselves included.
impl PartialEq for BusinessDate {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Value::Valid(a), Value::Valid(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for BusinessDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.value, &other.value) {
            (Value::Valid(a), Value::Valid(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl std::fmt::Display for BusinessDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Value::Valid(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Value::Invalid(_) => write!(f, "Invalid DateTime"),
        }
    }
}
