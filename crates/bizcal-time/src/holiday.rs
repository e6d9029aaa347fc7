//! `HolidayRule` — a named predicate deciding whether a date is a holiday.
//!
//! Every rule shape (fixed date, n-th weekday, last weekday, Easter offset,
//! arbitrary closure) is normalised to the same `NaiveDate → bool` contract
//! so rules compose uniformly.
//!
//! Rules have **reference identity**: cloning a rule yields the same rule,
//! while building two rules from identical parameters yields two distinct
//! rules.  [`HolidaySet`](crate::holiday_set::HolidaySet) deduplicates by
//! this identity, never by behaviour.

use crate::easter::easter_offset;
use crate::weekday::Weekday;
use bizcal_core::errors::{Error, Result};
use chrono::{Datelike, Days, NaiveDate};
use std::sync::Arc;

type Predicate = dyn Fn(NaiveDate) -> bool + Send + Sync;

struct RuleInner {
    name: String,
    predicate: Box<Predicate>,
}

/// A shared, named holiday predicate.
#[derive(Clone)]
pub struct HolidayRule {
    inner: Arc<RuleInner>,
}

impl HolidayRule {
    /// Wrap an arbitrary predicate.
    ///
    /// The predicate must be total: it is called for every date the
    /// calendar inspects and must not panic.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(RuleInner {
                name: name.into(),
                predicate: Box::new(predicate),
            }),
        }
    }

    /// Same month and day every year.
    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> Self {
        Self::new(name, move |d| d.month() == month && d.day() == day)
    }

    /// Like [`fixed`](Self::fixed), but rejects a month/day pair that never
    /// occurs.  February 29 is accepted.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for an impossible date.
    pub fn try_fixed(name: impl Into<String>, month: u32, day: u32) -> Result<Self> {
        let name = name.into();
        // 2000 is a leap year
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(Error::InvalidArgument(format!(
                "holiday {name:?} has impossible date {month}-{day}"
            )));
        }
        Ok(Self::fixed(name, month, day))
    }

    /// The `n`-th (zero-based) `weekday` of `month`: `n = 2` with Monday in
    /// January is the third Monday of January.
    pub fn nth_weekday(name: impl Into<String>, month: u32, weekday: Weekday, n: u32) -> Self {
        Self::new(name, move |d| is_nth_weekday(d, month, weekday, n))
    }

    /// The last `weekday` of `month`: no further occurrence of that weekday
    /// remains in the month.
    pub fn last_weekday(name: impl Into<String>, month: u32, weekday: Weekday) -> Self {
        Self::new(name, move |d| {
            d.month() == month
                && Weekday::of(d) == weekday
                && d.checked_add_days(Days::new(7))
                    .map_or(true, |next| next.month() != month)
        })
    }

    /// The day after the `n`-th (zero-based) `weekday` of `month`.
    pub fn day_after_nth_weekday(
        name: impl Into<String>,
        month: u32,
        weekday: Weekday,
        n: u32,
    ) -> Self {
        Self::new(name, move |d| {
            d.pred_opt()
                .map_or(false, |prev| is_nth_weekday(prev, month, weekday, n))
        })
    }

    /// `offset` days from Easter Sunday of the date's own year (0 is Easter
    /// Sunday, 1 Easter Monday, -2 Good Friday).
    ///
    /// Only month and day are compared, so an offset that carries the feast
    /// into a neighbouring year still fires in the date's year: with
    /// Easter 2024 on March 31, an offset of 300 lands on 2025-01-25 and the
    /// rule matches January 25, 2024.
    pub fn easter_relative(name: impl Into<String>, offset: i64) -> Self {
        Self::new(name, move |d| {
            easter_offset(d.year(), offset)
                .map_or(false, |feast| feast.month() == d.month() && feast.day() == d.day())
        })
    }

    /// Human-readable name of the holiday.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Return `true` if `date` is this holiday.
    pub fn matches(&self, date: NaiveDate) -> bool {
        (self.inner.predicate)(date)
    }

    /// Return `true` if `self` and `other` are the very same rule (clones
    /// of one another), regardless of behaviour.
    pub fn same_rule(&self, other: &HolidayRule) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn identity(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }

    /// Derive a rule that is also observed on the nearest weekday when the
    /// holiday falls on a weekend.
    ///
    /// The derived rule matches `d` if this rule matches `d`, or `d` is a
    /// Friday and this rule matches the following Saturday, or `d` is a
    /// Monday and this rule matches the preceding Sunday.  The result is a
    /// new rule named `"<name> (observed)"`.
    pub fn adjusted_for_weekend(&self) -> HolidayRule {
        let base = self.clone();
        HolidayRule::new(format!("{} (observed)", self.name()), move |d| {
            if base.matches(d) {
                return true;
            }
            match Weekday::of(d) {
                Weekday::Friday => d.succ_opt().map_or(false, |next| base.matches(next)),
                Weekday::Monday => d.pred_opt().map_or(false, |prev| base.matches(prev)),
                _ => false,
            }
        })
    }
}

fn is_nth_weekday(d: NaiveDate, month: u32, weekday: Weekday, n: u32) -> bool {
    d.month() == month && Weekday::of(d) == weekday && (d.day() - 1) / 7 == n
}

impl std::fmt::Debug for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HolidayRule").field(&self.inner.name).finish()
    }
}
