//! `BusinessCalendar` — a validated weekend set plus a holiday rule set.
//!
//! A calendar answers the per-date decision questions (weekend, holiday,
//! business day) and wraps date values into
//! [`BusinessDate`](crate::business_date::BusinessDate)s, which carry the
//! calendar through every derived value.
//!
//! Configuration is validated once, when the calendar is built; queries
//! never fail.

use crate::business_date::{BusinessDate, DateLike};
use crate::calendars::HolidayTable;
use crate::holiday::HolidayRule;
use crate::holiday_set::{adjust_for_weekend, HolidaySet};
use crate::weekday::Weekday;
use crate::weekend::WeekendDays;
use bizcal_core::errors::Result;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
struct CalendarInner {
    weekend: WeekendDays,
    holidays: HolidaySet,
}

/// A business-day calendar.
///
/// Cheap to clone; clones share the same configuration.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    inner: Arc<CalendarInner>,
}

impl BusinessCalendar {
    /// Create a calendar from an already-validated weekend set and holidays.
    pub fn new(weekend: WeekendDays, holidays: HolidaySet) -> Self {
        debug!(
            weekend = ?weekend,
            holiday_rules = holidays.len(),
            "business calendar configured"
        );
        Self {
            inner: Arc::new(CalendarInner { weekend, holidays }),
        }
    }

    /// Saturday/Sunday weekends and no holidays.
    pub fn weekends_only() -> Self {
        Self::new(WeekendDays::default(), HolidaySet::empty())
    }

    /// Begin building a calendar.
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::default()
    }

    /// The weekend set.
    pub fn weekend(&self) -> WeekendDays {
        self.inner.weekend
    }

    /// The holiday rules.
    pub fn holidays(&self) -> &HolidaySet {
        &self.inner.holidays
    }

    /// Return `true` if `date` falls on a configured weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.inner.weekend.contains(Weekday::of(date))
    }

    /// Return `true` if any holiday rule matches `date`.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.inner.holidays.matches(date)
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Name of the first holiday rule matching `date`.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.inner.holidays.matching(date).map(|r| r.name())
    }

    /// Holidays in the inclusive range `[from, to]`.
    ///
    /// With `include_weekends == false` holidays falling on a weekend day are
    /// left out.
    pub fn holidays_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        include_weekends: bool,
    ) -> Vec<NaiveDate> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_holiday(*d) && (include_weekends || !self.is_weekend(*d)))
            .collect()
    }

    // ── Wrapping date values ──────────────────────────────────────────────────

    /// Wrap a date, date-time, or another business date's value.
    pub fn at(&self, date: impl DateLike) -> BusinessDate {
        match date.to_datetime() {
            Some(dt) => BusinessDate::from_parts(dt, self.clone()),
            None => BusinessDate::invalid_with(self.clone(), "invalid input date"),
        }
    }

    /// Wrap a calendar date given as year, month, and day.  Produces an
    /// invalid business date if the triple does not name a real day.
    pub fn at_ymd(&self, year: i32, month: u32, day: u32) -> BusinessDate {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(d) => self.at(d),
            None => BusinessDate::invalid_with(
                self.clone(),
                format!("{year}-{month:02}-{day:02} is not a valid date"),
            ),
        }
    }

    /// Parse an ISO 8601 date (`2024-01-15`) or date-time
    /// (`2024-01-15T09:30:00`).  Unparsable input produces an invalid
    /// business date.
    pub fn parse_iso(&self, text: &str) -> BusinessDate {
        if let Ok(dt) = text.parse::<NaiveDateTime>() {
            return self.at(dt);
        }
        match text.parse::<NaiveDate>() {
            Ok(d) => self.at(d),
            Err(e) => BusinessDate::invalid_with(
                self.clone(),
                format!("unparsable ISO date {text:?}: {e}"),
            ),
        }
    }

    /// The current local date-time.
    pub fn today(&self) -> BusinessDate {
        self.at(chrono::Local::now().naive_local())
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::weekends_only()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
enum WeekSpec {
    #[default]
    Default,
    Weekend(Vec<u8>),
    Business(Vec<u8>),
}

/// Builder for [`BusinessCalendar`].
///
/// Weekday lists are validated in [`build`](CalendarBuilder::build).  When
/// both a weekend list and a business-day list are given, the last call
/// wins.
#[derive(Debug, Clone, Default)]
pub struct CalendarBuilder {
    week: WeekSpec,
    rules: Vec<HolidayRule>,
    observe_weekends: bool,
}

impl CalendarBuilder {
    /// Non-working weekdays as ISO numbers (1 = Monday … 7 = Sunday).
    pub fn with_weekend_days(mut self, days: &[u8]) -> Self {
        self.week = WeekSpec::Weekend(days.to_vec());
        self
    }

    /// Working weekdays as ISO numbers; every other weekday is a weekend day.
    pub fn with_business_days(mut self, days: &[u8]) -> Self {
        self.week = WeekSpec::Business(days.to_vec());
        self
    }

    /// A pre-validated weekend set.
    pub fn with_weekend(mut self, weekend: WeekendDays) -> Self {
        self.week = WeekSpec::Weekend(weekend.to_iso());
        self
    }

    /// Add a single holiday rule.
    pub fn with_holiday(mut self, rule: HolidayRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add every rule of `set`.
    pub fn with_holidays(mut self, set: &HolidaySet) -> Self {
        self.rules.extend(set.iter().cloned());
        self
    }

    /// Add a built-in country table.
    pub fn with_table(self, table: HolidayTable) -> Self {
        self.with_holidays(table.holidays())
    }

    /// Also observe weekend holidays on the adjacent Friday/Monday.
    pub fn observe_weekends(mut self, flag: bool) -> Self {
        self.observe_weekends = flag;
        self
    }

    /// Validate and build the calendar.
    ///
    /// # Errors
    /// Fails if a weekday number is out of range, more than six weekend days
    /// are given, or no working weekday remains.
    pub fn build(self) -> Result<BusinessCalendar> {
        let weekend = match &self.week {
            WeekSpec::Default => WeekendDays::default(),
            WeekSpec::Weekend(days) => WeekendDays::new(days)?,
            WeekSpec::Business(days) => WeekendDays::from_business_days(days)?,
        };
        let holidays = HolidaySet::new(self.rules);
        let holidays = if self.observe_weekends {
            adjust_for_weekend(&holidays)
        } else {
            holidays
        };
        Ok(BusinessCalendar::new(weekend, holidays))
    }
}
