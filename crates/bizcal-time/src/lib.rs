//! # bizcal-time
//!
//! Weekend sets, holiday rules, Easter computations, and business-day
//! arithmetic over the proleptic Gregorian calendar.
//!
//! ```
//! use bizcal_time::{calendars::HolidayTable, BusinessCalendar, DiffOptions};
//!
//! let cal = BusinessCalendar::builder()
//!     .with_table(HolidayTable::UsFederal)
//!     .observe_weekends(true)
//!     .build()?;
//!
//! // Independence Day 2026 is a Saturday, observed on Friday July 3.
//! let thu = cal.at_ymd(2026, 7, 2);
//! assert_eq!(thu.plus_business(1).to_iso_date().as_deref(), Some("2026-07-06"));
//! let diff = thu.diff_business_days(&cal.at_ymd(2026, 7, 9), DiffOptions::default());
//! assert_eq!(diff.business_days(), Some(4));
//! # Ok::<(), bizcal_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BusinessCalendar` and its builder.
pub mod business_calendar;

/// `BusinessDate` — a date-time bound to a calendar, with business-day
/// arithmetic.
pub mod business_date;

/// Built-in country holiday tables.
pub mod calendars;

/// Declarative calendar configuration.
pub mod config;

/// `BusinessDuration` — signed business-day differences.
pub mod duration;

/// Easter Sunday, Easter Monday, and Easter-relative offsets.
pub mod easter;

/// `HolidayRule` — named holiday predicates.
pub mod holiday;

/// `HolidaySet` and the composition operators over rule sets.
pub mod holiday_set;

/// `Period` — an amount of time in a `TimeUnit`.
pub mod period;

/// `TimeUnit` — days, weeks, months, years, and sub-day units.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WeekendDays` — the validated set of non-working weekdays.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_calendar::{BusinessCalendar, CalendarBuilder};
pub use business_date::{BusinessDate, DateLike, DiffOptions, MAX_NON_BUSINESS_RUN};
pub use calendars::HolidayTable;
pub use config::{CalendarConfig, FixedHoliday};
pub use duration::{BusinessDuration, DurationParts};
pub use easter::{easter_monday, easter_offset, easter_sunday, EasterDate};
pub use holiday::HolidayRule;
pub use holiday_set::{adjust_for_weekend, combine_holiday_sets, HolidaySet};
pub use period::Period;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
pub use weekend::WeekendDays;
