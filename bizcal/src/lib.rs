//! # bizcal
//!
//! Business-day arithmetic over the proleptic Gregorian calendar: weekend
//! sets, composable holiday rules (fixed dates, n-th weekdays, Easter
//! offsets), and counting/stepping that skips non-business days.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bizcal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bizcal = "0.1"
//! ```
//!
//! ```rust
//! use bizcal::time::{BusinessCalendar, HolidayRule};
//!
//! let cal = BusinessCalendar::builder()
//!     .with_holiday(HolidayRule::fixed("Workers' Day", 5, 1))
//!     .build()
//!     .unwrap();
//!
//! // Monday 2024-04-29 plus two business days skips the Wednesday holiday.
//! let thu = cal.at_ymd(2024, 4, 29).plus_business(2);
//! assert_eq!(thu.to_iso_date().as_deref(), Some("2024-05-02"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bizcal_core as core;

/// Weekdays, holiday rules, Easter, calendars, and business-day arithmetic.
pub use bizcal_time as time;

pub use bizcal_core::{Error, Result};
pub use bizcal_time::{
    adjust_for_weekend, combine_holiday_sets, easter_monday, easter_sunday, BusinessCalendar,
    BusinessDate, BusinessDuration, DiffOptions, HolidayRule, HolidaySet, HolidayTable, Period,
    WeekendDays,
};
