//! Western Easter computations.
//!
//! Easter Sunday is found with the Meeus/Jones/Butcher algorithm (integer
//! arithmetic only).  Floor division and Euclidean remainders are used so
//! that every `i32` year, negative proleptic years included, is accepted.

use chrono::{Days, NaiveDate};

/// A civil year/month/day triple for an Easter-related feast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EasterDate {
    /// Proleptic Gregorian year.
    pub year: i32,
    /// Month, 3 or 4 for Easter Sunday.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}

impl EasterDate {
    /// Convert to a chrono date.  `None` only if the year lies outside
    /// chrono's representable range.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Easter Sunday of `year`.
///
/// # Example
/// ```
/// use bizcal_time::easter::{easter_sunday, EasterDate};
/// assert_eq!(easter_sunday(2024), EasterDate { year: 2024, month: 3, day: 31 });
/// ```
pub fn easter_sunday(year: i32) -> EasterDate {
    let y = i64::from(year);
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    EasterDate {
        year,
        month: n.div_euclid(31) as u32,
        day: (n.rem_euclid(31) + 1) as u32,
    }
}

/// Easter Monday of `year` (the day after Easter Sunday).
pub fn easter_monday(year: i32) -> EasterDate {
    let sunday = easter_sunday(year);
    let mut month = sunday.month;
    let mut day = sunday.day + 1;
    if (month == 3 && day > 31) || (month == 4 && day > 30) {
        day = 1;
        month += 1;
    }
    EasterDate { year, month, day }
}

/// The date `offset` days after Easter Sunday of `year` (negative offsets
/// go before Easter).
///
/// The offset is applied with chrono date arithmetic so month and year
/// rollover are always correct.  Returns `None` only outside chrono's range.
pub fn easter_offset(year: i32, offset: i64) -> Option<NaiveDate> {
    let sunday = easter_sunday(year).to_date()?;
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        sunday.checked_add_days(days)
    } else {
        sunday.checked_sub_days(days)
    }
}
