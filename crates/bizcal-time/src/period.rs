//! `Period` — an amount of time expressed in a [`TimeUnit`].
//!
//! Business-day stepping takes a `Period` and converts it to a (possibly
//! fractional) number of days.

use crate::time_unit::TimeUnit;
use chrono::TimeDelta;

/// A signed length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units (negative for backward periods).
    pub length: i64,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i64, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// `n` days.
    pub fn days(n: i64) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// `n` weeks.
    pub fn weeks(n: i64) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// `n` months.
    pub fn months(n: i64) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// `n` years.
    pub fn years(n: i64) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// `n` hours.
    pub fn hours(n: i64) -> Self {
        Self::new(n, TimeUnit::Hours)
    }

    /// Negate the period (reverse direction).  `i64::MIN` saturates to
    /// `i64::MAX`; see [`checked_neg`](Self::checked_neg).
    pub fn negated(self) -> Self {
        Self {
            length: self.length.saturating_neg(),
            unit: self.unit,
        }
    }

    /// Negate the period, or `None` if the length is `i64::MIN`.
    pub fn checked_neg(self) -> Option<Self> {
        Some(Self {
            length: self.length.checked_neg()?,
            unit: self.unit,
        })
    }

    /// Scale the period, or `None` on overflow.
    pub fn checked_mul(self, rhs: i64) -> Option<Self> {
        Some(Self {
            length: self.length.checked_mul(rhs)?,
            unit: self.unit,
        })
    }

    /// Return `true` if the length is zero.
    pub fn is_zero(&self) -> bool {
        self.length == 0
    }

    /// Length in (possibly fractional) days; see [`TimeUnit::days`].
    pub fn as_days(&self) -> f64 {
        let n = self.length as f64;
        // divide, so whole days given in sub-day units stay exact
        match self.unit {
            TimeUnit::Hours => n / 24.0,
            TimeUnit::Minutes => n / 1_440.0,
            TimeUnit::Seconds => n / 86_400.0,
            TimeUnit::Milliseconds => n / 86_400_000.0,
            unit => n * unit.days(),
        }
    }

    /// Whole number of days to step: the magnitude is rounded up, the sign
    /// is kept.  `-1.5` days gives `-2`.
    pub fn business_steps(&self) -> i64 {
        let days = self.as_days();
        let magnitude = days.abs().ceil() as i64;
        if days < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

/// Saturates on overflow; see [`Period::checked_mul`].
impl std::ops::Mul<i64> for Period {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        Period {
            length: self.length.saturating_mul(rhs),
            unit: self.unit,
        }
    }
}

/// Bare integers are day counts.
impl From<i64> for Period {
    fn from(n: i64) -> Self {
        Period::days(n)
    }
}

impl From<i32> for Period {
    fn from(n: i32) -> Self {
        Period::days(n as i64)
    }
}

/// Whole milliseconds; a sub-millisecond remainder rounds the magnitude up,
/// so only a zero delta gives a zero period.
impl From<TimeDelta> for Period {
    fn from(d: TimeDelta) -> Self {
        let mut millis = d.num_milliseconds();
        if TimeDelta::milliseconds(millis) != d {
            millis += if d < TimeDelta::zero() { -1 } else { 1 };
        }
        Period::new(millis, TimeUnit::Milliseconds)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
            TimeUnit::Hours => "h",
            TimeUnit::Minutes => "min",
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
