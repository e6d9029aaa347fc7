//! `BusinessDuration` — the result of a business-day difference.
//!
//! A duration is a signed count of business days plus a sub-day remainder
//! (the difference between the two endpoints' times of day).  Equivalently
//! it is the literal instant-to-instant difference with every whole
//! non-business day taken out.  For endpoints at midnight the remainder is
//! zero and the duration is exactly the business-day count.
//!
//! A difference involving an invalid date yields an *invalid* duration:
//! every accessor returns `None`, and [`BusinessDuration::as_days`] returns
//! NaN.

use crate::time_unit::TimeUnit;
use chrono::TimeDelta;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Signed business-day duration with sub-day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDuration {
    inner: Option<Parts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    days: i64,
    remainder: TimeDelta,
}

/// Breakdown of a duration into calendar-time components.
///
/// All components carry the sign of the whole duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationParts {
    /// Whole days.
    pub days: i64,
    /// Hours, |h| < 24.
    pub hours: i64,
    /// Minutes, |m| < 60.
    pub minutes: i64,
    /// Seconds, |s| < 60.
    pub seconds: i64,
    /// Milliseconds, |ms| < 1000.
    pub milliseconds: i64,
}

impl BusinessDuration {
    /// `days` business days plus a sub-day `remainder`.
    pub fn new(days: i64, remainder: TimeDelta) -> Self {
        Self {
            inner: Some(Parts { days, remainder }),
        }
    }

    /// A whole number of business days.
    pub fn days(days: i64) -> Self {
        Self::new(days, TimeDelta::zero())
    }

    /// The zero duration.
    pub fn zero() -> Self {
        Self::days(0)
    }

    /// The invalid duration.
    pub fn invalid() -> Self {
        Self { inner: None }
    }

    /// Return `true` unless this is the invalid duration.
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// The signed business-day count.
    pub fn business_days(&self) -> Option<i64> {
        self.inner.map(|p| p.days)
    }

    /// The sub-day remainder (difference of the endpoints' times of day).
    pub fn remainder(&self) -> Option<TimeDelta> {
        self.inner.map(|p| p.remainder)
    }

    /// The full duration as a chrono `TimeDelta`.
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        let p = self.inner?;
        TimeDelta::try_days(p.days)?.checked_add(&p.remainder)
    }

    fn total_millis(&self) -> Option<i64> {
        let p = self.inner?;
        p.days
            .checked_mul(MILLIS_PER_DAY)?
            .checked_add(p.remainder.num_milliseconds())
    }

    /// The duration in (fractional) days; NaN if invalid.
    ///
    /// ```
    /// use bizcal_time::BusinessDuration;
    /// assert_eq!(BusinessDuration::days(5).as_days(), 5.0);
    /// assert!(BusinessDuration::invalid().as_days().is_nan());
    /// ```
    pub fn as_days(&self) -> f64 {
        match self.total_millis() {
            Some(ms) => ms as f64 / MILLIS_PER_DAY as f64,
            None => f64::NAN,
        }
    }

    /// The duration expressed in `unit`; NaN if invalid.  Uses the same
    /// casual conversion as [`TimeUnit::days`].
    pub fn as_unit(&self, unit: TimeUnit) -> f64 {
        self.as_days() / unit.days()
    }

    /// Days/hours/minutes/seconds/milliseconds breakdown.
    pub fn parts(&self) -> Option<DurationParts> {
        let ms = self.total_millis()?;
        Some(DurationParts {
            days: ms / MILLIS_PER_DAY,
            hours: (ms % MILLIS_PER_DAY) / 3_600_000,
            minutes: (ms % 3_600_000) / 60_000,
            seconds: (ms % 60_000) / 1_000,
            milliseconds: ms % 1_000,
        })
    }
}

impl Default for BusinessDuration {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Neg for BusinessDuration {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            inner: self.inner.map(|p| Parts {
                days: -p.days,
                remainder: -p.remainder,
            }),
        }
    }
}

impl std::fmt::Display for BusinessDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.parts() {
            None => write!(f, "Invalid Duration"),
            Some(p) => write!(
                f,
                "{}d {}h {}m {}s {}ms",
                p.days, p.hours, p.minutes, p.seconds, p.milliseconds
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn whole_days() {
        let d = BusinessDuration::days(5);
        assert_eq!(d.business_days(), Some(5));
        assert_relative_eq!(d.as_days(), 5.0);
        assert_relative_eq!(d.as_unit(TimeUnit::Hours), 120.0);
        assert_eq!(d.to_time_delta(), Some(TimeDelta::days(5)));
    }

    #[test]
    fn sub_day_parts() {
        let d = BusinessDuration::new(5, TimeDelta::hours(8) + TimeDelta::milliseconds(250));
        assert_eq!(
            d.parts(),
            Some(DurationParts {
                days: 5,
                hours: 8,
                minutes: 0,
                seconds: 0,
                milliseconds: 250,
            })
        );
        assert_relative_eq!(d.as_days(), 5.0 + 8.0 / 24.0 + 250.0 / 86_400_000.0);
        assert_eq!(d.to_string(), "5d 8h 0m 0s 250ms");
    }

    #[test]
    fn negative_parts_share_sign() {
        let d = -BusinessDuration::new(5, TimeDelta::hours(8));
        assert_eq!(d.business_days(), Some(-5));
        let p = d.parts().unwrap();
        assert_eq!((p.days, p.hours), (-5, -8));
    }

    #[test]
    fn invalid_propagates() {
        let d = BusinessDuration::invalid();
        assert!(!d.is_valid());
        assert!(d.as_days().is_nan());
        assert!(d.parts().is_none());
        assert!(d.to_time_delta().is_none());
        assert!(!(-d).is_valid());
        assert_eq!(d.to_string(), "Invalid Duration");
    }
}
