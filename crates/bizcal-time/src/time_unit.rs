//! `TimeUnit` — units of time used in [`Period`](crate::period::Period).

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Weeks (7 days).
    Weeks,
    /// Months (30 days).
    Months,
    /// Years (365 days).
    Years,
    /// Hours.
    Hours,
    /// Minutes.
    Minutes,
    /// Seconds.
    Seconds,
    /// Milliseconds.
    Milliseconds,
}

impl TimeUnit {
    /// Length of one unit in days, using the casual conversion matrix.
    ///
    /// Months count as 30 days and years as 365 days regardless of the
    /// calendar position, so "one month of business days" is always thirty
    /// business days.
    pub fn days(&self) -> f64 {
        match self {
            TimeUnit::Days => 1.0,
            TimeUnit::Weeks => 7.0,
            TimeUnit::Months => 30.0,
            TimeUnit::Years => 365.0,
            TimeUnit::Hours => 1.0 / 24.0,
            TimeUnit::Minutes => 1.0 / 1_440.0,
            TimeUnit::Seconds => 1.0 / 86_400.0,
            TimeUnit::Milliseconds => 1.0 / 86_400_000.0,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
            TimeUnit::Years => write!(f, "Year(s)"),
            TimeUnit::Hours => write!(f, "Hour(s)"),
            TimeUnit::Minutes => write!(f, "Minute(s)"),
            TimeUnit::Seconds => write!(f, "Second(s)"),
            TimeUnit::Milliseconds => write!(f, "Millisecond(s)"),
        }
    }
}
