//! Error types for bizcal.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report.  Calendar construction returns errors directly; per-date queries
//! propagate invalid values and convert them to [`Error::Date`] on request.  The [`ensure!`]
//! macro keeps validation code short.

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The calendar configuration is unusable (e.g. no working weekday).
    #[error("invalid calendar configuration: {0}")]
    Configuration(String),

    /// A weekday number outside `1..=7` was supplied.
    #[error("weekday number {0} out of range [1, 7]")]
    WeekdayOutOfRange(u8),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date-related error (unrepresentable or unparsable date).
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bizcal_core::{ensure, errors::Error};
/// fn weekend_len(n: usize) -> bizcal_core::errors::Result<usize> {
///     ensure!(n < 7, "{n} weekend days leave no working day");
///     Ok(n)
/// }
/// assert!(weekend_len(2).is_ok());
/// assert_eq!(
///     weekend_len(7),
///     Err(Error::Configuration("7 weekend days leave no working day".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::WeekdayOutOfRange(9).to_string(),
            "weekday number 9 out of range [1, 7]"
        );
        assert_eq!(
            Error::Configuration("no working weekday".into()).to_string(),
            "invalid calendar configuration: no working weekday"
        );
        assert_eq!(
            Error::Date("2024-13-08 is not a valid date".into()).to_string(),
            "date error: 2024-13-08 is not a valid date"
        );
    }

    #[test]
    fn ensure_passes_through_on_success() {
        fn check(x: u8) -> Result<u8> {
            ensure!(x <= 6, "too many: {x}");
            Ok(x)
        }
        assert_eq!(check(6), Ok(6));
        assert!(matches!(check(7), Err(Error::Configuration(_))));
    }
}
