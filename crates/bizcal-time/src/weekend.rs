//! `WeekendDays` — the validated set of non-working weekdays.
//!
//! The set is stored as a 7-bit mask.  At least one weekday must remain a
//! working day, otherwise the business-day stepping algorithms could never
//! terminate; constructors enforce this eagerly.

use crate::weekday::Weekday;
use bizcal_core::ensure;
use bizcal_core::errors::Result;

const ALL_DAYS: u8 = 0b111_1111;

/// A set of ISO weekdays treated as non-working days.
///
/// Always has at least one working weekday.  The default is Saturday and
/// Sunday.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct WeekendDays(u8);

impl WeekendDays {
    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekendDays = WeekendDays(0b110_0000);

    /// Friday and Saturday.
    pub const FRIDAY_SATURDAY: WeekendDays = WeekendDays(0b011_0000);

    /// No weekend at all; every weekday is a working day.
    pub const NONE: WeekendDays = WeekendDays(0);

    /// Build a weekend set from ISO weekday numbers (1 = Monday … 7 = Sunday).
    ///
    /// Duplicate numbers are accepted and collapse.
    ///
    /// # Errors
    /// * [`Error::WeekdayOutOfRange`](bizcal_core::Error::WeekdayOutOfRange)
    ///   for a number outside `1..=7`.
    /// * [`Error::Configuration`](bizcal_core::Error::Configuration) if more
    ///   than six entries are given or no working weekday remains.
    pub fn new(days: &[u8]) -> Result<Self> {
        ensure!(
            days.len() <= 6,
            "{} weekend days given, at most 6 allowed",
            days.len()
        );
        let mut mask = 0u8;
        for &n in days {
            mask |= bit(Weekday::from_iso(n)?);
        }
        Self::from_mask(mask)
    }

    /// Build a weekend set from [`Weekday`] values.
    pub fn from_weekdays(days: &[Weekday]) -> Result<Self> {
        ensure!(
            days.len() <= 6,
            "{} weekend days given, at most 6 allowed",
            days.len()
        );
        Self::from_mask(days.iter().fold(0, |acc, &w| acc | bit(w)))
    }

    /// Build a weekend set as the complement of the given *working* weekdays.
    ///
    /// # Errors
    /// Fails if a number is out of range or the list is empty.
    pub fn from_business_days(days: &[u8]) -> Result<Self> {
        let mut working = 0u8;
        for &n in days {
            working |= bit(Weekday::from_iso(n)?);
        }
        Self::from_mask(!working & ALL_DAYS)
    }

    fn from_mask(mask: u8) -> Result<Self> {
        ensure!(
            mask & ALL_DAYS != ALL_DAYS,
            "every weekday is a weekend day, at least one working weekday is required"
        );
        Ok(WeekendDays(mask & ALL_DAYS))
    }

    /// Return `true` if `weekday` is a non-working day.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & bit(weekday) != 0
    }

    /// Number of weekend days (0–6).
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if no weekday is a weekend day.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Weekend days in ISO order.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|w| self.contains(*w))
    }

    /// Working weekdays in ISO order.  Never empty.
    pub fn business_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|w| !self.contains(*w))
    }

    /// ISO numbers of the weekend days.
    pub fn to_iso(&self) -> Vec<u8> {
        self.weekdays().map(|w| w.iso()).collect()
    }
}

fn bit(w: Weekday) -> u8 {
    1 << (w.iso() - 1)
}

impl Default for WeekendDays {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl TryFrom<Vec<u8>> for WeekendDays {
    type Error = bizcal_core::Error;

    fn try_from(days: Vec<u8>) -> Result<Self> {
        WeekendDays::new(&days)
    }
}

impl From<WeekendDays> for Vec<u8> {
    fn from(w: WeekendDays) -> Self {
        w.to_iso()
    }
}

impl std::fmt::Debug for WeekendDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.weekdays()).finish()
    }
}
