//! San Marino holiday table.
//!
//! * New Year's Day (Jan 1)
//! * Epiphany (Jan 6)
//! * Feast of Saint Agatha (Feb 5)
//! * Anniversary of the Arengo (Mar 25)
//! * Easter Sunday
//! * Easter Monday
//! * Workers' Day (May 1)
//! * Corpus Domini (Easter + 60 days)
//! * Fall of Fascism (Jul 28)
//! * Assumption Day (Aug 15)
//! * Foundation of the Republic (Sep 3)
//! * All Saints' Day (Nov 1)
//! * All Souls' Day (Nov 2)
//! * Immaculate Conception (Dec 8)
//! * Christmas Day (Dec 25)
//! * St. Stephen's Day (Dec 26)

use crate::holiday::HolidayRule;
use crate::holiday_set::HolidaySet;
use std::sync::OnceLock;

static ALL: OnceLock<HolidaySet> = OnceLock::new();

/// San Marino national holidays.
pub fn all() -> &'static HolidaySet {
    ALL.get_or_init(|| {
        HolidaySet::new([
            HolidayRule::fixed("New Year's Day", 1, 1),
            HolidayRule::fixed("Epiphany", 1, 6),
            HolidayRule::fixed("Feast of Saint Agatha", 2, 5),
            HolidayRule::fixed("Anniversary of the Arengo", 3, 25),
            HolidayRule::easter_relative("Easter Sunday", 0),
            HolidayRule::easter_relative("Easter Monday", 1),
            HolidayRule::fixed("Workers' Day", 5, 1),
            HolidayRule::easter_relative("Corpus Domini", 60),
            HolidayRule::fixed("Fall of Fascism", 7, 28),
            HolidayRule::fixed("Assumption Day", 8, 15),
            HolidayRule::fixed("Foundation of the Republic", 9, 3),
            HolidayRule::fixed("All Saints' Day", 11, 1),
            HolidayRule::fixed("All Souls' Day", 11, 2),
            HolidayRule::fixed("Immaculate Conception", 12, 8),
            HolidayRule::fixed("Christmas Day", 12, 25),
            HolidayRule::fixed("St. Stephen's Day", 12, 26),
        ])
    })
}
