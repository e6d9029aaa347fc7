//! Italy holiday table.
//!
//! * New Year's Day (Jan 1)
//! * Epiphany (Jan 6)
//! * Easter Sunday
//! * Easter Monday
//! * Liberation Day (Apr 25)
//! * Labour Day (May 1)
//! * Republic Day (Jun 2)
//! * Assumption of Mary / Ferragosto (Aug 15)
//! * All Saints' Day (Nov 1)
//! * Immaculate Conception (Dec 8)
//! * Christmas Day (Dec 25)
//! * St. Stephen's Day (Dec 26)

use crate::holiday::HolidayRule;
use crate::holiday_set::HolidaySet;
use std::sync::OnceLock;

static ALL: OnceLock<HolidaySet> = OnceLock::new();

/// Italian national holidays.
pub fn all() -> &'static HolidaySet {
    ALL.get_or_init(|| {
        HolidaySet::new([
            HolidayRule::fixed("New Year's Day", 1, 1),
            HolidayRule::fixed("Epiphany", 1, 6),
            HolidayRule::easter_relative("Easter Sunday", 0),
            HolidayRule::easter_relative("Easter Monday", 1),
            HolidayRule::fixed("Liberation Day", 4, 25),
            HolidayRule::fixed("Labour Day", 5, 1),
            HolidayRule::fixed("Republic Day", 6, 2),
            HolidayRule::fixed("Assumption of Mary", 8, 15),
            HolidayRule::fixed("All Saints' Day", 11, 1),
            HolidayRule::fixed("Immaculate Conception", 12, 8),
            HolidayRule::fixed("Christmas Day", 12, 25),
            HolidayRule::fixed("St. Stephen's Day", 12, 26),
        ])
    })
}
