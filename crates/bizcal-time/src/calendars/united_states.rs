//! United States holiday tables.
//!
//! Federal holidays:
//! * New Year's Day (Jan 1)
//! * Martin Luther King Jr. Day (3rd Mon in Jan)
//! * Presidents' Day (3rd Mon in Feb)
//! * Memorial Day (last Mon in May)
//! * Juneteenth (Jun 19)
//! * Independence Day (Jul 4)
//! * Labor Day (1st Mon in Sep)
//! * Columbus Day / Indigenous Peoples' Day (2nd Mon in Oct)
//! * Veterans Day (Nov 11)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Day (Dec 25)
//!
//! The full table adds Christmas Eve, New Year's Eve, and the day after
//! Thanksgiving.  Rules are the canonical dates; wrap the set with
//! [`adjust_for_weekend`](crate::holiday_set::adjust_for_weekend) for
//! Friday/Monday observance.

use crate::holiday::HolidayRule;
use crate::holiday_set::HolidaySet;
use crate::weekday::Weekday;
use std::sync::OnceLock;

struct Tables {
    federal: HolidaySet,
    all: HolidaySet,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let federal = HolidaySet::new([
            HolidayRule::fixed("New Year's Day", 1, 1),
            HolidayRule::nth_weekday("Martin Luther King Jr. Day", 1, Weekday::Monday, 2),
            HolidayRule::nth_weekday("Presidents' Day", 2, Weekday::Monday, 2),
            HolidayRule::last_weekday("Memorial Day", 5, Weekday::Monday),
            HolidayRule::fixed("Juneteenth", 6, 19),
            HolidayRule::fixed("Independence Day", 7, 4),
            HolidayRule::nth_weekday("Labor Day", 9, Weekday::Monday, 0),
            HolidayRule::nth_weekday("Columbus Day", 10, Weekday::Monday, 1),
            HolidayRule::fixed("Veterans Day", 11, 11),
            HolidayRule::nth_weekday("Thanksgiving Day", 11, Weekday::Thursday, 3),
            HolidayRule::fixed("Christmas Day", 12, 25),
        ]);
        let extra = HolidaySet::new([
            HolidayRule::fixed("Christmas Eve", 12, 24),
            HolidayRule::fixed("New Year's Eve", 12, 31),
            HolidayRule::day_after_nth_weekday("Black Friday", 11, Weekday::Thursday, 3),
        ]);
        let all = federal.union(&extra);
        Tables { federal, all }
    })
}

/// US federal holidays.
pub fn federal() -> &'static HolidaySet {
    &tables().federal
}

/// US federal holidays plus Christmas Eve, New Year's Eve, and Black
/// Friday.  Shares rule identities with [`federal`].
pub fn all() -> &'static HolidaySet {
    &tables().all
}
