//! Holiday tables, rule composition, and Easter.
//!
//! These integration tests exercise the built-in country tables through
//! `BusinessCalendar`, the set operators `combine_holiday_sets` and
//! `adjust_for_weekend`, and the Easter computus.

use bizcal_time::calendars::{italy, san_marino, united_states};
use bizcal_time::{
    adjust_for_weekend, combine_holiday_sets, easter_monday, easter_sunday, BusinessCalendar,
    HolidayRule, HolidaySet, HolidayTable, Weekday,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn calendar(tables: &[HolidayTable], observe: bool) -> BusinessCalendar {
    tables
        .iter()
        .fold(BusinessCalendar::builder(), |b, t| b.with_table(*t))
        .observe_weekends(observe)
        .build()
        .unwrap()
}

/// Assert that the non-weekend holidays in `[from, to]` are exactly
/// `expected`.
fn check_holidays(cal: &BusinessCalendar, from: NaiveDate, to: NaiveDate, expected: &[NaiveDate]) {
    let calculated = cal.holidays_between(from, to, false);
    for d in &calculated {
        assert!(
            expected.contains(d),
            "{d} calculated as holiday but not expected ({:?})",
            cal.holiday_name(*d)
        );
    }
    for d in expected {
        assert!(calculated.contains(d), "{d} expected as holiday but not found");
    }
}

// ─── Country tables ───────────────────────────────────────────────────────────

#[test]
fn italy_2025() {
    let expected = [
        date(2025, 1, 1),
        date(2025, 1, 6),
        date(2025, 4, 21),
        date(2025, 4, 25),
        date(2025, 5, 1),
        date(2025, 6, 2),
        date(2025, 8, 15),
        date(2025, 12, 8),
        date(2025, 12, 25),
        date(2025, 12, 26),
    ];
    let cal = calendar(&[HolidayTable::Italy], false);
    check_holidays(&cal, date(2025, 1, 1), date(2025, 12, 31), &expected);
    // Easter Sunday and All Saints' Day (Saturday) fall on weekends
    assert_eq!(
        cal.holidays_between(date(2025, 1, 1), date(2025, 12, 31), true).len(),
        12
    );
}

#[test]
fn us_federal_2024() {
    let expected = [
        date(2024, 1, 1),
        date(2024, 1, 15),
        date(2024, 2, 19),
        date(2024, 5, 27),
        date(2024, 6, 19),
        date(2024, 7, 4),
        date(2024, 9, 2),
        date(2024, 10, 14),
        date(2024, 11, 11),
        date(2024, 11, 28),
        date(2024, 12, 25),
    ];
    let cal = calendar(&[HolidayTable::UsFederal], false);
    check_holidays(&cal, date(2024, 1, 1), date(2024, 12, 31), &expected);
}

#[test]
fn us_federal_2026_observed() {
    // Independence Day falls on Saturday and is observed Friday July 3.
    let expected = [
        date(2026, 1, 1),
        date(2026, 1, 19),
        date(2026, 2, 16),
        date(2026, 5, 25),
        date(2026, 6, 19),
        date(2026, 7, 3),
        date(2026, 9, 7),
        date(2026, 10, 12),
        date(2026, 11, 11),
        date(2026, 11, 26),
        date(2026, 12, 25),
    ];
    let cal = calendar(&[HolidayTable::UsFederal], true);
    check_holidays(&cal, date(2026, 1, 1), date(2026, 12, 31), &expected);
    assert_eq!(
        cal.holiday_name(date(2026, 7, 3)),
        Some("Independence Day (observed)")
    );
}

#[test]
fn us_full_table_adds_closings() {
    let cal = calendar(&[HolidayTable::UsAll], false);
    assert_eq!(cal.holiday_name(date(2024, 11, 29)), Some("Black Friday"));
    assert_eq!(cal.holiday_name(date(2024, 12, 24)), Some("Christmas Eve"));
    assert!(!cal.is_business_day(date(2024, 12, 31)));
    assert!(calendar(&[HolidayTable::UsFederal], false).is_business_day(date(2024, 12, 31)));
}

#[test]
fn san_marino_movable_feasts() {
    let cal = calendar(&[HolidayTable::SanMarino], false);
    // Easter 2024 is March 31
    assert_eq!(cal.holiday_name(date(2024, 4, 1)), Some("Easter Monday"));
    assert_eq!(cal.holiday_name(date(2024, 5, 30)), Some("Corpus Domini"));
    assert_eq!(cal.holiday_name(date(2025, 6, 19)), Some("Corpus Domini"));
    assert_eq!(cal.holiday_name(date(2025, 2, 5)), Some("Feast of Saint Agatha"));
    assert!(cal.is_business_day(date(2025, 6, 20)));
}

#[test]
fn table_lookup_is_stable() {
    assert!(std::ptr::eq(HolidayTable::Italy.holidays(), italy::all()));
    assert!(std::ptr::eq(HolidayTable::SanMarino.holidays(), san_marino::all()));
    assert!(std::ptr::eq(HolidayTable::UsFederal.holidays(), united_states::federal()));
    assert!(std::ptr::eq(HolidayTable::UsAll.holidays(), united_states::all()));
}

// ─── Composition ──────────────────────────────────────────────────────────────

#[test]
fn combining_distinct_tables_keeps_every_rule() {
    let combined = combine_holiday_sets(&[italy::all(), san_marino::all()]);
    assert_eq!(combined.len(), italy::all().len() + san_marino::all().len());
    // Same feast, different rule objects: both survive.
    let christmases = combined
        .iter()
        .filter(|r| r.name() == "Christmas Day")
        .count();
    assert_eq!(christmases, 2);
}

#[test]
fn combining_a_table_with_itself_deduplicates() {
    let combined = combine_holiday_sets(&[italy::all(), italy::all(), italy::all()]);
    assert_eq!(combined.len(), italy::all().len());
    let cal = calendar(&[HolidayTable::Italy, HolidayTable::Italy], false);
    assert_eq!(cal.holidays().len(), 12);
}

#[test]
fn combining_preserves_first_occurrence_order() {
    let a = HolidayRule::fixed("A", 1, 2);
    let b = HolidayRule::fixed("B", 1, 3);
    let c = HolidayRule::fixed("C", 1, 4);
    let first = HolidaySet::new([a.clone(), b.clone()]);
    let second = HolidaySet::new([c.clone(), a.clone()]);
    let combined = combine_holiday_sets(&[&first, &second]);
    let names: Vec<&str> = combined.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(combine_holiday_sets(&[]).is_empty());
}

#[test]
fn weekend_adjustment_per_rule() {
    let set = HolidaySet::new([
        HolidayRule::fixed("Independence Day", 7, 4),
        HolidayRule::fixed("Christmas Day", 12, 25),
    ]);
    let adjusted = adjust_for_weekend(&set);
    assert_eq!(adjusted.len(), 2);

    // 2026-07-04 Saturday: observed Friday
    assert!(adjusted.matches(date(2026, 7, 3)));
    assert!(adjusted.matches(date(2026, 7, 4)));
    assert!(!adjusted.matches(date(2026, 7, 6)));
    // 2027-07-04 Sunday: observed Monday
    assert!(adjusted.matches(date(2027, 7, 5)));
    assert!(!adjusted.matches(date(2027, 7, 2)));
    // 2022-12-25 Sunday: observed Monday the 26th
    assert!(adjusted.matches(date(2022, 12, 26)));
    // weekday holidays are unchanged
    assert!(adjusted.matches(date(2024, 7, 4)));
    assert!(!adjusted.matches(date(2024, 7, 5)));
    assert!(!adjusted.matches(date(2024, 7, 3)));

    // the source set is untouched
    assert!(!set.matches(date(2026, 7, 3)));
}

#[test]
fn custom_rules_alongside_tables() {
    let cal = BusinessCalendar::builder()
        .with_table(HolidayTable::Italy)
        .with_holiday(HolidayRule::nth_weekday(
            "Company Retreat",
            3,
            Weekday::Wednesday,
            1,
        ))
        .build()
        .unwrap();
    // second Wednesday of March 2025
    assert_eq!(cal.holiday_name(date(2025, 3, 12)), Some("Company Retreat"));
    assert!(cal.is_business_day(date(2025, 3, 5)));
    assert_eq!(cal.holidays().len(), 13);
}

// ─── Easter ───────────────────────────────────────────────────────────────────

#[test]
fn known_easter_sundays() {
    let known = [
        (1818, 3, 22),
        (1943, 4, 25),
        (2000, 4, 23),
        (2008, 3, 23),
        (2011, 4, 24),
        (2019, 4, 21),
        (2024, 3, 31),
        (2025, 4, 20),
        (2038, 4, 25),
        (2285, 3, 22),
    ];
    for (y, m, d) in known {
        assert_eq!(easter_sunday(y).to_date(), Some(date(y, m, d)), "year {y}");
    }
}

proptest! {
    #[test]
    fn easter_sunday_is_a_sunday_in_window(year in 1583i32..4100) {
        let easter = easter_sunday(year).to_date().unwrap();
        prop_assert_eq!(Weekday::of(easter), Weekday::Sunday);
        prop_assert!(easter >= date(year, 3, 22));
        prop_assert!(easter <= date(year, 4, 25));
    }

    #[test]
    fn easter_monday_follows_easter_sunday(year in 1583i32..4100) {
        let sunday = easter_sunday(year).to_date().unwrap();
        let monday = easter_monday(year).to_date().unwrap();
        prop_assert_eq!(sunday.succ_opt(), Some(monday));
        prop_assert_eq!(Weekday::of(monday), Weekday::Monday);
    }
}
