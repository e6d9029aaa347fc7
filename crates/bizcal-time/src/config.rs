//! Declarative calendar configuration.
//!
//! [`CalendarConfig`] describes a calendar as plain data (weekday lists,
//! built-in holiday tables, extra fixed-date holidays) so it can be kept in
//! a configuration file.  With the `serde` feature it derives
//! `Serialize`/`Deserialize`:
//!
//! ```json
//! {
//!   "business_days": [1, 2, 3, 4, 5],
//!   "holiday_tables": ["US.federal"],
//!   "fixed_holidays": [{ "name": "Company Day", "month": 3, "day": 14 }],
//!   "observe_weekends": true
//! }
//! ```

use crate::business_calendar::BusinessCalendar;
use crate::calendars::HolidayTable;
use crate::holiday::HolidayRule;
use bizcal_core::ensure;
use bizcal_core::errors::Result;

/// A fixed month/day holiday given as data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedHoliday {
    /// Display name.
    pub name: String,
    /// Month, 1–12.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}

/// Plain-data description of a [`BusinessCalendar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CalendarConfig {
    /// Non-working weekdays (ISO numbers).  Defaults to Saturday/Sunday.
    pub weekend_days: Option<Vec<u8>>,
    /// Working weekdays (ISO numbers).  Mutually exclusive with
    /// `weekend_days`.
    pub business_days: Option<Vec<u8>>,
    /// Built-in holiday tables to include, in order.
    pub holiday_tables: Vec<HolidayTable>,
    /// Additional fixed-date holidays.
    pub fixed_holidays: Vec<FixedHoliday>,
    /// Observe weekend holidays on the adjacent Friday/Monday.
    pub observe_weekends: bool,
}

impl BusinessCalendar {
    /// Build a calendar from a [`CalendarConfig`].
    ///
    /// # Errors
    /// Fails on the same weekday violations as
    /// [`CalendarBuilder::build`](crate::business_calendar::CalendarBuilder::build),
    /// or when both weekday lists are given.  A fixed holiday naming a
    /// month/day that never occurs is an
    /// [`Error::InvalidArgument`](bizcal_core::Error::InvalidArgument).
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        ensure!(
            config.weekend_days.is_none() || config.business_days.is_none(),
            "weekend_days and business_days are mutually exclusive"
        );
        let mut builder = BusinessCalendar::builder().observe_weekends(config.observe_weekends);
        if let Some(days) = &config.weekend_days {
            builder = builder.with_weekend_days(days);
        }
        if let Some(days) = &config.business_days {
            builder = builder.with_business_days(days);
        }
        for table in &config.holiday_tables {
            builder = builder.with_table(*table);
        }
        for h in &config.fixed_holidays {
            let rule = HolidayRule::try_fixed(h.name.clone(), h.month, h.day)?;
            builder = builder.with_holiday(rule);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcal_core::Error;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_config_is_weekends_only() {
        let cal = BusinessCalendar::from_config(&CalendarConfig::default()).unwrap();
        assert!(cal.holidays().is_empty());
        assert!(!cal.is_business_day(date(2024, 1, 6)));
    }

    #[test]
    fn tables_and_fixed_holidays() {
        let config = CalendarConfig {
            holiday_tables: vec![HolidayTable::Italy, HolidayTable::SanMarino],
            fixed_holidays: vec![FixedHoliday {
                name: "Company Day".into(),
                month: 3,
                day: 14,
            }],
            ..CalendarConfig::default()
        };
        let cal = BusinessCalendar::from_config(&config).unwrap();
        assert_eq!(cal.holidays().len(), 12 + 16 + 1);
        assert_eq!(cal.holiday_name(date(2025, 3, 14)), Some("Company Day"));
        assert_eq!(cal.holiday_name(date(2025, 9, 3)), Some("Foundation of the Republic"));
    }

    #[test]
    fn conflicting_weekday_lists() {
        let config = CalendarConfig {
            weekend_days: Some(vec![6, 7]),
            business_days: Some(vec![1, 2, 3, 4, 5]),
            ..CalendarConfig::default()
        };
        assert!(matches!(
            BusinessCalendar::from_config(&config),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn impossible_fixed_holiday() {
        let config = CalendarConfig {
            fixed_holidays: vec![FixedHoliday {
                name: "Nope".into(),
                month: 2,
                day: 30,
            }],
            ..CalendarConfig::default()
        };
        assert!(matches!(
            BusinessCalendar::from_config(&config),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn seven_weekend_days_rejected() {
        let config = CalendarConfig {
            weekend_days: Some(vec![1, 2, 3, 4, 5, 6, 7]),
            ..CalendarConfig::default()
        };
        assert!(matches!(
            BusinessCalendar::from_config(&config),
            Err(Error::Configuration(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_from_json() {
        let json = r#"{
            "business_days": [1, 2, 3, 4, 5],
            "holiday_tables": ["US.federal"],
            "fixed_holidays": [{ "name": "Company Day", "month": 3, "day": 14 }],
            "observe_weekends": true
        }"#;
        let config: CalendarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.holiday_tables, vec![HolidayTable::UsFederal]);
        let cal = BusinessCalendar::from_config(&config).unwrap();
        // Independence Day 2026 (Saturday) observed on Friday
        assert!(!cal.is_business_day(date(2026, 7, 3)));
        assert!(serde_json::from_str::<CalendarConfig>(r#"{"bogus": 1}"#).is_err());
    }
}
