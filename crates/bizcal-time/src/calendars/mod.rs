//! Country holiday tables.
//!
//! Each table is an immutable [`HolidaySet`](crate::holiday_set::HolidaySet)
//! built once on first use.  Looking a table up twice returns the same rules,
//! so combining overlapping tables deduplicates them.  Tables from
//! different countries never share rules, even for the same feast.

pub mod italy;
pub mod san_marino;
pub mod united_states;

use crate::holiday_set::HolidaySet;

/// A named, built-in holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayTable {
    /// US federal holidays.
    #[cfg_attr(feature = "serde", serde(rename = "US.federal"))]
    UsFederal,
    /// US federal holidays plus common non-federal closings.
    #[cfg_attr(feature = "serde", serde(rename = "US"))]
    UsAll,
    /// Italian national holidays.
    #[cfg_attr(feature = "serde", serde(rename = "IT"))]
    Italy,
    /// San Marino national holidays.
    #[cfg_attr(feature = "serde", serde(rename = "SM"))]
    SanMarino,
}

impl HolidayTable {
    /// The rules of this table.
    pub fn holidays(&self) -> &'static HolidaySet {
        match self {
            HolidayTable::UsFederal => united_states::federal(),
            HolidayTable::UsAll => united_states::all(),
            HolidayTable::Italy => italy::all(),
            HolidayTable::SanMarino => san_marino::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday_set::combine_holiday_sets;

    #[test]
    fn distinct_countries_keep_their_own_rules() {
        let combined = combine_holiday_sets(&[
            HolidayTable::Italy.holidays(),
            HolidayTable::SanMarino.holidays(),
        ]);
        assert_eq!(combined.len(), 12 + 16);
    }

    #[test]
    fn same_table_twice_collapses() {
        let it = HolidayTable::Italy.holidays();
        assert_eq!(combine_holiday_sets(&[it, it]).len(), 12);
    }
}
