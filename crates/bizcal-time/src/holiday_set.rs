//! `HolidaySet` — an ordered, identity-deduplicated collection of
//! [`HolidayRule`]s, plus the composition operators over sets.

use crate::holiday::HolidayRule;
use chrono::NaiveDate;
use std::collections::HashSet;

/// An ordered set of holiday rules.
///
/// Duplicates are removed by rule identity on construction, keeping the
/// first occurrence.  Immutable once built; cloning is cheap since rules
/// are reference counted.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    rules: Vec<HolidayRule>,
}

impl HolidaySet {
    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from rules, dropping repeated identities.
    pub fn new(rules: impl IntoIterator<Item = HolidayRule>) -> Self {
        let mut seen = HashSet::new();
        let rules = rules
            .into_iter()
            .filter(|r| seen.insert(r.identity()))
            .collect();
        Self { rules }
    }

    /// The rules in order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Iterate over the rules.
    pub fn iter(&self) -> std::slice::Iter<'_, HolidayRule> {
        self.rules.iter()
    }

    /// Number of distinct rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Return `true` if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Return `true` if the very same rule (by identity) is in the set.
    pub fn contains(&self, rule: &HolidayRule) -> bool {
        self.rules.iter().any(|r| r.same_rule(rule))
    }

    /// Return `true` if any rule matches `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.rules.iter().any(|r| r.matches(date))
    }

    /// The first rule matching `date`, if any.
    pub fn matching(&self, date: NaiveDate) -> Option<&HolidayRule> {
        self.rules.iter().find(|r| r.matches(date))
    }

    /// Union of `self` and `other` (identity-deduplicated, order stable).
    pub fn union(&self, other: &HolidaySet) -> HolidaySet {
        combine_holiday_sets(&[self, other])
    }

    /// Apply [`HolidayRule::adjusted_for_weekend`] to every rule.
    pub fn adjusted_for_weekend(&self) -> HolidaySet {
        adjust_for_weekend(self)
    }
}

impl FromIterator<HolidayRule> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = HolidayRule>>(iter: I) -> Self {
        HolidaySet::new(iter)
    }
}

impl From<Vec<HolidayRule>> for HolidaySet {
    fn from(rules: Vec<HolidayRule>) -> Self {
        HolidaySet::new(rules)
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a HolidayRule;
    type IntoIter = std::slice::Iter<'a, HolidayRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Flatten several sets into one, removing repeated rule identities while
/// keeping the order of first occurrence.
///
/// Two distinct rules that happen to match the same dates both survive.
pub fn combine_holiday_sets(sets: &[&HolidaySet]) -> HolidaySet {
    HolidaySet::new(sets.iter().flat_map(|s| s.rules.iter().cloned()))
}

/// Derive the weekend-observed version of every rule in `set`.
///
/// The transform is per rule; a holiday landing on Saturday is also
/// observed the Friday before, one landing on Sunday the Monday after.
pub fn adjust_for_weekend(set: &HolidaySet) -> HolidaySet {
    HolidaySet {
        rules: set.rules.iter().map(HolidayRule::adjusted_for_weekend).collect(),
    }
}
