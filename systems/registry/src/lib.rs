#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collectible registry: the roster of categories and per-category counts.

use std::collections::HashSet;

use meme_train_core::CategoryId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of collections required per category unless configured otherwise.
pub const DEFAULT_REQUIRED_COUNT: u32 = 2;

/// Number of categories in the default roster.
pub const DEFAULT_CATEGORY_COUNT: u32 = 6;

/// Reasons a roster description may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster lists no categories.
    #[error("roster must contain at least one category")]
    Empty,
    /// The required count is zero, which would make every run an instant win.
    #[error("required collection count must be at least one")]
    ZeroRequirement,
    /// Two categories share a name.
    #[error("category name `{0}` appears more than once")]
    DuplicateName(String),
    /// More categories than identifiers can address.
    #[error("roster lists {0} categories, which exceeds the supported maximum")]
    TooManyCategories(usize),
}

/// Ordered set of collectible categories and the count each must reach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
    required: u32,
}

impl Roster {
    /// Creates a roster from category names and a per-category requirement.
    pub fn new(names: Vec<String>, required: u32) -> Result<Self, RosterError> {
        if names.is_empty() {
            return Err(RosterError::Empty);
        }
        if required == 0 {
            return Err(RosterError::ZeroRequirement);
        }
        if u32::try_from(names.len()).is_err() {
            return Err(RosterError::TooManyCategories(names.len()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(RosterError::DuplicateName(name.clone()));
            }
        }

        Ok(Self { names, required })
    }

    /// Creates a roster of `count` anonymous categories named `team-1`, `team-2`, ...
    pub fn numbered(count: u32, required: u32) -> Result<Self, RosterError> {
        Self::new(
            (1..=count).map(|index| format!("team-{index}")).collect(),
            required,
        )
    }

    /// Number of categories in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Reports whether the roster is empty. Validated rosters never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Count every category must reach to complete a run.
    #[must_use]
    pub const fn required(&self) -> u32 {
        self.required
    }

    /// Reports whether the identifier addresses a category of this roster.
    #[must_use]
    pub fn contains(&self, category: CategoryId) -> bool {
        category.index() < self.names.len()
    }

    /// Display name of the category.
    #[must_use]
    pub fn name(&self, category: CategoryId) -> Option<&str> {
        self.names.get(category.index()).map(String::as_str)
    }

    /// Iterates over every category identifier in roster order.
    pub fn categories(&self) -> impl Iterator<Item = CategoryId> + '_ {
        (0..self.names.len()).filter_map(|index| u32::try_from(index).ok().map(CategoryId::new))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            names: (1..=DEFAULT_CATEGORY_COUNT)
                .map(|index| format!("team-{index}"))
                .collect(),
            required: DEFAULT_REQUIRED_COUNT,
        }
    }
}

/// Number of collectibles consumed per category during a run.
///
/// Counts only ever grow; they may exceed the roster requirement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionCounts {
    counts: Vec<u32>,
}

impl CollectionCounts {
    /// Creates zeroed counts for every category of the roster.
    #[must_use]
    pub fn for_roster(roster: &Roster) -> Self {
        Self {
            counts: vec![0; roster.len()],
        }
    }

    /// Creates counts from explicit per-category values in roster order.
    #[must_use]
    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// Records one pickup of the category, returning its updated count.
    ///
    /// Returns `None` for identifiers outside the tracked categories.
    pub fn record(&mut self, category: CategoryId) -> Option<u32> {
        let slot = self.counts.get_mut(category.index())?;
        *slot = slot.saturating_add(1);
        Some(*slot)
    }

    /// Number of tracked categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Reports whether no categories are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Current count of the category; zero for unknown identifiers.
    #[must_use]
    pub fn count(&self, category: CategoryId) -> u32 {
        self.counts.get(category.index()).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|count| u64::from(*count)).sum()
    }

    /// Reports whether every roster category reached the required count.
    #[must_use]
    pub fn is_complete(&self, roster: &Roster) -> bool {
        roster
            .categories()
            .all(|category| self.count(category) >= roster.required())
    }

    /// Categories that have not reached the required count, in roster order.
    #[must_use]
    pub fn unsatisfied(&self, roster: &Roster) -> Vec<CategoryId> {
        roster
            .categories()
            .filter(|category| self.count(*category) < roster.required())
            .collect()
    }

    /// Iterates over `(category, count)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, u32)> + '_ {
        self.counts.iter().enumerate().filter_map(|(index, count)| {
            u32::try_from(index)
                .ok()
                .map(|index| (CategoryId::new(index), *count))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_has_six_categories_requiring_two() {
        let roster = Roster::default();
        assert_eq!(roster.len(), 6);
        assert_eq!(roster.required(), 2);
        assert_eq!(roster.name(CategoryId::new(0)), Some("team-1"));
        assert_eq!(roster, Roster::numbered(6, 2).expect("roster"));
    }

    #[test]
    fn roster_rejects_invalid_descriptions() {
        assert_eq!(Roster::new(Vec::new(), 2), Err(RosterError::Empty));
        assert_eq!(
            Roster::new(vec!["a".into()], 0),
            Err(RosterError::ZeroRequirement)
        );
        assert_eq!(
            Roster::new(vec!["a".into(), "b".into(), "a".into()], 2),
            Err(RosterError::DuplicateName("a".into()))
        );
    }

    #[test]
    fn unknown_categories_are_not_tracked() {
        let roster = Roster::numbered(2, 1).expect("roster");
        let mut counts = CollectionCounts::for_roster(&roster);
        assert!(!roster.contains(CategoryId::new(2)));
        assert_eq!(counts.record(CategoryId::new(2)), None);
        assert_eq!(counts.count(CategoryId::new(2)), 0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn record_increments_by_one_and_may_exceed_requirement() {
        let roster = Roster::numbered(1, 2).expect("roster");
        let mut counts = CollectionCounts::for_roster(&roster);
        let category = CategoryId::new(0);
        assert_eq!(counts.record(category), Some(1));
        assert_eq!(counts.record(category), Some(2));
        assert_eq!(counts.record(category), Some(3));
        assert_eq!(counts.count(category), 3);
        assert!(counts.is_complete(&roster));
    }

    #[test]
    fn completion_requires_every_category() {
        let roster = Roster::numbered(3, 2).expect("roster");
        let mut counts = CollectionCounts::from_counts(vec![2, 5, 1]);
        assert!(!counts.is_complete(&roster));
        assert_eq!(counts.unsatisfied(&roster), vec![CategoryId::new(2)]);

        let _ = counts.record(CategoryId::new(2));
        assert!(counts.is_complete(&roster));
        assert!(counts.unsatisfied(&roster).is_empty());
    }

    #[test]
    fn iter_reports_roster_order() {
        let counts = CollectionCounts::from_counts(vec![4, 0]);
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![(CategoryId::new(0), 4), (CategoryId::new(1), 0)]
        );
    }
}
