//! Item Catalog
//!
//! Static classification items, per-game configuration and the validated
//! catalog a session is built from.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

use crate::completion::CompletionText;

/// Anything usable as a ground-truth category for a two-bin game
pub trait Category: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Category for T where T: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

/// A single classification item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<C> {
    pub id: u32,
    pub label: &'static str,
    pub category: C,
}

/// One of the two drop targets of a game
#[derive(Debug, Clone, Copy)]
pub struct BinSpec<C> {
    pub category: C,
    pub label: &'static str,
    pub icon: &'static str,
    /// CSS modifier for the bin ("good", "bad", ...)
    pub tone: &'static str,
}

/// Everything that distinguishes one game instance from another
#[derive(Debug)]
pub struct GameConfig<C: 'static> {
    /// Stable key, used for DOM ids and log targets
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub instructions: &'static str,
    /// CSS class applied to the game card
    pub theme: &'static str,
    pub items: &'static [Item<C>],
    /// Explanation shown when an item is dropped on the wrong bin, keyed by item id
    pub explanations: &'static [(u32, &'static str)],
    pub bins: [BinSpec<C>; 2],
    pub correct_message: &'static str,
    pub feedback_delay_ms: u32,
    pub completion: CompletionText,
}

impl<C: Category> GameConfig<C> {
    /// Validate the static tables into a catalog
    pub fn catalog(&self) -> Result<Catalog<C>, CatalogError> {
        Catalog::new(
            self.items.iter().copied(),
            self.explanations.iter().copied(),
            [self.bins[0].category, self.bins[1].category],
            self.correct_message,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no items")]
    Empty,
    #[error("item id {0} appears more than once")]
    DuplicateItem(u32),
    #[error("both bins accept the same category")]
    IdenticalBins,
    #[error("item {0} has a category that matches neither bin")]
    UnknownCategory(u32),
    #[error("item {0} has no explanation")]
    MissingExplanation(u32),
    #[error("item {0} has more than one explanation")]
    DuplicateExplanation(u32),
    #[error("explanation refers to unknown item {0}")]
    OrphanExplanation(u32),
}

/// An item paired with the explanation that justifies its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<C> {
    pub item: Item<C>,
    pub explanation: &'static str,
}

/// Validated, ordered list of entries for one game
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<C> {
    entries: Vec<CatalogEntry<C>>,
    bins: [C; 2],
    correct_message: &'static str,
}

impl<C: Category> Catalog<C> {
    pub fn new(
        items: impl IntoIterator<Item = Item<C>>,
        explanations: impl IntoIterator<Item = (u32, &'static str)>,
        bins: [C; 2],
        correct_message: &'static str,
    ) -> Result<Self, CatalogError> {
        if bins[0] == bins[1] {
            return Err(CatalogError::IdenticalBins);
        }

        let items: Vec<Item<C>> = items.into_iter().collect();
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        for item in &items {
            if !ids.insert(item.id) {
                return Err(CatalogError::DuplicateItem(item.id));
            }
            if !bins.contains(&item.category) {
                return Err(CatalogError::UnknownCategory(item.id));
            }
        }

        let mut lookup: HashMap<u32, &'static str> = HashMap::new();
        for (id, text) in explanations {
            if !ids.contains(&id) {
                return Err(CatalogError::OrphanExplanation(id));
            }
            if lookup.insert(id, text).is_some() {
                return Err(CatalogError::DuplicateExplanation(id));
            }
        }

        let entries = items
            .into_iter()
            .map(|item| {
                lookup
                    .get(&item.id)
                    .map(|&explanation| CatalogEntry { item, explanation })
                    .ok_or(CatalogError::MissingExplanation(item.id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries, bins, correct_message })
    }

    pub fn entries(&self) -> &[CatalogEntry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn bins(&self) -> [C; 2] {
        self.bins
    }

    pub fn correct_message(&self) -> &'static str {
        self.correct_message
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry<C>> {
        self.entries.iter().find(|entry| entry.item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Side {
        Left,
        Right,
    }

    fn item(id: u32, category: Side) -> Item<Side> {
        Item { id, label: "item", category }
    }

    fn build(
        items: Vec<Item<Side>>,
        explanations: Vec<(u32, &'static str)>,
    ) -> Result<Catalog<Side>, CatalogError> {
        Catalog::new(items, explanations, [Side::Left, Side::Right], "ok")
    }

    #[test]
    fn test_valid_catalog_keeps_order() {
        let catalog = build(
            vec![item(3, Side::Left), item(1, Side::Right), item(2, Side::Left)],
            vec![(1, "one"), (2, "two"), (3, "three")],
        )
        .unwrap();

        let ids: Vec<u32> = catalog.entries().iter().map(|e| e.item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.get(1).unwrap().explanation, "one");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(build(vec![], vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = build(
            vec![item(1, Side::Left), item(1, Side::Right)],
            vec![(1, "one")],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateItem(1));
    }

    #[test]
    fn test_every_item_needs_exactly_one_explanation() {
        let missing = build(vec![item(1, Side::Left), item(2, Side::Right)], vec![(1, "one")]);
        assert_eq!(missing, Err(CatalogError::MissingExplanation(2)));

        let doubled = build(vec![item(1, Side::Left)], vec![(1, "one"), (1, "again")]);
        assert_eq!(doubled, Err(CatalogError::DuplicateExplanation(1)));

        let orphan = build(vec![item(1, Side::Left)], vec![(1, "one"), (9, "nine")]);
        assert_eq!(orphan, Err(CatalogError::OrphanExplanation(9)));
    }

    #[test]
    fn test_identical_bins_rejected() {
        let result = Catalog::new(
            vec![item(1, Side::Left)],
            vec![(1, "one")],
            [Side::Left, Side::Left],
            "ok",
        );
        assert_eq!(result, Err(CatalogError::IdenticalBins));
    }

    #[test]
    fn test_item_outside_bins_rejected() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Three {
            A,
            B,
            C,
        }
        let result = Catalog::new(
            vec![Item { id: 1, label: "x", category: Three::C }],
            vec![(1, "one")],
            [Three::A, Three::B],
            "ok",
        );
        assert_eq!(result, Err(CatalogError::UnknownCategory(1)));
    }
}
