use std::collections::BTreeMap;

use super::itemset::{Item, Itemset};

/// Support table for itemsets of one size: itemset → fraction of
/// transactions containing it. Keys are ordered, so iteration is
/// deterministic for a given item ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel<I> {
    pub itemset_size: usize,
    supports: BTreeMap<Itemset<I>, f64>,
}

impl<I: Item> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            supports: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, itemset: Itemset<I>, support: f64) {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.supports.insert(itemset, support);
    }

    pub fn support(&self, itemset: &Itemset<I>) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset<I>> {
        self.supports.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<I>, f64)> {
        self.supports.iter().map(|(itemset, &support)| (itemset, support))
    }
}

/// Every support level discovered by one mining run, size 1 upward,
/// including the terminal empty level. All levels are retained through the
/// end of the run because rule derivation looks up antecedent supports at
/// every size.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemsets<I> {
    levels: Vec<FrequentLevel<I>>,
}

impl<I: Item> FrequentItemsets<I> {
    pub(crate) fn new() -> Self {
        Self { levels: Vec::new() }
    }

    pub(crate) fn push(&mut self, level: FrequentLevel<I>) {
        debug_assert_eq!(level.itemset_size, self.levels.len() + 1);
        self.levels.push(level);
    }

    /// The level holding itemsets of exactly `itemset_size` items.
    pub fn level(&self, itemset_size: usize) -> Option<&FrequentLevel<I>> {
        if itemset_size == 0 {
            return None;
        }
        self.levels.get(itemset_size - 1)
    }

    /// Highest itemset size for which a level exists (the terminal empty
    /// level counts).
    pub fn max_size(&self) -> usize {
        self.levels.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequentLevel<I>> {
        self.levels.iter()
    }

    /// Look up an itemset's support at its own size level.
    pub fn support(&self, itemset: &Itemset<I>) -> Option<f64> {
        self.level(itemset.len())
            .and_then(|level| level.support(itemset))
    }

    /// True when no level holds any itemset.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(FrequentLevel::is_empty)
    }
}
