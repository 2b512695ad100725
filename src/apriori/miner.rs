use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use super::candidates::generate_candidates;
use super::error::{AprioriError, ConfigError};
use super::itemset::{Item, Itemset};
use super::rules::{derive_rules, Rule};
use super::storage::{FrequentItemsets, FrequentLevel};

/// Level-wise Apriori miner over an in-memory transaction list.
///
/// A call to [`find_association_rules`](Apriori::find_association_rules)
/// runs to completion and returns an immutable [`MiningResult`]; the miner
/// itself is never mutated, so separate instances (or repeated calls on one
/// instance) are safe to run concurrently.
#[derive(Debug)]
pub struct Apriori<I> {
    transactions: Vec<Itemset<I>>,
    min_support: f64,
    min_confidence: f64,
}

/// Immutable outcome of one mining run: every support level discovered
/// (including the terminal empty one) and the rules derived from them.
#[derive(Debug, Clone)]
pub struct MiningResult<I> {
    pub itemsets: FrequentItemsets<I>,
    pub rules: Vec<Rule<I>>,
}

impl<I: Item> Apriori<I> {
    /// Transactions come in as sets, so malformed container shapes are
    /// unrepresentable; only the thresholds need validating. An empty
    /// transaction list is accepted here and rejected at mining time.
    pub fn new(
        transactions: Vec<HashSet<I>>,
        min_support: f64,
        min_confidence: f64,
    ) -> Result<Self, AprioriError> {
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(ConfigError::MinSupportOutOfRange { value: min_support }.into());
        }
        if !(min_confidence > 0.0 && min_confidence <= 1.0) {
            return Err(ConfigError::MinConfidenceOutOfRange {
                value: min_confidence,
            }
            .into());
        }

        Ok(Self {
            transactions: transactions.into_iter().map(Itemset::from).collect(),
            min_support,
            min_confidence,
        })
    }

    /// Run the full pipeline: seed level 1, expand level-wise until a level
    /// comes out empty, then derive rules from every level of size >= 2.
    pub fn find_association_rules(&self) -> Result<MiningResult<I>, AprioriError> {
        if self.transactions.is_empty() {
            return Err(AprioriError::EmptyInput);
        }

        let itemsets = self.frequent_itemsets();
        if itemsets.is_empty() {
            // Only reachable when every transaction is the empty set.
            return Err(AprioriError::NoFrequentItemsets);
        }

        let rules = derive_rules(&itemsets, self.min_confidence);
        Ok(MiningResult { itemsets, rules })
    }

    fn frequent_itemsets(&self) -> FrequentItemsets<I> {
        let mut itemsets = FrequentItemsets::new();
        itemsets.push(self.seed_level());

        let mut size = 2;
        while !itemsets.level(size - 1).map_or(true, FrequentLevel::is_empty) {
            let candidates = {
                let previous: Vec<&Itemset<I>> = itemsets
                    .level(size - 1)
                    .map(|level| level.itemsets().collect())
                    .unwrap_or_default();
                generate_candidates(&previous, size)
            };
            let candidate_count = candidates.len();

            let mut level = FrequentLevel::new(size);
            for candidate in candidates {
                let support = self.support(&candidate);
                if support >= self.min_support {
                    level.insert(candidate, support);
                }
            }

            debug!(
                size,
                candidates = candidate_count,
                frequent = level.len(),
                "level pass finished"
            );
            itemsets.push(level);
            size += 1;
        }

        itemsets
    }

    /// Level 1 holds a singleton for every item observed anywhere in the
    /// input, each with its support. No threshold is applied at this level;
    /// infrequent singletons are kept and only filtered out of level 2
    /// onwards by the support check.
    fn seed_level(&self) -> FrequentLevel<I> {
        let items: BTreeSet<&I> = self
            .transactions
            .iter()
            .flat_map(|transaction| transaction.iter())
            .collect();

        let mut level = FrequentLevel::new(1);
        for item in items {
            let singleton = Itemset::singleton(item.clone());
            let support = self.support(&singleton);
            level.insert(singleton, support);
        }
        level
    }

    /// Fraction of transactions containing `itemset`. Linear scan per call;
    /// callers guarantee the transaction list is non-empty.
    fn support(&self, itemset: &Itemset<I>) -> f64 {
        let count = self
            .transactions
            .iter()
            .filter(|transaction| itemset.is_subset_of(transaction))
            .count();
        count as f64 / self.transactions.len() as f64
    }
}
