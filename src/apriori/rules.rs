use tracing::debug;

use super::combinations::for_each_combination;
use super::itemset::{Item, Itemset};
use super::storage::FrequentItemsets;

/// An association rule: when a transaction contains the antecedent, it
/// contains the consequent with the given confidence. Antecedent and
/// consequent are disjoint, non-empty, and their union is a frequent itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<I> {
    pub antecedent: Itemset<I>,
    pub consequent: Itemset<I>,
    pub confidence: f64,
}

/// Enumerate every antecedent/consequent split of every itemset of size >= 2
/// and keep the splits meeting the confidence threshold.
///
/// Rules come out level-major, itemset-major within a level, and in
/// combination order within an itemset. An antecedent missing from its own
/// level (possible only if downward closure were violated upstream) skips
/// the rule rather than failing the run.
pub fn derive_rules<I: Item>(
    itemsets: &FrequentItemsets<I>,
    min_confidence: f64,
) -> Vec<Rule<I>> {
    let mut rules = Vec::new();

    for level in itemsets.iter().filter(|level| level.itemset_size >= 2) {
        for (itemset, support) in level.iter() {
            for antecedent_size in 1..level.itemset_size {
                for_each_combination(itemset.items(), antecedent_size, &mut |combination| {
                    let antecedent = Itemset::new(combination.to_vec());
                    let antecedent_support = match itemsets.support(&antecedent) {
                        Some(found) => found,
                        None => return,
                    };

                    let confidence = support / antecedent_support;
                    if confidence >= min_confidence {
                        rules.push(Rule {
                            consequent: itemset.difference(&antecedent),
                            antecedent,
                            confidence,
                        });
                    }
                });
            }
        }
    }

    debug!(rules = rules.len(), "rule derivation finished");
    rules
}
