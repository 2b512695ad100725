use std::collections::BTreeSet;

use super::itemset::{Item, Itemset};

/// Deduplicated pairwise unions of the previous level's itemsets whose
/// cardinality is exactly `target_size`.
///
/// Quadratic in the number of surviving itemsets per level; pruning keeps
/// that count small in typical sparse-item domains.
pub fn generate_candidates<I: Item>(
    previous: &[&Itemset<I>],
    target_size: usize,
) -> BTreeSet<Itemset<I>> {
    let mut candidates = BTreeSet::new();

    for i in 0..previous.len() {
        for j in (i + 1)..previous.len() {
            let merged = previous[i].union(previous[j]);
            if merged.len() == target_size {
                candidates.insert(merged);
            }
        }
    }

    candidates
}
