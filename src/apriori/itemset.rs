use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Anything usable as an item: cloneable, hashable at the set-typed input
/// boundary, ordered so itemsets have a canonical representation.
pub trait Item: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> Item for T {}

/// An unordered set of items stored in canonical form: sorted, deduplicated.
/// Two itemsets holding the same items are equal and hash identically no
/// matter the order they were assembled in, so an `Itemset` works as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<I>(Vec<I>);

impl<I: Item> Itemset<I> {
    pub fn new(mut items: Vec<I>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: I) -> Self {
        Self(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in sorted order.
    pub fn items(&self) -> &[I] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.0.iter()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.0.binary_search(item).is_ok()
    }

    /// Merge of two canonical itemsets, itself canonical.
    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        let mut merged = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => {
                    merged.push(a[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(b[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    merged.push(a[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend(a[i..].iter().cloned());
        merged.extend(b[j..].iter().cloned());

        Self(merged)
    }

    /// Items of `self` not present in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    /// Subset test over the sorted representations, O(|self| + |other|).
    pub fn is_subset_of(&self, other: &Self) -> bool {
        let mut j = 0;
        'outer: for item in &self.0 {
            while j < other.0.len() {
                match other.0[j].cmp(item) {
                    Ordering::Less => j += 1,
                    Ordering::Equal => {
                        j += 1;
                        continue 'outer;
                    }
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }
}

impl<I: Item> From<HashSet<I>> for Itemset<I> {
    fn from(items: HashSet<I>) -> Self {
        Self::new(items.into_iter().collect())
    }
}
