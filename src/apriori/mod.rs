pub mod candidates;
pub mod combinations;
pub mod error;
pub mod itemset;
pub mod miner;
pub mod rules;
pub mod storage;

pub use error::{AprioriError, ConfigError};
pub use itemset::{Item, Itemset};
pub use miner::{Apriori, MiningResult};
pub use rules::Rule;
pub use storage::{FrequentItemsets, FrequentLevel};
