pub mod apriori;

pub use apriori::{
    Apriori, AprioriError, ConfigError, FrequentItemsets, FrequentLevel, Item, Itemset,
    MiningResult, Rule,
};

#[cfg(feature = "python")]
mod python {
    use std::collections::HashSet;

    use pyo3::exceptions::PyValueError;
    use pyo3::{pymodule, types::PyModule, Bound, PyResult};

    use crate::apriori::Apriori;

    #[pymodule]
    fn tiny_apriori(m: &Bound<'_, PyModule>) -> PyResult<()> {
        #[pyfn(m)]
        #[pyo3(name = "find_association_rules")]
        fn find_association_rules_py(
            transactions: Vec<HashSet<String>>,
            min_support: f64,
            min_confidence: f64,
        ) -> PyResult<Vec<(HashSet<String>, HashSet<String>, f64)>> {
            let miner = Apriori::new(transactions, min_support, min_confidence)
                .map_err(|e| PyValueError::new_err(e.to_string()))?;
            let result = miner
                .find_association_rules()
                .map_err(|e| PyValueError::new_err(e.to_string()))?;

            Ok(result
                .rules
                .into_iter()
                .map(|rule| {
                    (
                        rule.antecedent.iter().cloned().collect(),
                        rule.consequent.iter().cloned().collect(),
                        rule.confidence,
                    )
                })
                .collect())
        }

        Ok(())
    }
}
