use thiserror::Error;

/// Malformed constructor arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_support must be within (0, 1], got {value}")]
    MinSupportOutOfRange { value: f64 },

    #[error("min_confidence must be within (0, 1], got {value}")]
    MinConfidenceOutOfRange { value: f64 },
}

/// Errors raised by a mining run. All are synchronous and abort the call
/// before any rules are returned; the caller must fix the input and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AprioriError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no transactions provided")]
    EmptyInput,

    #[error("no frequent itemsets found")]
    NoFrequentItemsets,
}
