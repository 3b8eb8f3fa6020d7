use serde::{Deserialize, Serialize};

use super::thresholds::{ClassificationThresholds, EvmPolicy, QueryConfig};
use crate::io::output::OutputFormat;

/// Root configuration structure, read from `.portfolio-evm.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioConfig {
    /// EVM calculation policy
    #[serde(default)]
    pub evm: EvmPolicy,

    /// Health, status and badge thresholds
    #[serde(default)]
    pub classification: ClassificationThresholds,

    /// Ranked list sizes
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Disable colors in terminal output
    #[serde(default)]
    pub plain: bool,
}
