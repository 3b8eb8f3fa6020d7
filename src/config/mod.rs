//! Configuration: thresholds, EVM policy and output defaults, read from
//! `.portfolio-evm.toml`.

mod core;
mod loader;
mod thresholds;
pub mod validation;

pub use core::{OutputConfig, PortfolioConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{
    ClassificationThresholds, EvmPolicy, QueryConfig, BADGE_GOOD_THRESHOLD,
    CRITICAL_INDEX_THRESHOLD, DEFAULT_ATTENTION_LIMIT, DEFAULT_TOP_N, DELAY_THRESHOLD_DAYS,
    HEALTHY_INDEX_THRESHOLD, OFF_TRACK_HIGH_RISK_COUNT, OFF_TRACK_INDEX_THRESHOLD,
    PROGRESS_LAG_POINTS, ZERO_DENOMINATOR_INDEX,
};

/// Contents written by `portfolio-evm init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# portfolio-evm configuration

[evm]
# CPI/SPI reported when actual cost or planned value is zero
zero_denominator_index = 1.0

[classification]
critical_index = 0.9
healthy_index = 1.0
badge_good_index = 1.05
off_track_index = 0.8
off_track_high_risks = 2
delay_threshold_days = 10
progress_lag_points = 10.0

[query]
top_n = 5
attention_limit = 3

[output]
default_format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_matches_built_in_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed.evm, EvmPolicy::default());
        assert_eq!(parsed.classification, ClassificationThresholds::default());
        assert_eq!(parsed.query, QueryConfig::default());
        assert_eq!(parsed.query.top_n, DEFAULT_TOP_N);
        assert_eq!(parsed.query.attention_limit, DEFAULT_ATTENTION_LIMIT);
    }
}
