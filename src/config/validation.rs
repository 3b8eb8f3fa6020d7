//! Configuration validation with error accumulation, so a user fixing a
//! config file sees every problem in a single run.

use super::core::PortfolioConfig;
use super::thresholds::{ClassificationThresholds, EvmPolicy, QueryConfig};
use crate::errors::{FieldError, Result};
use crate::validation::{combine_validations, from_field_errors, run_validation, FieldValidation};

/// Validate the entire config, accumulating ALL errors
pub fn validate_config(config: &PortfolioConfig) -> FieldValidation<()> {
    combine_validations(vec![
        validate_evm_policy(&config.evm),
        validate_classification(&config.classification),
        validate_query(&config.query),
    ])
}

/// [`validate_config`] with the fail-fast `Result` API
pub fn validate_config_result(config: &PortfolioConfig) -> Result<()> {
    run_validation(validate_config(config))
}

fn positive_index(field: &str, value: f64) -> Option<FieldError> {
    (!value.is_finite() || value <= 0.0)
        .then(|| FieldError::new(field, format!("must be a positive index, got {value}")))
}

fn validate_evm_policy(policy: &EvmPolicy) -> FieldValidation<()> {
    let value = policy.zero_denominator_index;
    from_field_errors(
        (!value.is_finite() || value < 0.0)
            .then(|| {
                FieldError::new(
                    "evm.zero_denominator_index",
                    format!("must be a finite non-negative index, got {value}"),
                )
            })
            .into_iter()
            .collect(),
    )
}

fn validate_classification(t: &ClassificationThresholds) -> FieldValidation<()> {
    let mut errors: Vec<FieldError> = [
        positive_index("classification.critical_index", t.critical_index),
        positive_index("classification.healthy_index", t.healthy_index),
        positive_index("classification.badge_good_index", t.badge_good_index),
        positive_index("classification.off_track_index", t.off_track_index),
    ]
    .into_iter()
    .flatten()
    .collect();

    if t.off_track_index > t.critical_index {
        errors.push(FieldError::new(
            "classification.off_track_index",
            format!(
                "must not exceed critical_index ({} > {})",
                t.off_track_index, t.critical_index
            ),
        ));
    }

    if t.critical_index > t.healthy_index {
        errors.push(FieldError::new(
            "classification.critical_index",
            format!(
                "must not exceed healthy_index ({} > {})",
                t.critical_index, t.healthy_index
            ),
        ));
    }

    if t.off_track_high_risks == 0 {
        errors.push(FieldError::new(
            "classification.off_track_high_risks",
            "must be at least 1",
        ));
    }

    if t.delay_threshold_days < 0 {
        errors.push(FieldError::new(
            "classification.delay_threshold_days",
            format!("must not be negative, got {}", t.delay_threshold_days),
        ));
    }

    if !(0.0..=100.0).contains(&t.progress_lag_points) {
        errors.push(FieldError::new(
            "classification.progress_lag_points",
            format!("must be between 0 and 100, got {}", t.progress_lag_points),
        ));
    }

    from_field_errors(errors)
}

fn validate_query(query: &QueryConfig) -> FieldValidation<()> {
    from_field_errors(
        (query.top_n == 0)
            .then(|| FieldError::new("query.top_n", "must be at least 1"))
            .into_iter()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&PortfolioConfig::default()).is_success());
    }

    #[test]
    fn inverted_bands_are_all_reported() {
        let mut config = PortfolioConfig::default();
        config.classification.off_track_index = 0.95;
        config.classification.critical_index = 1.2;
        config.classification.off_track_high_risks = 0;
        config.query.top_n = 0;

        let err = validate_config_result(&config).unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "classification.critical_index",
                "classification.off_track_high_risks",
                "query.top_n",
            ]
        );
    }

    #[test]
    fn negative_zero_denominator_index_rejected() {
        let mut config = PortfolioConfig::default();
        config.evm.zero_denominator_index = -1.0;
        assert!(validate_config(&config).is_failure());

        config.evm.zero_denominator_index = 0.0;
        assert!(validate_config(&config).is_success());
    }
}
