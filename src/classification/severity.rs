use serde::{Deserialize, Serialize};

use crate::config::ClassificationThresholds;
use crate::core::{Project, RiskLevel};
use crate::evm::EvmMetrics;

/// Coloring of a single CPI/SPI badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeSeverity {
    Bad,
    Neutral,
    Good,
}

/// Bad below `critical_index`, good above `badge_good_index`, neutral in
/// between (inclusive at both ends).
pub fn badge_severity(value: f64, thresholds: &ClassificationThresholds) -> BadgeSeverity {
    if value < thresholds.critical_index {
        BadgeSeverity::Bad
    } else if value > thresholds.badge_good_index {
        BadgeSeverity::Good
    } else {
        BadgeSeverity::Neutral
    }
}

/// Heat-map cell for one risk rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Unknown,
}

pub fn risk_severity(level: RiskLevel) -> RiskSeverity {
    match level.0 {
        1 => RiskSeverity::Low,
        2 => RiskSeverity::Medium,
        3 => RiskSeverity::High,
        _ => RiskSeverity::Unknown,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostDirection {
    Under,
    Over,
}

impl CostDirection {
    /// From variance at completion; breaking even counts as under budget
    pub fn from_variance(variance_at_completion: f64) -> Self {
        if variance_at_completion >= 0.0 {
            CostDirection::Under
        } else {
            CostDirection::Over
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleDirection {
    Late,
    Early,
}

impl ScheduleDirection {
    pub fn from_deviation_days(days: i64) -> Self {
        if days > 0 {
            ScheduleDirection::Late
        } else {
            ScheduleDirection::Early
        }
    }
}

/// Construction progress lagging plan by more than `progress_lag_points`.
/// Percentages outside 0..=100 never count as lag.
pub fn has_progress_lag(project: &Project, thresholds: &ClassificationThresholds) -> bool {
    let percent = 0.0..=100.0;
    percent.contains(&project.smr_plan)
        && percent.contains(&project.smr_fact)
        && project.smr_fact < project.smr_plan - thresholds.progress_lag_points
}

/// Severity pair for the CPI and SPI badges of one project
pub fn index_badges(
    metrics: &EvmMetrics,
    thresholds: &ClassificationThresholds,
) -> (BadgeSeverity, BadgeSeverity) {
    (
        badge_severity(metrics.cpi, thresholds),
        badge_severity(metrics.spi, thresholds),
    )
}
