use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ClassificationThresholds;
use crate::evm::EvmMetrics;

/// Per-project health bucket used for table badges and bubble colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthBucket {
    Critical, // CPI or SPI < 0.9
    Watch,    // Neither critical nor healthy
    Healthy,  // CPI and SPI > 1.0
}

impl HealthBucket {
    pub const ALL: [HealthBucket; 3] = [Self::Critical, Self::Watch, Self::Healthy];

    pub fn label(&self) -> &'static str {
        match self {
            HealthBucket::Critical => "Critical",
            HealthBucket::Watch => "Watch",
            HealthBucket::Healthy => "Healthy",
        }
    }

    /// Bubble fill used by the health matrix
    pub fn color_hex(&self) -> &'static str {
        match self {
            HealthBucket::Critical => "#ef4444",
            HealthBucket::Watch => "#3b82f6",
            HealthBucket::Healthy => "#22c55e",
        }
    }
}

impl fmt::Display for HealthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify by CPI/SPI. Critical takes precedence over healthy; NaN indices
/// fail every comparison and land in Watch.
pub fn classify_health(metrics: &EvmMetrics, thresholds: &ClassificationThresholds) -> HealthBucket {
    let (cpi, spi) = (metrics.cpi, metrics.spi);

    if cpi < thresholds.critical_index || spi < thresholds.critical_index {
        HealthBucket::Critical
    } else if cpi > thresholds.healthy_index && spi > thresholds.healthy_index {
        HealthBucket::Healthy
    } else {
        HealthBucket::Watch
    }
}
