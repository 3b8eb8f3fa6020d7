use serde::{Deserialize, Serialize};

/// An index below this is a critical deviation (red)
pub const CRITICAL_INDEX_THRESHOLD: f64 = 0.9;
/// Both indices above this make a project healthy (green)
pub const HEALTHY_INDEX_THRESHOLD: f64 = 1.0;
/// A badge turns green only above this. The band is asymmetric on purpose:
/// 0.9 to 1.05 inclusive stays neutral.
pub const BADGE_GOOD_THRESHOLD: f64 = 1.05;
/// An index below this takes a project off track
pub const OFF_TRACK_INDEX_THRESHOLD: f64 = 0.8;
/// This many high ratings across schedule/cost/contract take a project off track
pub const OFF_TRACK_HIGH_RISK_COUNT: usize = 2;
/// Slippage beyond this many days counts a project as delayed
pub const DELAY_THRESHOLD_DAYS: i64 = 10;
/// Construction lagging plan by more than this many points is flagged
pub const PROGRESS_LAG_POINTS: f64 = 10.0;

/// Value reported for CPI/SPI when the denominator (AC or PV) is zero
pub const ZERO_DENOMINATOR_INDEX: f64 = 1.0;

/// Default length of the dashboard's ranked lists
pub const DEFAULT_TOP_N: usize = 5;
/// Default number of off-track projects in the attention panel
pub const DEFAULT_ATTENTION_LIMIT: usize = 3;

/// Thresholds shared by the health, status and badge classifiers and by the
/// portfolio KPIs that count delayed or off-track projects.
///
/// Every comparison made against these values is strict.
///
/// ```toml
/// [classification]
/// critical_index = 0.9
/// healthy_index = 1.0
/// badge_good_index = 1.05
/// off_track_index = 0.8
/// off_track_high_risks = 2
/// delay_threshold_days = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    #[serde(default = "default_critical_index")]
    pub critical_index: f64,

    #[serde(default = "default_healthy_index")]
    pub healthy_index: f64,

    #[serde(default = "default_badge_good_index")]
    pub badge_good_index: f64,

    #[serde(default = "default_off_track_index")]
    pub off_track_index: f64,

    #[serde(default = "default_off_track_high_risks")]
    pub off_track_high_risks: usize,

    #[serde(default = "default_delay_threshold_days")]
    pub delay_threshold_days: i64,

    #[serde(default = "default_progress_lag_points")]
    pub progress_lag_points: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            critical_index: default_critical_index(),
            healthy_index: default_healthy_index(),
            badge_good_index: default_badge_good_index(),
            off_track_index: default_off_track_index(),
            off_track_high_risks: default_off_track_high_risks(),
            delay_threshold_days: default_delay_threshold_days(),
            progress_lag_points: default_progress_lag_points(),
        }
    }
}

fn default_critical_index() -> f64 {
    CRITICAL_INDEX_THRESHOLD
}
fn default_healthy_index() -> f64 {
    HEALTHY_INDEX_THRESHOLD
}
fn default_badge_good_index() -> f64 {
    BADGE_GOOD_THRESHOLD
}
fn default_off_track_index() -> f64 {
    OFF_TRACK_INDEX_THRESHOLD
}
fn default_off_track_high_risks() -> usize {
    OFF_TRACK_HIGH_RISK_COUNT
}
fn default_delay_threshold_days() -> i64 {
    DELAY_THRESHOLD_DAYS
}
fn default_progress_lag_points() -> f64 {
    PROGRESS_LAG_POINTS
}

/// How the EVM calculator treats degenerate input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvmPolicy {
    /// Index reported when AC (for CPI) or PV (for SPI) is not positive.
    /// 1.0 reads as "on plan" so unstarted projects raise no alarm.
    #[serde(default = "default_zero_denominator_index")]
    pub zero_denominator_index: f64,
}

impl Default for EvmPolicy {
    fn default() -> Self {
        Self {
            zero_denominator_index: default_zero_denominator_index(),
        }
    }
}

fn default_zero_denominator_index() -> f64 {
    ZERO_DENOMINATOR_INDEX
}

/// Sizes of the dashboard's ranked lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// How many off-track projects the attention panel lists
    #[serde(default = "default_attention_limit")]
    pub attention_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            attention_limit: default_attention_limit(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
fn default_attention_limit() -> usize {
    DEFAULT_ATTENTION_LIMIT
}
