//! Discrete classification of evaluated projects: health bucket, registry
//! status and display severities. Every classifier is total; input outside
//! the expected ranges falls through to the least alarming result.

mod health;
mod severity;
mod status;

pub use health::{classify_health, HealthBucket};
pub use severity::{
    badge_severity, has_progress_lag, index_badges, risk_severity, BadgeSeverity,
    CostDirection, RiskSeverity, ScheduleDirection,
};
pub use status::{classify_status, ProjectStatus};
