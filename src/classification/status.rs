use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ClassificationThresholds;
use crate::evm::EvaluatedProject;

/// Three-level registry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Off Track")]
    OffTrack,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::OnTrack, Self::AtRisk, Self::OffTrack];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::OnTrack => "On Track",
            ProjectStatus::AtRisk => "At Risk",
            ProjectStatus::OffTrack => "Off Track",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_off_track(item: &EvaluatedProject<'_>, t: &ClassificationThresholds) -> bool {
    item.cpi() < t.off_track_index
        || item.spi() < t.off_track_index
        || item.project.high_risk_count() >= t.off_track_high_risks
}

fn is_at_risk(item: &EvaluatedProject<'_>, t: &ClassificationThresholds) -> bool {
    item.cpi() < t.critical_index
        || item.spi() < t.critical_index
        || item.project.high_risk_count() > 0
        || item.project.schedule_deviation_days > t.delay_threshold_days
}

/// Derive the registry status from indices, risk ratings and slippage.
///
/// Off Track: either index below `off_track_index`, or at least
/// `off_track_high_risks` high ratings.
/// At Risk: either index below `critical_index`, any high rating, or
/// slippage beyond `delay_threshold_days`.
/// Anything else, including unrecognized risk ratings and NaN indices, is On Track.
pub fn classify_status(
    item: &EvaluatedProject<'_>,
    thresholds: &ClassificationThresholds,
) -> ProjectStatus {
    if is_off_track(item, thresholds) {
        ProjectStatus::OffTrack
    } else if is_at_risk(item, thresholds) {
        ProjectStatus::AtRisk
    } else {
        ProjectStatus::OnTrack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvmPolicy;
    use crate::core::Project;

    fn status(project: &Project) -> ProjectStatus {
        let item = EvaluatedProject::new(project, &EvmPolicy::default());
        classify_status(&item, &ClassificationThresholds::default())
    }

    fn on_plan() -> Project {
        Project::new("P", "p").with_earned_value(100.0, 100.0, 100.0)
    }

    #[test]
    fn on_plan_project_is_on_track() {
        assert_eq!(status(&on_plan()), ProjectStatus::OnTrack);
    }

    #[test]
    fn moderate_overrun_is_at_risk() {
        let project = on_plan().with_earned_value(100.0, 85.0, 100.0);
        assert_eq!(status(&project), ProjectStatus::AtRisk);
    }

    #[test]
    fn deep_overrun_is_off_track() {
        let project = on_plan().with_earned_value(100.0, 100.0, 130.0);
        assert_eq!(status(&project), ProjectStatus::OffTrack);
    }

    #[test]
    fn single_high_risk_is_at_risk_two_are_off_track() {
        assert_eq!(status(&on_plan().with_risks(3, 1, 1)), ProjectStatus::AtRisk);
        assert_eq!(status(&on_plan().with_risks(3, 1, 3)), ProjectStatus::OffTrack);
    }

    #[test]
    fn slippage_beyond_threshold_is_at_risk() {
        assert_eq!(
            status(&on_plan().with_schedule_deviation(10)),
            ProjectStatus::OnTrack
        );
        assert_eq!(
            status(&on_plan().with_schedule_deviation(11)),
            ProjectStatus::AtRisk
        );
    }

    #[test]
    fn unknown_risk_ratings_fall_through_to_on_track() {
        assert_eq!(status(&on_plan().with_risks(9, 0, 255)), ProjectStatus::OnTrack);
    }

    #[test]
    fn negative_earned_value_falls_through_to_on_track() {
        let project = on_plan().with_earned_value(100.0, -50.0, 100.0);
        let item = EvaluatedProject::new(&project, &EvmPolicy::default());
        let thresholds = ClassificationThresholds::default();
        assert_eq!(classify_status(&item, &thresholds), ProjectStatus::OnTrack);
        assert_eq!(
            crate::classification::classify_health(&item.metrics, &thresholds),
            crate::classification::HealthBucket::Watch
        );
    }

    #[test]
    fn wire_labels_keep_spaces() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::OffTrack).unwrap(),
            "\"Off Track\""
        );
    }
}
