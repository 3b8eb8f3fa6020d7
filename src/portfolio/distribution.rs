use serde::Serialize;

use crate::classification::{classify_health, classify_status, HealthBucket, ProjectStatus};
use crate::config::ClassificationThresholds;
use crate::core::ProjectStage;
use crate::evm::EvaluatedProject;

/// One bar of the stage funnel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageShare {
    pub stage: ProjectStage,
    pub count: usize,
    /// Share of the whole portfolio, 0–100
    pub percent: f64,
}

/// Project count and share per stage, in funnel order. Every stage is
/// present even when empty.
pub fn stage_funnel(projects: &[EvaluatedProject<'_>]) -> Vec<StageShare> {
    let total = projects.len();
    ProjectStage::FUNNEL
        .iter()
        .map(|&stage| {
            let count = projects.iter().filter(|p| p.project.stage == stage).count();
            let percent = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            StageShare {
                stage,
                count,
                percent,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HealthDistribution {
    pub critical: usize,
    pub watch: usize,
    pub healthy: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusDistribution {
    pub on_track: usize,
    pub at_risk: usize,
    pub off_track: usize,
}

pub fn health_distribution(
    projects: &[EvaluatedProject<'_>],
    thresholds: &ClassificationThresholds,
) -> HealthDistribution {
    projects
        .iter()
        .fold(HealthDistribution::default(), |mut dist, p| {
            match classify_health(&p.metrics, thresholds) {
                HealthBucket::Critical => dist.critical += 1,
                HealthBucket::Watch => dist.watch += 1,
                HealthBucket::Healthy => dist.healthy += 1,
            }
            dist
        })
}

pub fn status_distribution(
    projects: &[EvaluatedProject<'_>],
    thresholds: &ClassificationThresholds,
) -> StatusDistribution {
    projects
        .iter()
        .fold(StatusDistribution::default(), |mut dist, p| {
            match classify_status(p, thresholds) {
                ProjectStatus::OnTrack => dist.on_track += 1,
                ProjectStatus::AtRisk => dist.at_risk += 1,
                ProjectStatus::OffTrack => dist.off_track += 1,
            }
            dist
        })
}
