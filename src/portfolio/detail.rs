use serde::Serialize;

use crate::classification::{
    classify_health, classify_status, has_progress_lag, index_badges, risk_severity,
    BadgeSeverity, CostDirection, HealthBucket, ProjectStatus, RiskSeverity, ScheduleDirection,
};
use crate::config::ClassificationThresholds;
use crate::core::{ComponentType, Project, ProjectTask, TaskStatus};
use crate::evm::{EvaluatedProject, EvmMetrics};

/// Task counts per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskBoard {
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl TaskBoard {
    pub fn from_tasks(tasks: &[ProjectTask]) -> Self {
        tasks.iter().fold(Self::default(), |mut board, task| {
            match task.status {
                TaskStatus::Pending => board.pending += 1,
                TaskStatus::InProgress => board.in_progress += 1,
                TaskStatus::Done => board.done += 1,
            }
            board
        })
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.done
    }
}

/// Mean progress of the components of one type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentProgress {
    pub component_type: ComponentType,
    pub count: usize,
    pub mean_progress: f64,
}

/// Component progress grouped by type; types without components are omitted
pub fn component_progress(project: &Project) -> Vec<ComponentProgress> {
    ComponentType::ALL
        .iter()
        .filter_map(|&component_type| {
            let progress: Vec<f64> = project
                .components
                .iter()
                .filter(|c| c.component_type == component_type)
                .map(|c| c.progress)
                .collect();
            if progress.is_empty() {
                return None;
            }
            Some(ComponentProgress {
                component_type,
                count: progress.len(),
                mean_progress: progress.iter().sum::<f64>() / progress.len() as f64,
            })
        })
        .collect()
}

/// Everything the single-project view shows, derived in one place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail<'a> {
    pub project: &'a Project,
    pub metrics: EvmMetrics,
    pub health: HealthBucket,
    pub status: ProjectStatus,
    pub cpi_badge: BadgeSeverity,
    pub spi_badge: BadgeSeverity,
    pub cost_direction: CostDirection,
    pub schedule_direction: ScheduleDirection,
    pub progress_lag: bool,
    /// Schedule, cost, contract
    pub risk_cells: [RiskSeverity; 3],
    pub task_board: TaskBoard,
    pub components: Vec<ComponentProgress>,
}

impl<'a> ProjectDetail<'a> {
    pub fn from_evaluated(
        item: &EvaluatedProject<'a>,
        thresholds: &ClassificationThresholds,
    ) -> Self {
        let project = item.project;
        let (cpi_badge, spi_badge) = index_badges(&item.metrics, thresholds);

        Self {
            project,
            metrics: item.metrics,
            health: classify_health(&item.metrics, thresholds),
            status: classify_status(item, thresholds),
            cpi_badge,
            spi_badge,
            cost_direction: CostDirection::from_variance(item.metrics.variance_at_completion),
            schedule_direction: ScheduleDirection::from_deviation_days(
                project.schedule_deviation_days,
            ),
            progress_lag: has_progress_lag(project, thresholds),
            risk_cells: project.risks().map(risk_severity),
            task_board: TaskBoard::from_tasks(&project.tasks),
            components: component_progress(project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvmPolicy;
    use crate::core::ProjectComponent;

    fn sample() -> Project {
        let mut project = Project::new("PRJ-001", "Refinery upgrade")
            .with_budget(12500.0, 13200.0)
            .with_earned_value(5600.0, 4800.0, 5400.0)
            .with_risks(3, 2, 1)
            .with_schedule_deviation(47);
        project.smr_plan = 60.0;
        project.smr_fact = 45.0;
        project.components = vec![
            ProjectComponent::new("c1", "Foundation A", ComponentType::Construction, 80.0),
            ProjectComponent::new("c2", "Foundation B", ComponentType::Construction, 40.0),
            ProjectComponent::new("c3", "Turbine 1", ComponentType::Equipment, 100.0),
        ];
        project.tasks = vec![
            ProjectTask::new("t1", "Crane permit", TaskStatus::Done),
            ProjectTask::new("t2", "Pour slab", TaskStatus::InProgress),
            ProjectTask::new("t3", "Order valves", TaskStatus::Pending),
            ProjectTask::new("t4", "Survey", TaskStatus::Done),
        ];
        project
    }

    #[test]
    fn detail_derives_every_panel() {
        let project = sample();
        let item = EvaluatedProject::new(&project, &EvmPolicy::default());
        let detail = ProjectDetail::from_evaluated(&item, &ClassificationThresholds::default());

        assert_eq!(detail.health, HealthBucket::Critical);
        assert_eq!(detail.status, ProjectStatus::AtRisk);
        assert_eq!(detail.cpi_badge, BadgeSeverity::Bad);
        assert_eq!(detail.cost_direction, CostDirection::Over);
        assert_eq!(detail.schedule_direction, ScheduleDirection::Late);
        assert!(detail.progress_lag);
        assert_eq!(
            detail.risk_cells,
            [RiskSeverity::High, RiskSeverity::Medium, RiskSeverity::Low]
        );
        assert_eq!(
            detail.task_board,
            TaskBoard {
                pending: 1,
                in_progress: 1,
                done: 2
            }
        );
        assert_eq!(detail.task_board.total(), 4);
    }

    #[test]
    fn component_progress_groups_by_type() {
        let progress = component_progress(&sample());
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].component_type, ComponentType::Construction);
        assert_eq!(progress[0].count, 2);
        assert_eq!(progress[0].mean_progress, 60.0);
        assert_eq!(progress[1].component_type, ComponentType::Equipment);
    }
}
