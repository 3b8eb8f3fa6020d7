use crate::classification::{classify_status, ProjectStatus};
use crate::config::ClassificationThresholds;
use crate::evm::EvaluatedProject;

/// Whether a project belongs on the problem list (pure).
fn is_problem(item: &EvaluatedProject<'_>, thresholds: &ClassificationThresholds) -> bool {
    item.cpi() < thresholds.critical_index
        || item.spi() < thresholds.critical_index
        || item.project.risk_cost.is_high()
}

/// Worst-first problem list: projects with a critical CPI or SPI or a high
/// cost risk, ordered by ascending CPI, truncated to `n`.
///
/// The sort is stable, so projects with equal CPI keep their collection order.
pub fn top_problem_projects<'a>(
    projects: &[EvaluatedProject<'a>],
    n: usize,
    thresholds: &ClassificationThresholds,
) -> Vec<EvaluatedProject<'a>> {
    let mut problems: Vec<EvaluatedProject<'a>> = projects
        .iter()
        .filter(|item| is_problem(item, thresholds))
        .copied()
        .collect();
    problems.sort_by(|a, b| a.cpi().total_cmp(&b.cpi()));
    problems.truncate(n);
    problems
}

/// Largest budgets first, truncated to `n`; equal budgets keep collection order.
pub fn top_by_budget<'a>(projects: &[EvaluatedProject<'a>], n: usize) -> Vec<EvaluatedProject<'a>> {
    let mut ranked = projects.to_vec();
    ranked.sort_by(|a, b| b.project.bac.total_cmp(&a.project.bac));
    ranked.truncate(n);
    ranked
}

/// First `n` off-track projects in collection order, for the attention panel
pub fn attention_required<'a>(
    projects: &[EvaluatedProject<'a>],
    n: usize,
    thresholds: &ClassificationThresholds,
) -> Vec<EvaluatedProject<'a>> {
    projects
        .iter()
        .filter(|item| classify_status(item, thresholds) == ProjectStatus::OffTrack)
        .take(n)
        .copied()
        .collect()
}
