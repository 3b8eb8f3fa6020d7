use serde::Serialize;

use crate::classification::{classify_status, ProjectStatus};
use crate::config::ClassificationThresholds;
use crate::evm::{performance_index, EvaluatedProject};

/// Portfolio-level KPIs.
///
/// `portfolio_cpi` and `portfolio_spi` are aggregated differently on
/// purpose: CPI is the ratio of summed EV to summed AC (so large projects
/// weigh more), SPI is the plain mean of per-project SPIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub project_count: usize,
    pub total_bac: f64,
    pub total_eac: f64,
    pub total_ev: f64,
    pub total_ac: f64,
    /// Σ EV / Σ AC, 0 when nothing has been spent
    pub portfolio_cpi: f64,
    /// Mean of per-project SPI, 0 for an empty portfolio
    pub portfolio_spi: f64,
    /// Projects with a high schedule or cost risk rating
    pub critical_risk_count: usize,
    /// Projects slipping beyond the delay threshold
    pub delayed_count: usize,
    pub off_track_count: usize,
}

impl PortfolioSummary {
    pub fn empty() -> Self {
        Self {
            project_count: 0,
            total_bac: 0.0,
            total_eac: 0.0,
            total_ev: 0.0,
            total_ac: 0.0,
            portfolio_cpi: 0.0,
            portfolio_spi: 0.0,
            critical_risk_count: 0,
            delayed_count: 0,
            off_track_count: 0,
        }
    }
}

/// Mean of `values`, 0 when there are none
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Reduce evaluated projects to portfolio KPIs. Never fails and never
/// produces NaN from an empty input: every ratio is guarded.
pub fn aggregate_portfolio(
    projects: &[EvaluatedProject<'_>],
    thresholds: &ClassificationThresholds,
) -> PortfolioSummary {
    if projects.is_empty() {
        return PortfolioSummary::empty();
    }

    let total_ev: f64 = projects.iter().map(|p| p.project.ev).sum();
    let total_ac: f64 = projects.iter().map(|p| p.project.ac).sum();

    PortfolioSummary {
        project_count: projects.len(),
        total_bac: projects.iter().map(|p| p.project.bac).sum(),
        total_eac: projects.iter().map(|p| p.project.eac).sum(),
        total_ev,
        total_ac,
        portfolio_cpi: performance_index(total_ev, total_ac, 0.0),
        portfolio_spi: mean(projects.iter().map(|p| p.spi())),
        critical_risk_count: projects
            .iter()
            .filter(|p| p.project.has_critical_risk())
            .count(),
        delayed_count: projects
            .iter()
            .filter(|p| p.project.schedule_deviation_days > thresholds.delay_threshold_days)
            .count(),
        off_track_count: projects
            .iter()
            .filter(|p| classify_status(p, thresholds) == ProjectStatus::OffTrack)
            .count(),
    }
}
