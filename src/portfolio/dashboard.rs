//! Report views consumed by the output writers. Each report is built from a
//! slice of evaluated projects and a config; nothing here mutates input.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aggregation::{aggregate_portfolio, PortfolioSummary};
use super::distribution::{
    health_distribution, stage_funnel, status_distribution, HealthDistribution, StageShare,
    StatusDistribution,
};
use crate::classification::{
    badge_severity, classify_health, classify_status, index_badges, BadgeSeverity, HealthBucket,
    ProjectStatus,
};
use crate::config::{ClassificationThresholds, PortfolioConfig};
use crate::core::ProjectStage;
use crate::evm::{EvaluatedProject, EvmMetrics};
use crate::query::{attention_required, filter_by_search, top_by_budget, top_problem_projects};

/// One registry/table line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryRow<'a> {
    pub id: &'a str,
    pub code: &'a str,
    pub name: &'a str,
    pub stage: ProjectStage,
    pub pm: &'a str,
    pub bac: f64,
    pub eac: f64,
    pub metrics: EvmMetrics,
    pub health: HealthBucket,
    pub status: ProjectStatus,
    pub cpi_badge: BadgeSeverity,
    pub spi_badge: BadgeSeverity,
}

impl<'a> RegistryRow<'a> {
    pub fn from_evaluated(item: &EvaluatedProject<'a>, thresholds: &ClassificationThresholds) -> Self {
        let project = item.project;
        let (cpi_badge, spi_badge) = index_badges(&item.metrics, thresholds);
        Self {
            id: &project.id,
            code: &project.code,
            name: &project.name,
            stage: project.stage,
            pm: &project.pm,
            bac: project.bac,
            eac: project.eac,
            metrics: item.metrics,
            health: classify_health(&item.metrics, thresholds),
            status: classify_status(item, thresholds),
            cpi_badge,
            spi_badge,
        }
    }
}

fn rows<'a>(
    items: &[EvaluatedProject<'a>],
    thresholds: &ClassificationThresholds,
) -> Vec<RegistryRow<'a>> {
    items
        .iter()
        .map(|item| RegistryRow::from_evaluated(item, thresholds))
        .collect()
}

/// A titled list of rows: the registry, the problem list or the budget ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryReport<'a> {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub total_projects: usize,
    pub rows: Vec<RegistryRow<'a>>,
}

/// Full dashboard: KPIs, health matrix, ranked lists and funnel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub summary: PortfolioSummary,
    pub cpi_badge: BadgeSeverity,
    pub spi_badge: BadgeSeverity,
    pub health: HealthDistribution,
    pub status: StatusDistribution,
    /// Bubble chart points: x = SPI, y = CPI, size = BAC
    pub matrix: Vec<RegistryRow<'a>>,
    pub problem_projects: Vec<RegistryRow<'a>>,
    pub top_by_budget: Vec<RegistryRow<'a>>,
    pub attention_required: Vec<RegistryRow<'a>>,
    pub funnel: Vec<StageShare>,
}

pub fn build_dashboard<'a>(
    projects: &[EvaluatedProject<'a>],
    config: &PortfolioConfig,
) -> DashboardReport<'a> {
    let t = &config.classification;
    let top_n = config.query.top_n;
    let summary = aggregate_portfolio(projects, t);

    DashboardReport {
        generated_at: Utc::now(),
        cpi_badge: badge_severity(summary.portfolio_cpi, t),
        spi_badge: badge_severity(summary.portfolio_spi, t),
        summary,
        health: health_distribution(projects, t),
        status: status_distribution(projects, t),
        matrix: rows(projects, t),
        problem_projects: rows(&top_problem_projects(projects, top_n, t), t),
        top_by_budget: rows(&top_by_budget(projects, top_n), t),
        attention_required: rows(
            &attention_required(projects, config.query.attention_limit, t),
            t,
        ),
        funnel: stage_funnel(projects),
    }
}

/// Project registry, optionally narrowed by the search box
pub fn build_registry<'a>(
    projects: &[EvaluatedProject<'a>],
    query: Option<&str>,
    config: &PortfolioConfig,
) -> RegistryReport<'a> {
    let visible = filter_by_search(projects, query.unwrap_or(""));
    RegistryReport {
        title: "Project Registry".to_string(),
        generated_at: Utc::now(),
        query: query.map(str::to_string),
        total_projects: projects.len(),
        rows: rows(&visible, &config.classification),
    }
}

pub fn build_problem_report<'a>(
    projects: &[EvaluatedProject<'a>],
    n: usize,
    config: &PortfolioConfig,
) -> RegistryReport<'a> {
    let t = &config.classification;
    RegistryReport {
        title: format!("Problem Projects (worst {n} by CPI)"),
        generated_at: Utc::now(),
        query: None,
        total_projects: projects.len(),
        rows: rows(&top_problem_projects(projects, n, t), t),
    }
}

pub fn build_budget_report<'a>(
    projects: &[EvaluatedProject<'a>],
    n: usize,
    config: &PortfolioConfig,
) -> RegistryReport<'a> {
    RegistryReport {
        title: format!("Top {n} Projects by Budget"),
        generated_at: Utc::now(),
        query: None,
        total_projects: projects.len(),
        rows: rows(&top_by_budget(projects, n), &config.classification),
    }
}
