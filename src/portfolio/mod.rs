//! Portfolio-level views: aggregated KPIs, distributions, per-project
//! drill-down and the report structures handed to output writers.

pub mod aggregation;
pub mod dashboard;
pub mod detail;
pub mod distribution;

pub use aggregation::{aggregate_portfolio, PortfolioSummary};
pub use dashboard::{
    build_budget_report, build_dashboard, build_problem_report, build_registry, DashboardReport,
    RegistryReport, RegistryRow,
};
pub use detail::{component_progress, ComponentProgress, ProjectDetail, TaskBoard};
pub use distribution::{
    health_distribution, stage_funnel, status_distribution, HealthDistribution, StageShare,
    StatusDistribution,
};
