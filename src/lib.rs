//! Earned Value Management engine for a portfolio of capital projects.
//!
//! Records live in a [`store::ProjectStore`]; every view starts from a
//! snapshot, evaluates it with [`evm::evaluate_portfolio`] and derives
//! KPIs, classifications and ranked lists from the result without touching
//! the records themselves.

pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod evm;
pub mod io;
pub mod observability;
pub mod portfolio;
pub mod query;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    ComponentType, Project, ProjectCategory, ProjectComponent, ProjectId, ProjectStage,
    ProjectTask, ProjectType, RiskLevel, TaskStatus,
};

pub use crate::evm::{compute_evm, evaluate_portfolio, EvaluatedProject, EvmMetrics};

pub use crate::classification::{
    badge_severity, classify_health, classify_status, BadgeSeverity, HealthBucket, ProjectStatus,
};

pub use crate::portfolio::{
    aggregate_portfolio, build_dashboard, stage_funnel, DashboardReport, PortfolioSummary,
    ProjectDetail,
};

pub use crate::query::{attention_required, filter_by_search, top_by_budget, top_problem_projects};

pub use crate::config::{ClassificationThresholds, EvmPolicy, PortfolioConfig};
pub use crate::errors::{Error, Result};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::store::{InMemoryStore, ProjectStore};
pub use crate::validation::validate_project;
