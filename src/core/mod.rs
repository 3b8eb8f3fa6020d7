//! Project records and their classification enums

pub mod project;
pub mod types;

pub use project::{Project, ProjectComponent, ProjectId, ProjectTask};
pub use types::{
    ComponentType, ProjectCategory, ProjectStage, ProjectType, RiskLevel, TaskStatus,
};
