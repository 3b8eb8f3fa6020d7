//! Classification enums shared by project records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Funding line a project is booked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "CAPEX")]
    Capex,
    #[serde(rename = "OPEX")]
    Opex,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HSE")]
    Hse,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [Self::Capex, Self::Opex, Self::It, Self::Hse];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Capex => "CAPEX",
            ProjectType::Opex => "OPEX",
            ProjectType::It => "IT",
            ProjectType::Hse => "HSE",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Size class of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectCategory {
    Large,
    #[default]
    Medium,
    Small,
}

impl ProjectCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectCategory::Large => "Large",
            ProjectCategory::Medium => "Medium",
            ProjectCategory::Small => "Small",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lifecycle stage. Declaration order is the funnel order, so `Ord`
/// compares stages by how far a project has progressed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ProjectStage {
    #[default]
    Idea,
    Feasibility,
    Planning,
    Execution,
    Commissioning,
    Closed,
}

impl ProjectStage {
    /// All stages in funnel order
    pub const FUNNEL: [ProjectStage; 6] = [
        Self::Idea,
        Self::Feasibility,
        Self::Planning,
        Self::Execution,
        Self::Commissioning,
        Self::Closed,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStage::Idea => "Idea",
            ProjectStage::Feasibility => "Feasibility",
            ProjectStage::Planning => "Planning",
            ProjectStage::Execution => "Execution",
            ProjectStage::Commissioning => "Commissioning",
            ProjectStage::Closed => "Closed",
        }
    }
}

impl fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Risk rating on the 1 (low) to 3 (high) scale.
///
/// Stored as a raw byte rather than an enum so that records arriving with
/// an out-of-range rating can still be evaluated. Only [`RiskLevel::HIGH`]
/// ever counts as high risk; anything unrecognized is treated as benign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskLevel(pub u8);

impl RiskLevel {
    pub const LOW: RiskLevel = RiskLevel(1);
    pub const MEDIUM: RiskLevel = RiskLevel(2);
    pub const HIGH: RiskLevel = RiskLevel(3);

    pub fn is_high(&self) -> bool {
        *self == Self::HIGH
    }

    /// Whether the rating is one of the three defined levels
    pub fn is_known(&self) -> bool {
        (1..=3).contains(&self.0)
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Low",
            2 => "Medium",
            3 => "High",
            _ => "Unknown",
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::LOW
    }
}

impl From<u8> for RiskLevel {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.0)
    }
}

/// Kind of sub-deliverable tracked under a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ComponentType {
    #[default]
    Construction,
    Equipment,
    Design,
}

impl ComponentType {
    pub const ALL: [ComponentType; 3] = [Self::Construction, Self::Equipment, Self::Design];

    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentType::Construction => "Construction",
            ComponentType::Equipment => "Equipment",
            ComponentType::Design => "Design",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
