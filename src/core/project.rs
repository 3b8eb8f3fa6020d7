use serde::{Deserialize, Serialize};

use super::types::{
    ComponentType, ProjectCategory, ProjectStage, ProjectType, RiskLevel, TaskStatus,
};

/// Opaque project identifier, assigned by the store on creation
pub type ProjectId = String;

/// One tracked initiative in the portfolio.
///
/// Monetary fields (`bac`, `eac`, `pv`, `ev`, `ac`) share one currency unit
/// (millions). Performance indices are deliberately absent: they are derived
/// on read by [`crate::evm::compute_evm`], so a record can never carry a stale
/// CPI or SPI. JSON carrying `cpi`, `spi` or `costDeviation` still parses;
/// those keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    // Passport
    pub id: ProjectId,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub category: ProjectCategory,
    pub business_owner: String,
    pub pm: String,
    pub stage: ProjectStage,

    // Schedule (dates are opaque, never parsed)
    pub start_date_plan: String,
    pub start_date_fact: String,
    pub end_date_plan: String,
    pub end_date_forecast: String,
    pub is_critical_path: bool,
    /// Positive = late
    pub schedule_deviation_days: i64,

    // Cost
    pub bac: f64,
    pub eac: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_reason: Option<String>,

    // Physical progress, percent
    pub design_percent: f64,
    pub smr_plan: f64,
    pub smr_fact: f64,
    pub equipment_percent: f64,
    pub pnr_percent: f64,

    // EVM inputs
    pub pv: f64,
    pub ev: f64,
    pub ac: f64,

    // Risks and constraints
    pub risk_schedule: RiskLevel,
    pub risk_cost: RiskLevel,
    pub risk_contract: RiskLevel,
    pub open_issues_count: u32,
    pub change_requests_count: u32,

    pub components: Vec<ProjectComponent>,
    pub tasks: Vec<ProjectTask>,
}

impl Project {
    /// New record with the blank-form defaults and no id yet
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<ProjectId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_budget(mut self, bac: f64, eac: f64) -> Self {
        self.bac = bac;
        self.eac = eac;
        self
    }

    pub fn with_earned_value(mut self, pv: f64, ev: f64, ac: f64) -> Self {
        self.pv = pv;
        self.ev = ev;
        self.ac = ac;
        self
    }

    /// Schedule, cost and contract ratings on the 1 to 3 scale
    pub fn with_risks(mut self, schedule: u8, cost: u8, contract: u8) -> Self {
        self.risk_schedule = RiskLevel(schedule);
        self.risk_cost = RiskLevel(cost);
        self.risk_contract = RiskLevel(contract);
        self
    }

    pub fn with_stage(mut self, stage: ProjectStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_schedule_deviation(mut self, days: i64) -> Self {
        self.schedule_deviation_days = days;
        self
    }

    /// The three risk ratings in schedule, cost, contract order
    pub fn risks(&self) -> [RiskLevel; 3] {
        [self.risk_schedule, self.risk_cost, self.risk_contract]
    }

    pub fn high_risk_count(&self) -> usize {
        self.risks().iter().filter(|r| r.is_high()).count()
    }

    /// Counted towards the portfolio's critical risk KPI
    pub fn has_critical_risk(&self) -> bool {
        self.risk_schedule.is_high() || self.risk_cost.is_high()
    }
}

/// Sub-deliverable of a project (a foundation sector, a turbine, a design package)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectComponent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub progress: f64,
}

impl ProjectComponent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: ComponentType,
        progress: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type,
            progress,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectTask {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl ProjectTask {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: "General".to_string(),
            status,
            assignee: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_record_uses_form_defaults() {
        let project = Project::new("CAPEX-24-001", "Tank farm");
        assert_eq!(project.project_type, ProjectType::Capex);
        assert_eq!(project.category, ProjectCategory::Medium);
        assert_eq!(project.stage, ProjectStage::Idea);
        assert_eq!(project.risks(), [RiskLevel::LOW; 3]);
        assert!(project.id.is_empty());
    }

    #[test]
    fn critical_risk_ignores_contract_rating() {
        let contract_only = Project::new("A", "a").with_risks(1, 1, 3);
        assert!(!contract_only.has_critical_risk());
        assert_eq!(contract_only.high_risk_count(), 1);

        let cost = Project::new("B", "b").with_risks(1, 3, 1);
        assert!(cost.has_critical_risk());
    }

    #[test]
    fn stored_indices_in_json_are_ignored() {
        let json = r#"{
            "id": "7", "code": "PRJ-007", "name": "Flare system",
            "type": "HSE", "ev": 10.0, "ac": 20.0, "pv": 10.0,
            "cpi": 9.99, "spi": 9.99, "costDeviation": 123.0,
            "riskCost": 3,
            "tasks": [{"id": "t1", "title": "Permit", "category": "Legal", "status": "In Progress"}]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_type, ProjectType::Hse);
        assert_eq!(project.risk_cost, RiskLevel::HIGH);
        assert_eq!(project.tasks[0].status, TaskStatus::InProgress);

        let round_trip = serde_json::to_value(&project).unwrap();
        assert!(round_trip.get("cpi").is_none());
        assert_eq!(round_trip["riskCost"], 3);
    }
}
