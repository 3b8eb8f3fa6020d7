//! Demo portfolio served by the CLI

use super::InMemoryStore;
use crate::core::{
    ComponentType, Project, ProjectCategory, ProjectComponent, ProjectStage, ProjectTask,
    ProjectType, TaskStatus,
};
use crate::errors::Result;

#[allow(clippy::too_many_arguments)]
fn passport(
    id: &str,
    code: &str,
    name: &str,
    project_type: ProjectType,
    category: ProjectCategory,
    stage: ProjectStage,
    owner: &str,
    pm: &str,
) -> Project {
    Project {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        project_type,
        category,
        stage,
        business_owner: owner.to_string(),
        pm: pm.to_string(),
        ..Project::default()
    }
}

fn dates(mut project: Project, plan: (&str, &str), fact: &str, forecast: &str) -> Project {
    project.start_date_plan = plan.0.to_string();
    project.end_date_plan = plan.1.to_string();
    project.start_date_fact = fact.to_string();
    project.end_date_forecast = forecast.to_string();
    project
}

fn task(id: &str, title: &str, category: &str, status: TaskStatus, assignee: &str) -> ProjectTask {
    ProjectTask {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        status,
        assignee: Some(assignee.to_string()),
    }
}

fn refinery_upgrade() -> Project {
    let mut p = passport(
        "1",
        "PRJ-001",
        "Refinery Modernization Phase 2",
        ProjectType::Capex,
        ProjectCategory::Large,
        ProjectStage::Execution,
        "Upstream Department",
        "A. Ivanov",
    );
    p = dates(p, ("2023-01-10", "2024-12-30"), "2023-01-15", "2025-02-15")
        .with_budget(12500.0, 13200.0)
        .with_earned_value(5600.0, 4800.0, 5400.0)
        .with_risks(3, 2, 1)
        .with_schedule_deviation(47);
    p.is_critical_path = true;
    p.cost_reason = Some("Steel price escalation on the second lot".to_string());
    p.design_percent = 100.0;
    p.smr_plan = 60.0;
    p.smr_fact = 45.0;
    p.equipment_percent = 80.0;
    p.pnr_percent = 5.0;
    p.open_issues_count = 12;
    p.change_requests_count = 4;
    p.components = vec![
        ProjectComponent::new("c-101", "Foundation Sector A", ComponentType::Construction, 90.0),
        ProjectComponent::new("c-102", "Foundation Sector B", ComponentType::Construction, 35.0),
        ProjectComponent::new("c-103", "Hydrocracker Reactor", ComponentType::Equipment, 80.0),
        ProjectComponent::new("c-104", "Detailed Design Package", ComponentType::Design, 100.0),
    ];
    p.tasks = vec![
        task("t-101", "Approve crane lift plan", "Engineering", TaskStatus::Done, "S. Omarov"),
        task("t-102", "Expedite reactor shipment", "Procurement", TaskStatus::InProgress, "L. Kim"),
        task("t-103", "Recover sector B backlog", "Construction", TaskStatus::Pending, "A. Ivanov"),
    ];
    p
}

fn erp_rollout() -> Project {
    let mut p = passport(
        "2",
        "PRJ-002",
        "ERP System Rollout",
        ProjectType::It,
        ProjectCategory::Medium,
        ProjectStage::Planning,
        "IT Department",
        "B. Smagulov",
    );
    p = dates(p, ("2023-06-01", "2024-06-01"), "2023-06-01", "2024-06-15")
        .with_budget(4500.0, 4600.0)
        .with_earned_value(2150.0, 2200.0, 2100.0)
        .with_risks(1, 1, 2)
        .with_schedule_deviation(14);
    p.design_percent = 70.0;
    p.open_issues_count = 3;
    p.change_requests_count = 1;
    p.tasks = vec![task(
        "t-201",
        "Finance module data migration",
        "Engineering",
        TaskStatus::InProgress,
        "M. Akhmetova",
    )];
    p
}

fn gas_processing_plant() -> Project {
    let mut p = passport(
        "3",
        "PRJ-003",
        "Gas Processing Plant Construction",
        ProjectType::Capex,
        ProjectCategory::Large,
        ProjectStage::Feasibility,
        "Gas Division",
        "S. Petrov",
    );
    p = dates(p, ("2022-05-10", "2026-12-30"), "2022-05-10", "2027-08-20")
        .with_budget(45000.0, 52000.0)
        .with_earned_value(7000.0, 6200.0, 8500.0)
        .with_risks(3, 3, 2)
        .with_schedule_deviation(233);
    p.is_critical_path = true;
    p.cost_reason = Some("Scope growth after feasibility review".to_string());
    p.design_percent = 40.0;
    p.smr_plan = 20.0;
    p.smr_fact = 10.0;
    p.equipment_percent = 15.0;
    p.open_issues_count = 45;
    p.change_requests_count = 12;
    p.components = vec![ProjectComponent::new(
        "c-301",
        "Turbine Gen 1",
        ComponentType::Equipment,
        15.0,
    )];
    p
}

fn landfill_cleanup() -> Project {
    let mut p = passport(
        "4",
        "PRJ-004",
        "Landfill Environmental Cleanup",
        ProjectType::Hse,
        ProjectCategory::Small,
        ProjectStage::Commissioning,
        "Environmental Monitoring",
        "D. Kozlov",
    );
    p = dates(p, ("2023-10-01", "2024-03-30"), "2023-10-05", "2024-03-30")
        .with_budget(800.0, 780.0)
        .with_earned_value(680.0, 700.0, 650.0)
        .with_risks(1, 1, 1);
    p.design_percent = 100.0;
    p.smr_plan = 95.0;
    p.smr_fact = 95.0;
    p.equipment_percent = 100.0;
    p.pnr_percent = 40.0;
    p.open_issues_count = 1;
    p.tasks = vec![task(
        "t-401",
        "Final soil sampling",
        "HSE",
        TaskStatus::Done,
        "D. Kozlov",
    )];
    p
}

fn southern_field() -> Project {
    let p = passport(
        "5",
        "PRJ-005",
        "Southern Field Development",
        ProjectType::Capex,
        ProjectCategory::Large,
        ProjectStage::Idea,
        "Exploration",
        "E. Bekov",
    );
    dates(p, ("2024-01-01", "2029-12-30"), "-", "2029-12-30")
        .with_budget(120000.0, 120000.0)
        .with_risks(2, 1, 1)
}

/// The five-project demo portfolio, ids "1" through "5"
pub fn demo_projects() -> Vec<Project> {
    vec![
        refinery_upgrade(),
        erp_rollout(),
        gas_processing_plant(),
        landfill_cleanup(),
        southern_field(),
    ]
}

pub fn demo_store() -> Result<InMemoryStore> {
    InMemoryStore::with_projects(demo_projects())
}
