// Shared builders for portfolio-evm integration tests
#![allow(dead_code)]

use portfolio_evm::{Project, ProjectStage};

/// Project with only the fields the EVM engine reads
pub fn evm_project(code: &str, bac: f64, pv: f64, ev: f64, ac: f64) -> Project {
    Project::new(code, format!("Project {code}"))
        .with_id(code.to_lowercase())
        .with_budget(bac, bac)
        .with_earned_value(pv, ev, ac)
        .with_risks(1, 1, 1)
}

/// The three-project portfolio used by the end-to-end walkthrough
pub fn three_project_portfolio() -> Vec<Project> {
    vec![
        evm_project("P1", 100.0, 55.0, 50.0, 60.0),
        evm_project("P2", 200.0, 120.0, 80.0, 100.0).with_risks(1, 3, 1),
        evm_project("P3", 50.0, 45.0, 45.0, 40.0).with_stage(ProjectStage::Execution),
    ]
}

pub fn codes<'a>(items: impl IntoIterator<Item = &'a portfolio_evm::EvaluatedProject<'a>>) -> Vec<&'a str> {
    items
        .into_iter()
        .map(|item| item.project.code.as_str())
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
