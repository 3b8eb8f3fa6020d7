//! Form-level validation of project records with error accumulation.
//!
//! The engine itself never requires valid input (classification has a
//! defined fall-through for anything out of range). These checks guard the
//! store boundary instead, so a rejected form reports every bad field in one
//! pass rather than the first one found.

use stillwater::{NonEmptyVec, Validation};

use crate::core::{Project, RiskLevel};
use crate::errors::{Error, FieldError, Result};

pub type FieldValidation<T> = Validation<T, NonEmptyVec<FieldError>>;

/// Success when `errors` is empty, otherwise a failure carrying all of them
pub fn from_field_errors(errors: Vec<FieldError>) -> FieldValidation<()> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Combine validations, accumulating every failure
pub fn combine_validations(validations: Vec<FieldValidation<()>>) -> FieldValidation<()> {
    let failures: Vec<FieldError> = validations
        .into_iter()
        .flat_map(|v| match v {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.into_vec(),
        })
        .collect();
    from_field_errors(failures)
}

/// Convert an accumulated validation into the fail-fast `Result` API
pub fn run_validation<T>(validation: FieldValidation<T>) -> Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(Error::Validation(errors.into_vec())),
    }
}

fn check_required(field: &str, value: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::new(field, "is required"))
}

fn check_percent(field: &str, value: f64) -> Option<FieldError> {
    (!(0.0..=100.0).contains(&value))
        .then(|| FieldError::new(field, format!("must be between 0 and 100, got {value}")))
}

fn check_amount(field: &str, value: f64) -> Option<FieldError> {
    (!value.is_finite() || value < 0.0)
        .then(|| FieldError::new(field, format!("must be a non-negative amount, got {value}")))
}

fn check_risk(field: &str, value: RiskLevel) -> Option<FieldError> {
    (!value.is_known())
        .then(|| FieldError::new(field, format!("must be 1, 2 or 3, got {}", value.0)))
}

fn validate_passport(project: &Project) -> FieldValidation<()> {
    from_field_errors(
        [
            check_required("code", &project.code),
            check_required("name", &project.name),
        ]
        .into_iter()
        .flatten()
        .collect(),
    )
}

fn validate_amounts(project: &Project) -> FieldValidation<()> {
    from_field_errors(
        [
            check_amount("bac", project.bac),
            check_amount("eac", project.eac),
            check_amount("pv", project.pv),
            check_amount("ev", project.ev),
            check_amount("ac", project.ac),
        ]
        .into_iter()
        .flatten()
        .collect(),
    )
}

fn validate_progress(project: &Project) -> FieldValidation<()> {
    let record_fields = [
        ("designPercent", project.design_percent),
        ("smrPlan", project.smr_plan),
        ("smrFact", project.smr_fact),
        ("equipmentPercent", project.equipment_percent),
        ("pnrPercent", project.pnr_percent),
    ];

    let component_fields = project
        .components
        .iter()
        .enumerate()
        .map(|(i, c)| (format!("components[{i}].progress"), c.progress));

    from_field_errors(
        record_fields
            .into_iter()
            .map(|(field, value)| (field.to_string(), value))
            .chain(component_fields)
            .filter_map(|(field, value)| check_percent(&field, value))
            .collect(),
    )
}

fn validate_risks(project: &Project) -> FieldValidation<()> {
    from_field_errors(
        [
            check_risk("riskSchedule", project.risk_schedule),
            check_risk("riskCost", project.risk_cost),
            check_risk("riskContract", project.risk_contract),
        ]
        .into_iter()
        .flatten()
        .collect(),
    )
}

fn validate_tasks(project: &Project) -> FieldValidation<()> {
    from_field_errors(
        project
            .tasks
            .iter()
            .enumerate()
            .filter_map(|(i, task)| check_required(&format!("tasks[{i}].title"), &task.title))
            .collect(),
    )
}

/// Validate a submitted project form, accumulating ALL errors
pub fn validate_project(project: &Project) -> FieldValidation<()> {
    combine_validations(vec![
        validate_passport(project),
        validate_amounts(project),
        validate_progress(project),
        validate_risks(project),
        validate_tasks(project),
    ])
}

/// [`validate_project`] with the `Result` API used by the store
pub fn check_project(project: &Project) -> Result<()> {
    run_validation(validate_project(project))
}
