//! Earned Value Management calculator.
//!
//! Indices are a read-only projection of a project's PV/EV/AC inputs,
//! recomputed on every call and never stored back on the record. All
//! arithmetic is done at full `f64` precision; rounding to two decimals
//! happens only when a value is displayed (see [`format_index`]).

use serde::Serialize;

use crate::config::EvmPolicy;
use crate::core::Project;

/// Indices and variances derived from one project's EVM inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvmMetrics {
    /// Cost Performance Index, EV / AC
    pub cpi: f64,
    /// Schedule Performance Index, EV / PV
    pub spi: f64,
    /// EV − AC, negative when over budget for the work done
    pub cost_variance: f64,
    /// EV − PV, negative when behind schedule
    pub schedule_variance: f64,
    /// BAC − EAC, positive when the forecast is under budget
    pub variance_at_completion: f64,
}

/// A project paired with its freshly computed metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluatedProject<'a> {
    pub project: &'a Project,
    pub metrics: EvmMetrics,
}

impl<'a> EvaluatedProject<'a> {
    pub fn new(project: &'a Project, policy: &EvmPolicy) -> Self {
        Self {
            project,
            metrics: compute_evm(project, policy),
        }
    }

    pub fn cpi(&self) -> f64 {
        self.metrics.cpi
    }

    pub fn spi(&self) -> f64 {
        self.metrics.spi
    }
}

/// `numerator / denominator`, or `fallback` when the denominator is not
/// positive or the numerator is negative or not a number.
pub fn performance_index(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if numerator >= 0.0 && numerator.is_finite() && denominator > 0.0 {
        numerator / denominator
    } else {
        fallback
    }
}

/// Compute CPI, SPI and the cost/schedule variances for a single project.
///
/// Never fails: a zero (or negative) AC or PV, or a negative EV, yields
/// `policy.zero_denominator_index` instead of NaN, infinity or a negative index.
pub fn compute_evm(project: &Project, policy: &EvmPolicy) -> EvmMetrics {
    let fallback = policy.zero_denominator_index;
    EvmMetrics {
        cpi: performance_index(project.ev, project.ac, fallback),
        spi: performance_index(project.ev, project.pv, fallback),
        cost_variance: project.ev - project.ac,
        schedule_variance: project.ev - project.pv,
        variance_at_completion: project.bac - project.eac,
    }
}

/// Evaluate every project, preserving collection order. Accepts anything
/// that iterates borrowed records: a slice, a `Vec`, or a store snapshot.
pub fn evaluate_portfolio<'a, I>(projects: I, policy: &EvmPolicy) -> Vec<EvaluatedProject<'a>>
where
    I: IntoIterator<Item = &'a Project>,
{
    let evaluated: Vec<EvaluatedProject<'a>> = projects
        .into_iter()
        .map(|project| EvaluatedProject::new(project, policy))
        .collect();
    tracing::debug!(count = evaluated.len(), "evaluated portfolio");
    evaluated
}

/// Two-decimal rendering used by every writer
pub fn format_index(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> EvmPolicy {
        EvmPolicy::default()
    }

    #[test]
    fn indices_are_plain_ratios() {
        let project = Project::new("P1", "p1")
            .with_budget(100.0, 110.0)
            .with_earned_value(55.0, 50.0, 60.0);
        let m = compute_evm(&project, &policy());
        assert_eq!(m.cpi, 50.0 / 60.0);
        assert_eq!(m.spi, 50.0 / 55.0);
        assert_eq!(m.cost_variance, -10.0);
        assert_eq!(m.schedule_variance, -5.0);
        assert_eq!(m.variance_at_completion, -10.0);
    }

    #[test]
    fn zero_denominators_use_policy_default() {
        let project = Project::new("P", "p").with_earned_value(0.0, 5.0, 0.0);
        let m = compute_evm(&project, &policy());
        assert_eq!(m.cpi, 1.0);
        assert_eq!(m.spi, 1.0);

        let zero_policy = EvmPolicy {
            zero_denominator_index: 0.0,
        };
        let m = compute_evm(&project, &zero_policy);
        assert_eq!(m.cpi, 0.0);
        assert_eq!(m.spi, 0.0);
    }

    #[test]
    fn negative_denominator_is_treated_as_missing() {
        assert_eq!(performance_index(5.0, -2.0, 1.0), 1.0);
    }

    #[test]
    fn negative_earned_value_uses_policy_default() {
        let project = Project::new("P", "p").with_earned_value(50.0, -20.0, 40.0);
        let m = compute_evm(&project, &policy());
        assert_eq!(m.cpi, 1.0);
        assert_eq!(m.spi, 1.0);
        assert_eq!(m.cost_variance, -60.0);
        assert_eq!(performance_index(f64::NAN, 10.0, 1.0), 1.0);
    }

    #[test]
    fn evaluation_keeps_order_and_borrows_records() {
        let projects = vec![
            Project::new("A", "a").with_earned_value(10.0, 10.0, 10.0),
            Project::new("B", "b").with_earned_value(10.0, 10.0, 5.0),
        ];
        let evaluated = evaluate_portfolio(&projects, &policy());
        assert_eq!(evaluated.len(), 2);
        assert!(std::ptr::eq(evaluated[1].project, &projects[1]));
        assert_eq!(evaluated[1].cpi(), 2.0);
    }

    #[test]
    fn display_rounds_to_two_decimals() {
        assert_eq!(format_index(50.0 / 60.0), "0.83");
        assert_eq!(format_index(2.0 / 3.0), "0.67");
        assert_eq!(format_index(1.0), "1.00");
    }
}
