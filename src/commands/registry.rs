use std::io::Write;

use anyhow::Result;

use super::CommandContext;
use crate::evm::evaluate_portfolio;
use crate::portfolio::{build_budget_report, build_problem_report, build_registry};
use crate::store::ProjectStore;

pub fn list_projects(
    store: &dyn ProjectStore,
    ctx: &CommandContext,
    search: Option<&str>,
    sink: impl Write,
) -> Result<()> {
    let snapshot = store.load_all();
    let evaluated = evaluate_portfolio(&snapshot, &ctx.config.evm);
    let report = build_registry(&evaluated, search, &ctx.config);
    tracing::debug!(query = ?search, matched = report.rows.len(), "filtered registry");
    ctx.writer(sink).write_registry(&report)
}

pub fn list_problems(
    store: &dyn ProjectStore,
    ctx: &CommandContext,
    top: Option<usize>,
    sink: impl Write,
) -> Result<()> {
    let snapshot = store.load_all();
    let evaluated = evaluate_portfolio(&snapshot, &ctx.config.evm);
    let n = top.unwrap_or(ctx.config.query.top_n);
    let report = build_problem_report(&evaluated, n, &ctx.config);
    ctx.writer(sink).write_registry(&report)
}

pub fn list_by_budget(
    store: &dyn ProjectStore,
    ctx: &CommandContext,
    top: Option<usize>,
    sink: impl Write,
) -> Result<()> {
    let snapshot = store.load_all();
    let evaluated = evaluate_portfolio(&snapshot, &ctx.config.evm);
    let n = top.unwrap_or(ctx.config.query.top_n);
    let report = build_budget_report(&evaluated, n, &ctx.config);
    ctx.writer(sink).write_registry(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::io::OutputFormat;
    use crate::store::fixtures::demo_store;

    fn json_ctx() -> CommandContext {
        CommandContext::resolve(PortfolioConfig::default(), Some(OutputFormat::Json), true)
    }

    fn codes(out: &[u8]) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_slice(out).unwrap();
        value["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["code"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn search_matches_code_case_insensitively() {
        let store = demo_store().unwrap();
        let mut out = Vec::new();
        list_projects(&store, &json_ctx(), Some("prj-001"), &mut out).unwrap();
        assert_eq!(codes(&out), vec!["PRJ-001"]);
    }

    #[test]
    fn budget_ranking_honours_top() {
        let store = demo_store().unwrap();
        let mut out = Vec::new();
        list_by_budget(&store, &json_ctx(), Some(2), &mut out).unwrap();
        assert_eq!(codes(&out), vec!["PRJ-005", "PRJ-003"]);
    }

    #[test]
    fn problems_default_to_configured_length() {
        let store = demo_store().unwrap();
        let mut out = Vec::new();
        list_problems(&store, &json_ctx(), None, &mut out).unwrap();
        assert_eq!(codes(&out), vec!["PRJ-003", "PRJ-001"]);
    }
}
