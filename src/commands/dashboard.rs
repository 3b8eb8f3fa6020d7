use std::io::Write;

use anyhow::Result;

use super::CommandContext;
use crate::evm::evaluate_portfolio;
use crate::portfolio::build_dashboard;
use crate::store::ProjectStore;

pub fn show_dashboard(store: &dyn ProjectStore, ctx: &CommandContext, sink: impl Write) -> Result<()> {
    let snapshot = store.load_all();
    let evaluated = evaluate_portfolio(&snapshot, &ctx.config.evm);
    let report = build_dashboard(&evaluated, &ctx.config);
    tracing::info!(
        projects = report.summary.project_count,
        off_track = report.summary.off_track_count,
        "built dashboard"
    );
    ctx.writer(sink).write_dashboard(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::io::OutputFormat;
    use crate::store::fixtures::demo_store;

    #[test]
    fn dashboard_json_has_portfolio_kpis() {
        let store = demo_store().unwrap();
        let ctx = CommandContext::resolve(PortfolioConfig::default(), Some(OutputFormat::Json), true);
        let mut out = Vec::new();
        show_dashboard(&store, &ctx, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["summary"]["project_count"], 5);
        assert_eq!(value["summary"]["critical_risk_count"], 2);
        assert_eq!(value["summary"]["off_track_count"], 1);
        assert_eq!(value["funnel"].as_array().unwrap().len(), 6);
    }
}
