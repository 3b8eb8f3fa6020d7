use std::io::Write;

use crate::classification::{BadgeSeverity, RiskSeverity};
use crate::evm::format_index;
use crate::io::output::{format_money, OutputWriter};
use crate::portfolio::{DashboardReport, ProjectDetail, RegistryReport, RegistryRow};

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_rows(&mut self, title: &str, rows: &[RegistryRow<'_>]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        if rows.is_empty() {
            writeln!(self.writer, "_None_")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| Code | Project | Stage | BAC | EAC | CPI | SPI | Health | Status |"
        )?;
        writeln!(
            self.writer,
            "|------|---------|-------|-----|-----|-----|-----|--------|--------|"
        )?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                escape_cell(row.code),
                escape_cell(row.name),
                row.stage,
                format_money(row.bac),
                format_money(row.eac),
                badge_text(row.metrics.cpi, row.cpi_badge),
                badge_text(row.metrics.spi, row.spi_badge),
                row.health,
                row.status
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn badge_text(value: f64, severity: BadgeSeverity) -> String {
    let marker = match severity {
        BadgeSeverity::Bad => "🔴",
        BadgeSeverity::Neutral => "🟡",
        BadgeSeverity::Good => "🟢",
    };
    format!("{marker} {}", format_index(value))
}

fn risk_text(severity: RiskSeverity) -> &'static str {
    match severity {
        RiskSeverity::Low => "Low",
        RiskSeverity::Medium => "Medium",
        RiskSeverity::High => "**High**",
        RiskSeverity::Unknown => "Unknown",
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport<'_>) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "# Portfolio Dashboard")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Key Indicators")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_summary_row("Projects", &summary.project_count.to_string())?;
        self.write_summary_row("Total BAC", &format_money(summary.total_bac))?;
        self.write_summary_row("Total EAC", &format_money(summary.total_eac))?;
        self.write_summary_row(
            "Portfolio CPI",
            &badge_text(summary.portfolio_cpi, report.cpi_badge),
        )?;
        self.write_summary_row(
            "Portfolio SPI",
            &badge_text(summary.portfolio_spi, report.spi_badge),
        )?;
        self.write_summary_row("Critical risks", &summary.critical_risk_count.to_string())?;
        self.write_summary_row("Delayed", &summary.delayed_count.to_string())?;
        self.write_summary_row("Off track", &summary.off_track_count.to_string())?;
        writeln!(self.writer)?;

        self.write_rows("Health Matrix", &report.matrix)?;
        self.write_rows("Problem Projects", &report.problem_projects)?;
        self.write_rows("Top by Budget", &report.top_by_budget)?;
        self.write_rows("Attention Required", &report.attention_required)?;

        writeln!(self.writer, "## Stage Funnel")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Stage | Projects | Share |")?;
        writeln!(self.writer, "|-------|----------|-------|")?;
        for share in &report.funnel {
            writeln!(
                self.writer,
                "| {} | {} | {:.0}% |",
                share.stage, share.count, share.percent
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_registry(&mut self, report: &RegistryReport<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", report.title)?;
        writeln!(self.writer)?;
        if let Some(query) = &report.query {
            writeln!(
                self.writer,
                "Search `{}`: {} of {} projects",
                query,
                report.rows.len(),
                report.total_projects
            )?;
            writeln!(self.writer)?;
        }
        self.write_rows("Projects", &report.rows)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_project(&mut self, detail: &ProjectDetail<'_>) -> anyhow::Result<()> {
        let project = detail.project;
        let metrics = &detail.metrics;
        writeln!(
            self.writer,
            "# {} {}",
            escape_cell(&project.code),
            escape_cell(&project.name)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} · {} · {} · PM {} · Owner {}",
            project.project_type,
            project.category,
            project.stage,
            escape_cell(&project.pm),
            escape_cell(&project.business_owner)
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Earned Value")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_summary_row("PV", &format_money(project.pv))?;
        self.write_summary_row("EV", &format_money(project.ev))?;
        self.write_summary_row("AC", &format_money(project.ac))?;
        self.write_summary_row("CPI", &badge_text(metrics.cpi, detail.cpi_badge))?;
        self.write_summary_row("SPI", &badge_text(metrics.spi, detail.spi_badge))?;
        self.write_summary_row("BAC", &format_money(project.bac))?;
        self.write_summary_row("EAC", &format_money(project.eac))?;
        self.write_summary_row("VAC", &format_money(metrics.variance_at_completion))?;
        self.write_summary_row("Health", detail.health.label())?;
        self.write_summary_row("Status", detail.status.label())?;
        self.write_summary_row(
            "Schedule deviation",
            &format!("{} days", project.schedule_deviation_days),
        )?;
        writeln!(self.writer)?;

        let [schedule, cost, contract] = detail.risk_cells;
        writeln!(self.writer, "## Risks")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Schedule | Cost | Contract |")?;
        writeln!(self.writer, "|----------|------|----------|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            risk_text(schedule),
            risk_text(cost),
            risk_text(contract)
        )?;
        writeln!(self.writer)?;

        if !project.tasks.is_empty() {
            writeln!(self.writer, "## Tasks")?;
            writeln!(self.writer)?;
            for task in &project.tasks {
                let check = if task.status == crate::core::TaskStatus::Done {
                    "x"
                } else {
                    " "
                };
                writeln!(
                    self.writer,
                    "- [{check}] {} ({}, {})",
                    escape_cell(&task.title),
                    task.category,
                    task.status
                )?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::evm::{evaluate_portfolio, EvaluatedProject};
    use crate::portfolio::build_problem_report;
    use crate::store::fixtures::demo_projects;

    #[test]
    fn problem_report_is_a_markdown_table() {
        let projects = demo_projects();
        let config = PortfolioConfig::default();
        let evaluated = evaluate_portfolio(&projects, &config.evm);
        let report = build_problem_report(&evaluated, 5, &config);

        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_registry(&report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Problem Projects (worst 5 by CPI)"));
        let p3 = text.find("| PRJ-003 |").unwrap();
        let p1 = text.find("| PRJ-001 |").unwrap();
        assert!(p3 < p1);
        assert!(!text.contains("PRJ-004"));
    }

    #[test]
    fn project_tasks_render_as_checklist() {
        let projects = demo_projects();
        let config = PortfolioConfig::default();
        let item = EvaluatedProject::new(&projects[0], &config.evm);
        let detail = ProjectDetail::from_evaluated(&item, &config.classification);

        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_project(&detail).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("- [x] Approve crane lift plan (Engineering, Done)"));
        assert!(text.contains("| **High** | Medium | Low |"));
    }

    #[test]
    fn pipes_in_free_text_are_escaped() {
        let mut project = demo_projects().remove(0);
        project.code = "A|B".into();
        project.name = "North | South".into();
        project.pm = "Ivanov|Petrov".into();
        let config = PortfolioConfig::default();
        let evaluated = evaluate_portfolio(std::slice::from_ref(&project), &config.evm);

        let report = build_problem_report(&evaluated, 5, &config);
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_registry(&report).unwrap();
        let table = String::from_utf8(buffer).unwrap();
        let row = table.lines().find(|l| l.contains("North")).unwrap();
        assert!(row.starts_with("| A\\|B | North \\| South |"));
        assert_eq!(row.matches(" | ").count(), 8);

        let detail = ProjectDetail::from_evaluated(&evaluated[0], &config.classification);
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_project(&detail).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# A\\|B North \\| South\n"));
        assert!(text.contains("PM Ivanov\\|Petrov"));
    }
}
