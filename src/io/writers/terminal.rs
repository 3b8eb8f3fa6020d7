use std::io::Write;

use colored::*;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};

use crate::classification::{
    BadgeSeverity, CostDirection, HealthBucket, ProjectStatus, RiskSeverity, ScheduleDirection,
};
use crate::evm::format_index;
use crate::io::output::{format_money, OutputWriter};
use crate::portfolio::{DashboardReport, ProjectDetail, RegistryReport, RegistryRow};

pub struct TerminalWriter<W: Write> {
    writer: W,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            plain: false,
        }
    }

    /// ASCII borders, no wrapping and no cell styling
    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.plain {
            table
                .load_preset(presets::ASCII_FULL)
                .set_content_arrangement(ContentArrangement::Disabled)
                .force_no_tty();
        } else {
            table
                .load_preset(presets::UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);
        }
        table
    }

    fn heading(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        Ok(())
    }

    fn row_table(&self, rows: &[RegistryRow<'_>]) -> Table {
        let mut table = self.table();
        table.set_header(vec![
            "Code", "Project", "Stage", "PM", "BAC", "EAC", "CPI", "SPI", "Health", "Status",
        ]);
        for row in rows {
            table.add_row(vec![
                Cell::new(row.code),
                Cell::new(row.name),
                Cell::new(row.stage),
                Cell::new(row.pm),
                Cell::new(format_money(row.bac)),
                Cell::new(format_money(row.eac)),
                badge_cell(row.metrics.cpi, row.cpi_badge),
                badge_cell(row.metrics.spi, row.spi_badge),
                Cell::new(row.health).fg(health_color(row.health)),
                Cell::new(row.status).fg(status_color(row.status)),
            ]);
        }
        table
    }

    fn write_rows(&mut self, title: &str, rows: &[RegistryRow<'_>]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold())?;
        if rows.is_empty() {
            writeln!(self.writer, "  {}", "none".dimmed())?;
        } else {
            let table = self.row_table(rows);
            writeln!(self.writer, "{table}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn badge_color(severity: BadgeSeverity) -> Color {
    match severity {
        BadgeSeverity::Bad => Color::Red,
        BadgeSeverity::Neutral => Color::Yellow,
        BadgeSeverity::Good => Color::Green,
    }
}

fn badge_cell(value: f64, severity: BadgeSeverity) -> Cell {
    Cell::new(format_index(value)).fg(badge_color(severity))
}

fn health_color(health: HealthBucket) -> Color {
    match health {
        HealthBucket::Critical => Color::Red,
        HealthBucket::Watch => Color::Blue,
        HealthBucket::Healthy => Color::Green,
    }
}

fn status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::OnTrack => Color::Green,
        ProjectStatus::AtRisk => Color::Yellow,
        ProjectStatus::OffTrack => Color::Red,
    }
}

fn risk_cell(severity: RiskSeverity) -> Cell {
    match severity {
        RiskSeverity::Low => Cell::new("Low").fg(Color::Green),
        RiskSeverity::Medium => Cell::new("Medium").fg(Color::Yellow),
        RiskSeverity::High => Cell::new("High").fg(Color::Red),
        RiskSeverity::Unknown => Cell::new("?"),
    }
}

fn colored_index(value: f64, severity: BadgeSeverity) -> ColoredString {
    let text = format_index(value);
    match severity {
        BadgeSeverity::Bad => text.red(),
        BadgeSeverity::Neutral => text.yellow(),
        BadgeSeverity::Good => text.green(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport<'_>) -> anyhow::Result<()> {
        let summary = &report.summary;
        self.heading("Portfolio Dashboard")?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Key Indicators".bold())?;
        writeln!(self.writer, "  Projects:       {}", summary.project_count)?;
        writeln!(self.writer, "  Total BAC:      {}", format_money(summary.total_bac))?;
        writeln!(self.writer, "  Total EAC:      {}", format_money(summary.total_eac))?;
        writeln!(
            self.writer,
            "  Portfolio CPI:  {}",
            colored_index(summary.portfolio_cpi, report.cpi_badge)
        )?;
        writeln!(
            self.writer,
            "  Portfolio SPI:  {}",
            colored_index(summary.portfolio_spi, report.spi_badge)
        )?;
        writeln!(
            self.writer,
            "  Critical risks: {}",
            summary.critical_risk_count.to_string().red()
        )?;
        writeln!(self.writer, "  Delayed:        {}", summary.delayed_count)?;
        writeln!(self.writer, "  Off track:      {}", summary.off_track_count)?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "Health: {} critical, {} watch, {} healthy",
            report.health.critical.to_string().red(),
            report.health.watch.to_string().blue(),
            report.health.healthy.to_string().green()
        )?;
        writeln!(self.writer)?;

        self.write_rows("Health Matrix", &report.matrix)?;
        self.write_rows("Problem Projects", &report.problem_projects)?;
        self.write_rows("Top by Budget", &report.top_by_budget)?;
        self.write_rows("Attention Required", &report.attention_required)?;

        writeln!(self.writer, "{}", "Stage Funnel".bold())?;
        let mut funnel = self.table();
        funnel.set_header(vec!["Stage", "Projects", "Share"]);
        for share in &report.funnel {
            funnel.add_row(vec![
                Cell::new(share.stage),
                Cell::new(share.count),
                Cell::new(format!("{:.0}%", share.percent)),
            ]);
        }
        writeln!(self.writer, "{funnel}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_registry(&mut self, report: &RegistryReport<'_>) -> anyhow::Result<()> {
        self.heading(&report.title)?;
        if let Some(query) = &report.query {
            writeln!(
                self.writer,
                "Search \"{}\": {} of {} projects",
                query,
                report.rows.len(),
                report.total_projects
            )?;
        }
        writeln!(self.writer)?;
        if report.rows.is_empty() {
            writeln!(self.writer, "{}", "No projects found".dimmed())?;
        } else {
            let table = self.row_table(&report.rows);
            writeln!(self.writer, "{table}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_project(&mut self, detail: &ProjectDetail<'_>) -> anyhow::Result<()> {
        let project = detail.project;
        let metrics = &detail.metrics;
        self.heading(&format!("{} {}", project.code, project.name))?;
        writeln!(
            self.writer,
            "{} | {} | {} | PM {} | Owner {}",
            project.project_type,
            project.category,
            project.stage,
            project.pm,
            project.business_owner
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Earned Value".bold())?;
        writeln!(
            self.writer,
            "  PV {}  EV {}  AC {}",
            format_money(project.pv),
            format_money(project.ev),
            format_money(project.ac)
        )?;
        writeln!(
            self.writer,
            "  CPI {}  SPI {}  ({}, {})",
            colored_index(metrics.cpi, detail.cpi_badge),
            colored_index(metrics.spi, detail.spi_badge),
            detail.health,
            detail.status
        )?;
        let vac = match detail.cost_direction {
            CostDirection::Under => format_money(metrics.variance_at_completion).green(),
            CostDirection::Over => format_money(metrics.variance_at_completion).red(),
        };
        writeln!(
            self.writer,
            "  BAC {}  EAC {}  VAC {}",
            format_money(project.bac),
            format_money(project.eac),
            vac
        )?;
        if let Some(reason) = &project.cost_reason {
            writeln!(self.writer, "  Cost deviation: {reason}")?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Schedule".bold())?;
        writeln!(
            self.writer,
            "  Plan {} to {}, started {}, forecast finish {}",
            project.start_date_plan,
            project.end_date_plan,
            project.start_date_fact,
            project.end_date_forecast
        )?;
        let days = project.schedule_deviation_days;
        let deviation = match detail.schedule_direction {
            ScheduleDirection::Late => format!("{days} days late").red(),
            ScheduleDirection::Early => format!("{} days ahead", -days).green(),
        };
        writeln!(self.writer, "  Deviation: {deviation}")?;
        if project.is_critical_path {
            writeln!(self.writer, "  {}", "On the critical path".yellow())?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Physical Progress".bold())?;
        writeln!(
            self.writer,
            "  Design {:.0}%  Construction {:.0}% of {:.0}% planned  Equipment {:.0}%  Commissioning {:.0}%",
            project.design_percent,
            project.smr_fact,
            project.smr_plan,
            project.equipment_percent,
            project.pnr_percent
        )?;
        if detail.progress_lag {
            writeln!(self.writer, "  {}", "Construction is lagging plan".red())?;
        }
        writeln!(self.writer)?;

        let mut risks = self.table();
        risks.set_header(vec!["Schedule risk", "Cost risk", "Contract risk"]);
        risks.add_row(detail.risk_cells.map(risk_cell).to_vec());
        writeln!(self.writer, "{risks}")?;
        writeln!(
            self.writer,
            "Open issues: {}  Change requests: {}",
            project.open_issues_count, project.change_requests_count
        )?;
        writeln!(self.writer)?;

        if !detail.components.is_empty() {
            let mut components = self.table();
            components.set_header(vec!["Component type", "Count", "Mean progress"]);
            for group in &detail.components {
                components.add_row(vec![
                    Cell::new(group.component_type),
                    Cell::new(group.count),
                    Cell::new(format!("{:.0}%", group.mean_progress)),
                ]);
            }
            writeln!(self.writer, "{components}")?;
        }

        let board = &detail.task_board;
        writeln!(
            self.writer,
            "Tasks: {} pending, {} in progress, {} done",
            board.pending, board.in_progress, board.done
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
