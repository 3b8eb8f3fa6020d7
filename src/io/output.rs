use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::portfolio::{DashboardReport, ProjectDetail, RegistryReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

/// Renders the three report shapes the CLI produces
pub trait OutputWriter {
    fn write_dashboard(&mut self, report: &DashboardReport<'_>) -> anyhow::Result<()>;
    fn write_registry(&mut self, report: &RegistryReport<'_>) -> anyhow::Result<()>;
    fn write_project(&mut self, detail: &ProjectDetail<'_>) -> anyhow::Result<()>;
}

/// Writer for `format` bound to `sink`. `plain` turns off table styling in
/// terminal output; colors are controlled globally.
pub fn create_writer<'w, W>(format: OutputFormat, sink: W, plain: bool) -> Box<dyn OutputWriter + 'w>
where
    W: Write + 'w,
{
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink).plain(plain)),
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
    }
}

/// Two-decimal money rendering shared by the text writers
pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip_through_config() {
        let format: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
        assert_eq!(
            serde_json::to_string(&OutputFormat::Terminal).unwrap(),
            "\"terminal\""
        );
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(12500.0), "12500.00");
        assert_eq!(format_money(-700.5), "-700.50");
    }
}
