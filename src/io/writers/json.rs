use std::io::Write;

use serde::Serialize;

use crate::io::output::OutputWriter;
use crate::portfolio::{DashboardReport, ProjectDetail, RegistryReport};

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_registry(&mut self, report: &RegistryReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_project(&mut self, detail: &ProjectDetail<'_>) -> anyhow::Result<()> {
        self.write_value(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::evm::evaluate_portfolio;
    use crate::portfolio::build_registry;
    use crate::store::fixtures::demo_projects;

    #[test]
    fn registry_json_carries_computed_indices() {
        let projects = demo_projects();
        let config = PortfolioConfig::default();
        let evaluated = evaluate_portfolio(&projects, &config.evm);
        let report = build_registry(&evaluated, Some("PRJ-004"), &config);

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_registry(&report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let row = &value["rows"][0];
        assert_eq!(row["code"], "PRJ-004");
        assert_eq!(row["health"], "Healthy");
        assert_eq!(row["status"], "On Track");
        assert_eq!(row["metrics"]["cpi"], 700.0 / 650.0);
        assert_eq!(value["query"], "PRJ-004");
    }
}
