//! Command handlers. Each takes a store, the resolved context and an output
//! sink, so they run the same way under the binary and in tests.

pub mod dashboard;
pub mod detail;
pub mod init;
pub mod registry;

use std::io::Write;

use crate::config::PortfolioConfig;
use crate::io::output::{create_writer, OutputFormat, OutputWriter};

/// Settings every report command needs, after CLI flags and the config
/// file have been merged
#[derive(Debug, Clone, PartialEq)]
pub struct CommandContext {
    pub config: PortfolioConfig,
    pub format: OutputFormat,
    pub plain: bool,
}

impl CommandContext {
    /// CLI flags win over the config file, which wins over built-in defaults
    pub fn resolve(config: PortfolioConfig, format: Option<OutputFormat>, plain: bool) -> Self {
        let format = format
            .or(config.output.default_format)
            .unwrap_or_default();
        let plain = plain || config.output.plain;
        Self {
            config,
            format,
            plain,
        }
    }

    pub fn writer<'w, W: Write + 'w>(&self, sink: W) -> Box<dyn OutputWriter + 'w> {
        create_writer(self.format, sink, self.plain)
    }
}
