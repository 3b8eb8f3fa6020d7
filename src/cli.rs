use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "portfolio-evm")]
#[command(about = "Earned value dashboard for a portfolio of capital projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (defaults to the config file setting, then terminal)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (otherwise .portfolio-evm.toml is searched upward)
    #[arg(short, long, global = true, env = "PORTFOLIO_EVM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Plain output: no colors, ASCII tables
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Portfolio KPIs, health matrix, ranked lists and stage funnel
    Dashboard,

    /// Project registry with computed indices
    List {
        /// Case-insensitive match on project name or code
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Drill into one project by id or code
    Show {
        /// Project id or code (e.g. PRJ-001)
        project: String,
    },

    /// Projects with a critical index or high cost risk, worst CPI first
    Problems {
        /// How many to show, at least 1 (defaults to query.top_n)
        #[arg(long, value_parser = parse_top_n)]
        top: Option<usize>,
    },

    /// Largest budgets first
    Budget {
        /// How many to show, at least 1 (defaults to query.top_n)
        #[arg(long, value_parser = parse_top_n)]
        top: Option<usize>,
    },

    /// Write a default .portfolio-evm.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Same rule as `query.top_n` in the config file: a list of zero is an error.
fn parse_top_n(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "portfolio-evm",
            "list",
            "--search",
            "erp",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbosity, 2);
        assert!(matches!(cli.command, Commands::List { search: Some(ref s) } if s == "erp"));
    }

    #[test]
    fn top_must_be_positive() {
        for command in ["problems", "budget"] {
            let err = Cli::try_parse_from(["portfolio-evm", command, "--top", "0"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
        let cli = Cli::try_parse_from(["portfolio-evm", "problems", "--top", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Problems { top: Some(1) }));
    }
}
