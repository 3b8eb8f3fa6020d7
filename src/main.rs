use anyhow::Result;
use clap::Parser;
use portfolio_evm::cli::{Cli, Commands};
use portfolio_evm::commands::{self, CommandContext};
use portfolio_evm::config::load_config;
use portfolio_evm::observability::{configure_colors, init_tracing};
use portfolio_evm::store::fixtures::demo_store;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    // Config is only read by report commands; `init` must work without one
    let context = || -> Result<CommandContext> {
        let config = load_config(cli.config.as_deref())?;
        let ctx = CommandContext::resolve(config, cli.format, cli.plain);
        configure_colors(ctx.plain);
        Ok(ctx)
    };
    let stdout = std::io::stdout();

    match cli.command {
        Commands::Dashboard => {
            commands::dashboard::show_dashboard(&demo_store()?, &context()?, stdout.lock())
        }
        Commands::List { search } => commands::registry::list_projects(
            &demo_store()?,
            &context()?,
            search.as_deref(),
            stdout.lock(),
        ),
        Commands::Show { project } => {
            commands::detail::show_project(&demo_store()?, &context()?, &project, stdout.lock())
        }
        Commands::Problems { top } => {
            commands::registry::list_problems(&demo_store()?, &context()?, top, stdout.lock())
        }
        Commands::Budget { top } => {
            commands::registry::list_by_budget(&demo_store()?, &context()?, top, stdout.lock())
        }
        Commands::Init { force } => {
            let path = commands::init::init_config(&std::env::current_dir()?, force)?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}
