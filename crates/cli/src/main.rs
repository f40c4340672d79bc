use crate::{commands::Commands, error::CliError};
use clap::Parser;
use model::criteria::Criteria;
use planner::{
    DatabaseProcessor, SqlPredicateTranslator,
    query::{dialect::DialectKind, renderer::render},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "crit", version = "0.1.0", about = "Criteria to SQL compiler")]
struct Cli {
    /// Enables debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compile {
            input,
            dialect,
            json,
        } => {
            let kind = dialect
                .parse::<DialectKind>()
                .map_err(CliError::InvalidDialect)?;
            let criteria = load_criteria(&input)?;

            let mut processor = DatabaseProcessor::new(SqlPredicateTranslator);
            let select = processor.process(&criteria)?;
            let (sql, params) = render(&select, kind.dialect());

            info!("Rendered statement for {}", kind.dialect().name());
            output::print_statement(&sql, &params, json)?;
        }
        Commands::Check { input } => {
            let criteria = load_criteria(&input)?;
            DatabaseProcessor::new(SqlPredicateTranslator).process(&criteria)?;
            info!("Criteria file {} is valid", input);
        }
    }

    Ok(())
}

fn load_criteria(path: &str) -> Result<Criteria, CliError> {
    info!("Loading criteria from {}", path);
    let source = std::fs::read_to_string(path)?;
    let criteria = serde_json::from_str(&source)?;
    Ok(criteria)
}
