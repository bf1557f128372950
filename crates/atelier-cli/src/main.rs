mod catalog;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "atelier-cli")]
#[command(about = "Atelier back-office catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a product CSV and submit the valid rows to the catalog backend
    Import {
        /// CSV export to import
        file: PathBuf,
    },
    /// Parse a product CSV and print the drafts without submitting them
    Preview {
        /// CSV export to inspect
        file: PathBuf,
    },
    /// Write the example product CSV
    Template {
        /// Destination file; prints to stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = atelier_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Import { file } => catalog::run_import(&config, &file).await,
        Commands::Preview { file } => catalog::run_preview(&file).await,
        Commands::Template { output } => catalog::run_template(output.as_deref()).await,
    }
}
