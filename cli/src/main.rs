use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod catalog;
mod generate;
mod init;
mod templates;

use catalog::CatalogCommands;
use generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "sheetgen")]
#[command(about = "sheetgen - character sheet skill table generator", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = sheetgen_core::CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the skill tables to the output file
    Generate(GenerateArgs),
    /// Fail if the output file differs from what would be generated
    Check(GenerateArgs),
    /// Inspect or export the skill catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Write a default configuration file
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("❌ Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!(config = %cli.config.display(), "Starting sheetgen");

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()));

    match command {
        Commands::Generate(args) => generate::run_generate(&cli.config, &args),
        Commands::Check(args) => generate::run_check(&cli.config, &args),
        Commands::Catalog { command } => catalog::handle_command(command, &cli.config),
        Commands::Init { force } => init::run_init(&cli.config, force),
    }
}
