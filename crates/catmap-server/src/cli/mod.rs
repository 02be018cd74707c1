use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catmap-server")]
#[command(about = "Catmap Server CLI")]
pub struct Cli {
    /// Path to the YAML config file (overrides CATMAP_CONFIG_PATH).
    #[arg(long, short)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run database migrations
    Migrate,
}

#[derive(Debug, Clone)]
pub enum RunMode {
    Server,
    Migrate,
}

pub struct CliOptions {
    pub run_mode: RunMode,
    pub config_path: Option<PathBuf>,
}

pub fn parse_args() -> CliOptions {
    let cli = Cli::parse();
    let run_mode = match cli.command {
        None => RunMode::Server,
        Some(Command::Migrate) => RunMode::Migrate,
    };
    CliOptions {
        run_mode,
        config_path: cli.config,
    }
}
