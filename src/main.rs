//! tictactoe_timeline - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline::cli::{Cli, Command};
use tictactoe_timeline::{Settings, run_script, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Tui => run_tui(&settings),
        Command::Replay { format, ops } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::io::stderr)
                .init();

            info!(ops = ops.len(), "Replaying scripted game");
            let output =
                run_script(*settings.sort_order(), format, &ops).context("Replay failed")?;
            print!("{}", output);
            Ok(())
        }
    }
}
