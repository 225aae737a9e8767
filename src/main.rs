//! ytnotes - YouTube transcripts turned into detailed notes
//!
//! Entry point for the ytnotes CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ytnotes::cli::{Cli, Commands};
use ytnotes::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            ytnotes::cli::completions::print(shell);
        }
        Commands::Resolve { url } => {
            ytnotes::cli::commands::resolve_link(&url)?;
        }
        command => {
            // Load configuration only for commands that use it.
            let settings = Settings::load()?;

            match command {
                Commands::Serve { host, port } => {
                    ytnotes::cli::commands::serve(&settings, host, port).await?;
                }
                Commands::Summarize { url, languages } => {
                    ytnotes::cli::commands::summarize(&settings, &url, languages).await?;
                }
                Commands::Transcript { url, languages } => {
                    ytnotes::cli::commands::print_transcript(&settings, &url, languages).await?;
                }
                Commands::Doctor { json } => {
                    ytnotes::cli::commands::run_doctor(&settings, json)?;
                }
                Commands::Config(config_cmd) => {
                    ytnotes::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Resolve { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
