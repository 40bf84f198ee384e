//! Courier - command-line entry point
//!
//! Converts curl commands to and from request documents, materializes
//! placeholders in a request and reports how a project's HTTP client
//! would handle TLS.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};

const LOG_ENV: &str = "COURIER_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = commands::load_settings(cli.config.as_deref()).await?;
    tracing::debug!(?settings, "loaded client settings");

    let output = match cli.command {
        Command::Curl(command) => commands::curl(command).await?,
        Command::Resolve(args) => commands::resolve(args).await?,
        Command::Tls(args) => commands::tls(args, settings).await?,
    };

    println!("{output}");
    Ok(())
}
