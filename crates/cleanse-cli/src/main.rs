mod cli;
mod clipboard;
mod commands;

use anyhow::Result;
use clap::Parser;
use cleanse_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, so redacted output on stdout stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    match cli.command {
        cli::Commands::Scan(args) => commands::scan::handle(args, &config).await,
        cli::Commands::Redact(args) => commands::redact::handle(args, &config).await,
        cli::Commands::Watch(args) => commands::watch::handle(args, &config).await,
        cli::Commands::Serve(args) => commands::serve::handle(args, &config).await,
        cli::Commands::Config(cmd) => commands::config::handle(cmd, &config, &config_path),
    }
}
