use anyhow::Result;
use cleanse_config::Config;
use cleanse_server::ScanServer;

use super::load_rules;
use crate::cli::ServeArgs;

pub async fn handle(args: ServeArgs, config: &Config) -> Result<()> {
    let rules = load_rules(config)?;
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    println!("Starting scan server on {}:{}", host, port);
    ScanServer::serve(rules, &host, port).await
}
