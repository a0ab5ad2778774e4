use clap::Parser;
use tracing::Level;

use sstt::config::{Cli, Config};
use sstt::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load(Cli::parse())?;

    let level = if cfg.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .init();

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
