//! Starsite server binary.
//!
//! ```bash
//! STARSITE_ASSET_DIR=./static cargo run -p starsite -- --addr 0.0.0.0:3000
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use starsite::SiteConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Serve the Starsite landing page
#[derive(Parser, Debug)]
#[command(name = "starsite", version, about)]
struct Cli {
    /// TOML config file (overrides STARSITE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(long)]
    addr: Option<String>,

    /// Directory holding the bundle and static assets
    #[arg(long)]
    asset_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
                .with_overrides(|key| std::env::var(key).ok()),
            None => SiteConfig::load().context("Failed to load configuration")?,
        };

        if let Some(addr) = self.addr {
            config.addr = addr;
        }
        if let Some(dir) = self.asset_dir {
            config.asset_dir = dir;
        }
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,starsite=debug,starsite_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Cli::parse().into_config()?;
    tracing::debug!(?config, "Resolved configuration");

    starsite::serve(config, shutdown_signal())
        .await
        .context("Starsite server failed")?;
    Ok(())
}
