//! data-proxy
//!
//! ```text
//!     Client                 ┌──────────────────────────────┐
//!     GET /api/data ────────▶│ CORS · request id · trace    │
//!                            │            │                 │
//!                            │            ▼                 │        Upstream
//!                            │      data handler ───────────┼──────▶ REST API
//!                            │            │                 │
//!     200 upstream JSON ◀────│  ok ───────┤                 │
//!     500 {"error": ...} ◀───│  err ──────┘                 │
//!                            └──────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use data_proxy::config::{self, ProxyConfig};
use data_proxy::lifecycle::startup;
use data_proxy::observability::init_logging;

#[derive(Parser)]
#[command(name = "data-proxy")]
#[command(about = "Relay a fixed upstream JSON API on GET /api/data", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override upstream.url.
    #[arg(short, long)]
    upstream: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<ProxyConfig, config::ConfigError> {
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ProxyConfig::default(),
    };
    config::apply_overrides(config, cli.bind.clone(), cli.upstream.clone())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let resolved = resolve_config(&cli);

    let log_format = resolved
        .as_ref()
        .map(|c| c.observability.log_format)
        .unwrap_or_default();
    init_logging(log_format);

    let config = match resolved {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    tracing::info!("data-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if let Err(e) = startup::run(config).await {
        tracing::error!(error = %e, "Proxy exited with error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
