//! Roost server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use roost_core::config::AppConfig;
use roost_gallery::Gallery;
use roost_server::{AppState, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Roost - image resolution and claim verification for the gallery
#[derive(Parser, Debug)]
#[command(name = "roostd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "ROOST_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

/// Load configuration: built-in defaults, then the optional file, then
/// `ROOST_` environment variables (`__` separates nested keys).
fn load_config(path: &str) -> Result<AppConfig> {
    let mut figment = Figment::new();

    if std::path::Path::new(path).exists() {
        tracing::info!(config_path = %path, "Loading configuration from file");
        figment = figment.merge(Toml::file(path));
    } else {
        tracing::debug!("No config file found at {}, using defaults", path);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("ROOST_").ignore(&["CONFIG"]).split("__"))
        .extract()
        .context("failed to load configuration")?;

    config
        .sources
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid sources configuration")?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Roost v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args.config)?;

    if config.server.metrics_enabled {
        roost_gallery::metrics::register_metrics();
        tracing::info!("Prometheus metrics registered");
    }

    let sources =
        roost_sources::from_config(&config.sources).context("failed to initialize sources")?;
    tracing::info!(
        image_base_url = %config.sources.image_base_url,
        verify_endpoint = %config.sources.verify_endpoint,
        "Upstream sources initialized"
    );

    let state = AppState::new(config.clone(), Gallery::new(sources));
    let app = create_router(state);

    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
