use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::info;
use weather_core::{Config, WeatherService, provider_from_config};
use weather_server::{AppState, create_router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather API proxy for OpenWeatherMap")]
pub struct Cli {
    /// Path to a TOML config file; defaults to the platform config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `[server] host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides `[server] port`.
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Resolve configuration: file, then environment, then flags.
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut cfg = Config::load(self.config.as_deref())?;

        if let Some(host) = &self.host {
            cfg.server.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }

        Ok(cfg)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let cfg = self.config()?;

        let provider = provider_from_config(&cfg)?;
        let state = AppState::new(WeatherService::new(provider));
        let app = create_router(state, &cfg.server.api_prefix);

        let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!(
            %addr,
            prefix = %cfg.server.api_prefix,
            upstream = %cfg.provider.base_url,
            "weather-server v{} listening",
            env!("CARGO_PKG_VERSION")
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from(["weather-server", "--port", "9001", "--host", "0.0.0.0"]);
        assert_eq!(cli.port, Some(9001));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Cli::try_parse_from(["weather-server", "--port", "99999"]).is_err());
    }
}
