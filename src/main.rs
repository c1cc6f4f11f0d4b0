//! StellarVerse Events Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and the
//! background weather watcher.

use std::sync::Arc;

use stellarverse_events::api::AppState;
use stellarverse_events::config::AppConfig;
use stellarverse_events::metrics::Metrics;
use stellarverse_events::notify::NotifierMux;
use stellarverse_events::watcher::{spawn_weather_watcher, WeatherWatcherCfg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::from_env();
    let metrics = Metrics::init(cfg.apod_years_back);

    let state = AppState::from_config(&cfg)?;

    // Weather alerts only run with a configured channel.
    let mux = Arc::new(NotifierMux::from_config(&cfg));
    if !mux.is_empty() {
        spawn_weather_watcher(
            WeatherWatcherCfg {
                interval_secs: cfg.weather_poll_secs,
            },
            state.weather_client(),
            mux,
        );
    }

    let app = stellarverse_events::api::router(state).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "stellarverse-events listening");
    axum::serve(listener, app).await?;
    Ok(())
}
