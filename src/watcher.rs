// src/watcher.rs
//! Background weather poll loop: fetch, record gauges, push alerts when
//! conditions warrant.

use std::sync::Arc;
use std::time::Duration;

use metrics::{counter, gauge};
use tokio::task::JoinHandle;

use crate::notify::{AlertPayload, NotifierMux};
use crate::weather::{should_notify, WeatherClient};

#[derive(Clone, Copy, Debug)]
pub struct WeatherWatcherCfg {
    pub interval_secs: u64,
}

/// Spawn the poll loop. The handle is detached by the caller; the loop runs
/// for the lifetime of the process.
pub fn spawn_weather_watcher(
    cfg: WeatherWatcherCfg,
    client: Arc<WeatherClient>,
    mux: Arc<NotifierMux>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(cfg.interval_secs.max(1)));
        loop {
            ticker.tick().await;

            let weather = client.fetch().await;
            counter!("weather_watch_ticks_total").increment(1);
            gauge!("weather_kp_index").set(weather.geomagnetic_activity.kp_index);

            tracing::info!(
                target: "weather",
                status = weather.status.as_str(),
                kp = weather.geomagnetic_activity.kp_index,
                alerts = weather.alerts.len(),
                "weather tick"
            );

            if should_notify(&weather) && !mux.is_empty() {
                mux.notify(&AlertPayload::from_weather(&weather)).await;
            }
        }
    })
}
