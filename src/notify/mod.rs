// src/notify/mod.rs
//! Outbound alert channels for space-weather conditions.

pub mod discord;

use async_trait::async_trait;
use chrono::Utc;

use crate::weather::SpaceWeather;

#[derive(Debug, Clone)]
pub struct AlertPayload {
    /// "quiet" | "active" | "storm" | "severe"
    pub status: String,
    pub kp_index: f64,
    pub alert_count: usize,
    /// Short human-readable line, e.g. the first NOAA alert message.
    pub headline: String,
    /// UTC ISO 8601
    pub timestamp_iso: String,
}

impl AlertPayload {
    pub fn from_weather(weather: &SpaceWeather) -> Self {
        let headline = weather
            .alerts
            .first()
            .map(|a| a.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Kp index at {:.1}", weather.geomagnetic_activity.kp_index));
        Self {
            status: weather.status.as_str().to_string(),
            kp_index: weather.geomagnetic_activity.kp_index,
            alert_count: weather.alerts.len(),
            headline,
            timestamp_iso: Utc::now().to_rfc3339(),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_alert(&self, alert: &AlertPayload) -> anyhow::Result<()>;
    fn name(&self) -> &'static str;
}

/// Fans one alert out to every configured channel; a failing channel is
/// logged and does not block the others.
pub struct NotifierMux {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierMux {
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    /// Build from config: currently the Discord webhook when set. An empty
    /// mux is valid and makes `notify` a no-op.
    pub fn from_config(cfg: &crate::config::AppConfig) -> Self {
        let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
        if let Some(url) = &cfg.discord_webhook_url {
            notifiers.push(Box::new(discord::DiscordNotifier::new(url.clone())));
        }
        Self { notifiers }
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    pub async fn notify(&self, alert: &AlertPayload) {
        for n in &self.notifiers {
            if let Err(e) = n.send_alert(alert).await {
                tracing::warn!(target: "notify", channel = n.name(), error = ?e, "alert delivery failed");
            } else {
                tracing::info!(target: "notify", channel = n.name(), status = %alert.status, "alert delivered");
            }
        }
    }
}
