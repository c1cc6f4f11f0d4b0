// src/weather.rs
//! NOAA space-weather snapshot: four SWPC feeds fetched concurrently,
//! reduced to the latest sample each, plus a coarse activity status.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use metrics::counter;
use serde::{Deserialize, Serialize};

pub const SOLAR_WIND_PATH: &str = "/solar-wind/mag-2-day.json";
pub const KP_INDEX_PATH: &str = "/planetary-k-index-dst.json";
pub const ALERTS_PATH: &str = "/alerts.json";
pub const XRAY_PATH: &str = "/goes/primary/xrays-6-hour.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarWind {
    /// km/s
    pub speed: f64,
    /// n/cm^3
    pub density: f64,
    /// K
    pub temperature: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeomagneticActivity {
    /// 0-9 scale
    pub kp_index: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarActivity {
    pub xray_flux: f64,
    pub flare_class: String,
    pub sunspot_number: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub message_type: String,
    pub message_id: String,
    pub issue_time: String,
    pub message: String,
    pub severity: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherStatus {
    Quiet,
    Active,
    Storm,
    Severe,
}

impl WeatherStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherStatus::Quiet => "quiet",
            WeatherStatus::Active => "active",
            WeatherStatus::Storm => "storm",
            WeatherStatus::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceWeather {
    pub solar_wind: SolarWind,
    pub geomagnetic_activity: GeomagneticActivity,
    pub solar_activity: SolarActivity,
    pub alerts: Vec<WeatherAlert>,
    pub last_updated: String,
    pub status: WeatherStatus,
    #[serde(default)]
    pub error: Option<String>,
}

/* ----------------------------
Raw feed shapes (lenient)
---------------------------- */

#[derive(Debug, Deserialize)]
struct RawSolarWind {
    #[serde(default)]
    speed: Option<f64>,
    #[serde(default)]
    density: Option<f64>,
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    time_tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawKpIndex {
    #[serde(default)]
    kp_index: Option<f64>,
    #[serde(default)]
    time_tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAlert {
    #[serde(default, rename = "messageType")]
    message_type: Option<String>,
    #[serde(default, rename = "messageID")]
    message_id: Option<String>,
    #[serde(default, rename = "issueTime")]
    issue_time: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    severity: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawXray {
    #[serde(default)]
    flux: Option<f64>,
    #[serde(default, rename = "class")]
    flare_class: Option<String>,
    #[serde(default)]
    ssn: Option<f64>,
    #[serde(default)]
    time_tag: Option<String>,
}

/// Overall status from Kp and active alerts. Thresholds mirror the NOAA
/// G-scale bands the UI colors by.
pub fn determine_status(kp_index: f64, has_active_alerts: bool) -> WeatherStatus {
    if kp_index >= 7.0 || has_active_alerts {
        WeatherStatus::Severe
    } else if kp_index >= 5.0 {
        WeatherStatus::Storm
    } else if kp_index >= 3.0 {
        WeatherStatus::Active
    } else {
        WeatherStatus::Quiet
    }
}

/// Whether current conditions warrant pushing a notification.
pub fn should_notify(weather: &SpaceWeather) -> bool {
    weather.geomagnetic_activity.kp_index >= 5.0 || !weather.alerts.is_empty()
}

/// Render an ISO feed timestamp as "H:MM AM/PM UTC"; unparsable input is
/// passed through untouched.
fn format_timestamp(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Utc).format("%-I:%M %p UTC").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

pub struct WeatherClient {
    mode: Mode,
}

enum Mode {
    Fixture {
        solar_wind: String,
        kp_index: String,
        alerts: String,
        xray: String,
    },
    Http {
        base_url: String,
        client: reqwest::Client,
    },
}

impl WeatherClient {
    /// HTTP mode against an SWPC JSON base URL, e.g.
    /// `https://services.swpc.noaa.gov/json`.
    pub fn from_url(base_url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                base_url: base_url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    pub fn from_fixtures(solar_wind: &str, kp_index: &str, alerts: &str, xray: &str) -> Self {
        Self {
            mode: Mode::Fixture {
                solar_wind: solar_wind.to_string(),
                kp_index: kp_index.to_string(),
                alerts: alerts.to_string(),
                xray: xray.to_string(),
            },
        }
    }

    async fn get_feed(&self, path: &str) -> Result<String> {
        match &self.mode {
            Mode::Fixture {
                solar_wind,
                kp_index,
                alerts,
                xray,
            } => Ok(match path {
                SOLAR_WIND_PATH => solar_wind.clone(),
                KP_INDEX_PATH => kp_index.clone(),
                ALERTS_PATH => alerts.clone(),
                XRAY_PATH => xray.clone(),
                other => anyhow::bail!("no fixture for {other}"),
            }),
            Mode::Http { base_url, client } => {
                let url = format!("{base_url}{path}");
                client
                    .get(&url)
                    .header("Accept", "application/json")
                    .send()
                    .await
                    .and_then(|resp| resp.error_for_status())
                    .with_context(|| format!("noaa get {path}"))?
                    .text()
                    .await
                    .context("noaa body read")
            }
        }
    }

    /// Fetch the snapshot. Infallible surface: any failure yields a zeroed
    /// snapshot with `error` set and `Quiet` status, never an Err.
    pub async fn fetch(&self) -> SpaceWeather {
        match self.fetch_inner().await {
            Ok(w) => w,
            Err(e) => {
                tracing::warn!(target: "weather", error = ?e, "space weather fetch failed");
                counter!("weather_fetch_errors_total").increment(1);
                SpaceWeather {
                    solar_wind: SolarWind {
                        speed: 0.0,
                        density: 0.0,
                        temperature: 0.0,
                        timestamp: String::new(),
                    },
                    geomagnetic_activity: GeomagneticActivity {
                        kp_index: 0.0,
                        timestamp: String::new(),
                    },
                    solar_activity: SolarActivity {
                        xray_flux: 0.0,
                        flare_class: "N/A".into(),
                        sunspot_number: 0.0,
                        timestamp: String::new(),
                    },
                    alerts: Vec::new(),
                    last_updated: Utc::now().to_rfc3339(),
                    status: WeatherStatus::Quiet,
                    error: Some("Failed to fetch space weather data".into()),
                }
            }
        }
    }

    async fn fetch_inner(&self) -> Result<SpaceWeather> {
        let (solar_wind, kp_index, alerts, xray) = tokio::join!(
            self.get_feed(SOLAR_WIND_PATH),
            self.get_feed(KP_INDEX_PATH),
            self.get_feed(ALERTS_PATH),
            self.get_feed(XRAY_PATH),
        );

        let solar_wind: Vec<RawSolarWind> =
            serde_json::from_str(&solar_wind?).context("parsing solar wind feed")?;
        let kp_index: Vec<RawKpIndex> =
            serde_json::from_str(&kp_index?).context("parsing kp index feed")?;
        let alerts: Vec<RawAlert> = serde_json::from_str(&alerts?).context("parsing alerts feed")?;
        let xray: Vec<RawXray> = serde_json::from_str(&xray?).context("parsing xray feed")?;

        let latest_wind = solar_wind.last();
        let latest_kp = kp_index.last();
        let latest_xray = xray.last();

        let alerts: Vec<WeatherAlert> = alerts
            .into_iter()
            .map(|a| WeatherAlert {
                message_type: a.message_type.unwrap_or_default(),
                message_id: a.message_id.unwrap_or_default(),
                issue_time: format_timestamp(&a.issue_time.unwrap_or_default()),
                message: a.message.unwrap_or_default(),
                severity: a.severity.unwrap_or_default(),
            })
            .collect();

        let kp = latest_kp.and_then(|k| k.kp_index).unwrap_or(0.0);
        let status = determine_status(kp, !alerts.is_empty());

        Ok(SpaceWeather {
            solar_wind: SolarWind {
                speed: latest_wind.and_then(|w| w.speed).unwrap_or(0.0),
                density: latest_wind.and_then(|w| w.density).unwrap_or(0.0),
                temperature: latest_wind.and_then(|w| w.temperature).unwrap_or(0.0),
                timestamp: latest_wind
                    .and_then(|w| w.time_tag.clone())
                    .unwrap_or_default(),
            },
            geomagnetic_activity: GeomagneticActivity {
                kp_index: kp,
                timestamp: latest_kp
                    .and_then(|k| k.time_tag.clone())
                    .unwrap_or_default(),
            },
            solar_activity: SolarActivity {
                xray_flux: latest_xray.and_then(|x| x.flux).unwrap_or(0.0),
                flare_class: latest_xray
                    .and_then(|x| x.flare_class.clone())
                    .unwrap_or_else(|| "N/A".into()),
                sunspot_number: latest_xray.and_then(|x| x.ssn).unwrap_or(0.0),
                timestamp: latest_xray
                    .and_then(|x| x.time_tag.clone())
                    .unwrap_or_default(),
            },
            alerts,
            last_updated: Utc::now().to_rfc3339(),
            status,
            error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLAR_WIND: &str = r#"[
        { "speed": 380.0, "density": 4.1, "temperature": 95000.0, "time_tag": "2026-08-06T10:00:00Z" },
        { "speed": 412.5, "density": 5.3, "temperature": 101000.0, "time_tag": "2026-08-06T11:00:00Z" }
    ]"#;
    const KP_QUIET: &str =
        r#"[ { "kp_index": 2.0, "time_tag": "2026-08-06T11:00:00Z" } ]"#;
    const KP_STORM: &str =
        r#"[ { "kp_index": 2.0, "time_tag": "2026-08-06T08:00:00Z" }, { "kp_index": 5.7, "time_tag": "2026-08-06T11:00:00Z" } ]"#;
    const NO_ALERTS: &str = "[]";
    const ONE_ALERT: &str = r#"[ {
        "messageType": "ALTK07",
        "messageID": "1001",
        "issueTime": "2026-08-06T11:05:00Z",
        "message": "Geomagnetic K-index of 7 expected",
        "severity": "Strong"
    } ]"#;
    const XRAY: &str = r#"[
        { "flux": 1.2e-6, "class": "C1.2", "ssn": 113.0, "time_tag": "2026-08-06T11:00:00Z" }
    ]"#;

    #[test]
    fn status_thresholds() {
        assert_eq!(determine_status(0.0, false), WeatherStatus::Quiet);
        assert_eq!(determine_status(2.9, false), WeatherStatus::Quiet);
        assert_eq!(determine_status(3.0, false), WeatherStatus::Active);
        assert_eq!(determine_status(5.0, false), WeatherStatus::Storm);
        assert_eq!(determine_status(7.0, false), WeatherStatus::Severe);
        // Any active alert is severe regardless of Kp.
        assert_eq!(determine_status(1.0, true), WeatherStatus::Severe);
    }

    #[tokio::test]
    async fn snapshot_takes_latest_samples() {
        let client = WeatherClient::from_fixtures(SOLAR_WIND, KP_QUIET, NO_ALERTS, XRAY);
        let w = client.fetch().await;
        assert!(w.error.is_none());
        assert_eq!(w.solar_wind.speed, 412.5);
        assert_eq!(w.geomagnetic_activity.kp_index, 2.0);
        assert_eq!(w.solar_activity.flare_class, "C1.2");
        assert_eq!(w.status, WeatherStatus::Quiet);
        assert!(!should_notify(&w));
    }

    #[tokio::test]
    async fn storm_kp_sets_storm_status_and_notifies() {
        let client = WeatherClient::from_fixtures(SOLAR_WIND, KP_STORM, NO_ALERTS, XRAY);
        let w = client.fetch().await;
        assert_eq!(w.status, WeatherStatus::Storm);
        assert!(should_notify(&w));
    }

    #[tokio::test]
    async fn alert_forces_severe_and_formats_time() {
        let client = WeatherClient::from_fixtures(SOLAR_WIND, KP_QUIET, ONE_ALERT, XRAY);
        let w = client.fetch().await;
        assert_eq!(w.status, WeatherStatus::Severe);
        assert_eq!(w.alerts.len(), 1);
        assert_eq!(w.alerts[0].issue_time, "11:05 AM UTC");
        assert!(should_notify(&w));
    }

    #[tokio::test]
    async fn any_feed_failure_degrades_to_error_snapshot() {
        let client = WeatherClient::from_fixtures("not json", KP_QUIET, NO_ALERTS, XRAY);
        let w = client.fetch().await;
        assert!(w.error.is_some());
        assert_eq!(w.status, WeatherStatus::Quiet);
        assert_eq!(w.solar_wind.speed, 0.0);
        assert!(w.alerts.is_empty());
    }
}
