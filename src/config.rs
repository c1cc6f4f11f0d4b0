// src/config.rs
//! Environment-driven service configuration. `.env` is loaded at boot in
//! dev; every value has a production-safe default.

pub const ENV_NASA_API_KEY: &str = "NASA_API_KEY";
pub const ENV_WIKIPEDIA_BASE_URL: &str = "WIKIPEDIA_BASE_URL";
pub const ENV_NASA_APOD_URL: &str = "NASA_APOD_URL";
pub const ENV_NOAA_BASE_URL: &str = "NOAA_BASE_URL";
pub const ENV_APOD_YEARS_BACK: &str = "APOD_YEARS_BACK";
pub const ENV_DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_WEATHER_POLL_SECS: &str = "WEATHER_POLL_SECS";

pub const DEFAULT_WIKIPEDIA_BASE_URL: &str = "https://api.wikimedia.org/feed/v1/wikipedia/en";
pub const DEFAULT_NASA_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_NOAA_BASE_URL: &str = "https://services.swpc.noaa.gov/json";
pub const DEFAULT_APOD_YEARS_BACK: u32 = 10;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_WEATHER_POLL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// APOD key; the public rate-limited DEMO_KEY when unset.
    pub nasa_api_key: String,
    pub wikipedia_base_url: String,
    pub nasa_apod_url: String,
    pub noaa_base_url: String,
    /// How many previous years the APOD history batch covers.
    pub apod_years_back: u32,
    /// Weather alert webhook; notifications are disabled when unset.
    pub discord_webhook_url: Option<String>,
    pub bind_addr: String,
    pub weather_poll_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            nasa_api_key: env_or(ENV_NASA_API_KEY, crate::events::providers::nasa::DEMO_API_KEY),
            wikipedia_base_url: env_or(ENV_WIKIPEDIA_BASE_URL, DEFAULT_WIKIPEDIA_BASE_URL),
            nasa_apod_url: env_or(ENV_NASA_APOD_URL, DEFAULT_NASA_APOD_URL),
            noaa_base_url: env_or(ENV_NOAA_BASE_URL, DEFAULT_NOAA_BASE_URL),
            apod_years_back: parse_env(ENV_APOD_YEARS_BACK, DEFAULT_APOD_YEARS_BACK),
            discord_webhook_url: std::env::var(ENV_DISCORD_WEBHOOK_URL)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            bind_addr: env_or(ENV_BIND_ADDR, DEFAULT_BIND_ADDR),
            weather_poll_secs: parse_env(ENV_WEATHER_POLL_SECS, DEFAULT_WEATHER_POLL_SECS),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}
