// src/events/mod.rs
//! Historical event aggregation: the Wikipedia and NASA lanes run
//! concurrently, partial failure degrades to fallback content, and the
//! result is tagged with the provenance of the Wikipedia lane.

pub mod mock;
pub mod providers;
pub mod types;

use chrono::{Datelike, NaiveDate, Utc};
use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

use crate::classify::KeywordClassifier;
use crate::config::AppConfig;
use crate::events::providers::{nasa::ApodClient, wikipedia::WikipediaOnThisDay};
use crate::events::types::{AggregatedEvents, DataSource};

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("wiki_events_total", "Total events parsed from the onthisday feed.");
        describe_counter!(
            "wiki_events_kept_total",
            "Events kept after space-keyword filtering."
        );
        describe_counter!("wiki_fetch_errors_total", "Wikipedia feed HTTP fetch errors.");
        describe_histogram!("wiki_parse_ms", "Feed parse time in milliseconds.");
        describe_counter!("apod_events_kept_total", "APOD records kept (image media only).");
        describe_counter!("apod_fetch_errors_total", "APOD per-year fetch failures.");
        describe_counter!("apod_non_image_total", "APOD records dropped for non-image media.");
        describe_counter!(
            "events_fallback_total",
            "Aggregations that substituted the mock milestone list."
        );
    });
}

/// Normalize feed text: HTML entity decode, collapse whitespace, trim.
pub fn normalize_text(s: &str) -> String {
    let decoded = html_escape::decode_html_entities(s).to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&decoded, " ").trim().to_string()
}

/// Display form used by the UI, e.g. "July 20, 1969".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Runs both provider lanes and applies the fallback policy. Holds no state
/// between calls; every request composes its own result.
pub struct EventAggregator {
    wikipedia: WikipediaOnThisDay,
    nasa: ApodClient,
    classifier: KeywordClassifier,
    years_back: u32,
}

impl EventAggregator {
    pub fn new(
        wikipedia: WikipediaOnThisDay,
        nasa: ApodClient,
        classifier: KeywordClassifier,
        years_back: u32,
    ) -> Self {
        ensure_metrics_described();
        Self {
            wikipedia,
            nasa,
            classifier,
            years_back,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            WikipediaOnThisDay::from_url(&cfg.wikipedia_base_url),
            ApodClient::from_url(&cfg.nasa_apod_url, &cfg.nasa_api_key),
            KeywordClassifier::from_env()?,
            cfg.apod_years_back,
        ))
    }

    /// Aggregate for today's UTC date.
    pub async fn aggregate_today(&self) -> AggregatedEvents {
        self.aggregate_for_date(Utc::now().date_naive()).await
    }

    /// Aggregate for one calendar date. Infallible by policy: the Wikipedia
    /// lane degrades to the mock milestone list, the NASA lane to an empty
    /// section, and `error` stays `None` for every expected failure mode.
    pub async fn aggregate_for_date(&self, date: NaiveDate) -> AggregatedEvents {
        let (month, day) = (date.month(), date.day());

        let (wiki, nasa_events) = tokio::join!(
            self.wikipedia
                .fetch_space_events(month, day, &self.classifier),
            self.nasa.fetch_history(month, day, date.year(), self.years_back),
        );

        let (events, data_source) = match wiki {
            Ok(events) if !events.is_empty() => (events, DataSource::SpaceEventsToday),
            Ok(_) => {
                tracing::info!(target: "events", %date, "no space events in feed, using milestones");
                counter!("events_fallback_total").increment(1);
                (mock::space_milestones(), DataSource::MockSpaceEvents)
            }
            Err(e) => {
                tracing::warn!(target: "events", %date, error = ?e, "wikipedia lane failed, using milestones");
                counter!("events_fallback_total").increment(1);
                (mock::space_milestones(), DataSource::MockSpaceEvents)
            }
        };

        AggregatedEvents {
            date: format_display_date(date),
            events,
            nasa_events,
            data_source,
            error: None,
        }
    }
}
