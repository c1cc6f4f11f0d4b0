// src/events/providers/nasa.rs
//! NASA APOD provider: one record per date, plus the concurrent multi-year
//! batch used for the "this day across the last decade" section.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use futures::future::join_all;
use metrics::counter;
use serde::Deserialize;

use crate::events::types::ApodEvent;

pub const DEMO_API_KEY: &str = "DEMO_KEY";

#[derive(Debug, Deserialize)]
struct ApodResponse {
    title: String,
    explanation: String,
    url: String,
    hdurl: Option<String>,
    media_type: String,
    date: String,
    copyright: Option<String>,
}

impl From<ApodResponse> for ApodEvent {
    fn from(r: ApodResponse) -> Self {
        ApodEvent {
            date: r.date,
            title: r.title,
            explanation: r.explanation,
            url: r.url,
            hdurl: r.hdurl,
            media_type: r.media_type,
            copyright: r.copyright.map(|c| c.trim().to_string()),
        }
    }
}

pub struct ApodClient {
    api_key: String,
    mode: Mode,
}

enum Mode {
    /// Canned bodies keyed by ISO date; an absent key behaves like a failed
    /// request for that date.
    Fixture(HashMap<String, String>),
    Http {
        base_url: String,
        client: reqwest::Client,
    },
}

impl ApodClient {
    /// HTTP mode against the APOD endpoint, e.g.
    /// `https://api.nasa.gov/planetary/apod`.
    pub fn from_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            mode: Mode::Http {
                base_url: base_url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    pub fn from_fixtures(bodies: HashMap<String, String>) -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            mode: Mode::Fixture(bodies),
        }
    }

    /// Fetch the APOD record for one date. Transport failures, non-2xx
    /// statuses, and malformed bodies are errors; media type is not checked
    /// here (the batch filter owns that).
    pub async fn fetch_for_date(&self, date: NaiveDate) -> Result<ApodEvent> {
        let iso = date.format("%Y-%m-%d").to_string();
        let body = match &self.mode {
            Mode::Fixture(bodies) => bodies
                .get(&iso)
                .cloned()
                .with_context(|| format!("no fixture for {iso}"))?,
            Mode::Http { base_url, client } => {
                client
                    .get(base_url)
                    .query(&[("api_key", self.api_key.as_str()), ("date", iso.as_str())])
                    .header("Accept", "application/json")
                    .send()
                    .await
                    .and_then(|resp| resp.error_for_status())
                    .with_context(|| format!("apod http get for {iso}"))?
                    .text()
                    .await
                    .context("apod body read")?
            }
        };
        let parsed: ApodResponse =
            serde_json::from_str(&body).with_context(|| format!("parsing apod json for {iso}"))?;
        Ok(parsed.into())
    }

    /// Fetch the APOD records for `month`/`day` across the previous
    /// `years_back` years (`latest_year - 1 ..= latest_year - years_back`),
    /// all requests in flight concurrently. A failed year yields no result
    /// without affecting the others; non-image media is dropped. Output order
    /// is the settle order of the batch, not guaranteed chronological.
    pub async fn fetch_history(
        &self,
        month: u32,
        day: u32,
        latest_year: i32,
        years_back: u32,
    ) -> Vec<ApodEvent> {
        let mut requests = Vec::with_capacity(years_back as usize);
        for offset in 1..=years_back as i32 {
            let year = latest_year - offset;
            // Feb 29 has no counterpart in non-leap years; that year simply
            // contributes no result.
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            requests.push(self.fetch_for_date(date));
        }

        let mut out = Vec::new();
        for settled in join_all(requests).await {
            match settled {
                Ok(ev) if ev.media_type == "image" => out.push(ev),
                Ok(ev) => {
                    tracing::debug!(target: "events", date = %ev.date, media_type = %ev.media_type, "apod non-image dropped");
                    counter!("apod_non_image_total").increment(1);
                }
                Err(e) => {
                    tracing::warn!(target: "events", error = ?e, "apod year failed");
                    counter!("apod_fetch_errors_total").increment(1);
                }
            }
        }
        counter!("apod_events_kept_total").increment(out.len() as u64);
        out
    }
}
