// src/events/providers/wikipedia.rs
//! Wikipedia "on this day" provider: fetches the feed for a month/day and
//! keeps only space-related events, links resolved to (title, url).

use anyhow::{Context, Result};
use metrics::{counter, histogram};
use serde::Deserialize;

use crate::classify::KeywordClassifier;
use crate::events::normalize_text;
use crate::events::types::{EventLink, HistoricalEvent};

pub const USER_AGENT: &str = "StellarVerse/1.0 (education project)";

#[derive(Debug, Deserialize)]
struct OnThisDayFeed {
    #[serde(default)]
    events: Vec<FeedEvent>,
}

#[derive(Debug, Deserialize)]
struct FeedEvent {
    text: Option<String>,
    year: Option<i32>,
    #[serde(default)]
    pages: Vec<FeedPage>,
}

#[derive(Debug, Deserialize)]
struct FeedPage {
    normalizedtitle: Option<String>,
    title: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    page: Option<String>,
}

pub struct WikipediaOnThisDay {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http {
        base_url: String,
        client: reqwest::Client,
    },
}

impl WikipediaOnThisDay {
    /// HTTP mode against a feed base URL, e.g.
    /// `https://api.wikimedia.org/feed/v1/wikipedia/en`.
    pub fn from_url(base_url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                base_url: base_url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    /// Fixture mode: parse a canned feed body instead of hitting the network.
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    /// Fetch the feed for `month`/`day` (year-agnostic) and return the
    /// space-related events in feed order. Zero qualifying events is a valid
    /// empty result, not an error; transport and parse failures are errors
    /// for the aggregator to absorb.
    pub async fn fetch_space_events(
        &self,
        month: u32,
        day: u32,
        classifier: &KeywordClassifier,
    ) -> Result<Vec<HistoricalEvent>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_space_events_from_str(s, classifier),
            Mode::Http { base_url, client } => {
                let url = format!("{base_url}/onthisday/events/{month}/{day}");
                let body = match client
                    .get(&url)
                    .header("Accept", "application/json")
                    .header("User-Agent", USER_AGENT)
                    .send()
                    .await
                    .and_then(|resp| resp.error_for_status())
                {
                    Ok(resp) => resp.text().await.context("onthisday body read")?,
                    Err(e) => {
                        counter!("wiki_fetch_errors_total").increment(1);
                        return Err(e).context("onthisday http get");
                    }
                };
                Self::parse_space_events_from_str(&body, classifier)
            }
        }
    }

    fn parse_space_events_from_str(
        s: &str,
        classifier: &KeywordClassifier,
    ) -> Result<Vec<HistoricalEvent>> {
        let t0 = std::time::Instant::now();
        let feed: OnThisDayFeed = serde_json::from_str(s).context("parsing onthisday json")?;
        counter!("wiki_events_total").increment(feed.events.len() as u64);

        let mut out = Vec::new();
        for ev in feed.events {
            let text = normalize_text(ev.text.as_deref().unwrap_or_default());
            if text.is_empty() || !classifier.is_space_related(&text) {
                continue;
            }
            let Some(year) = ev.year else {
                continue;
            };
            tracing::trace!(
                target: "events",
                year,
                matched = ?classifier.matched_keywords(&text),
                "space event kept"
            );
            out.push(HistoricalEvent {
                year,
                description: text,
                links: ev.pages.into_iter().filter_map(page_link).collect(),
            });
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("wiki_parse_ms").record(ms);
        counter!("wiki_events_kept_total").increment(out.len() as u64);
        Ok(out)
    }
}

/// The feed prefers `normalizedtitle` over `title`; pages without a desktop
/// URL keep an empty url rather than being dropped, as the UI renders the
/// title regardless.
fn page_link(page: FeedPage) -> Option<EventLink> {
    let title = page
        .normalizedtitle
        .or(page.title)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())?;
    let url = page
        .content_urls
        .and_then(|c| c.desktop)
        .and_then(|d| d.page)
        .unwrap_or_default();
    Some(EventLink { title, url })
}
