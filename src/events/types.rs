// src/events/types.rs
use serde::{Deserialize, Serialize};

/// A linked reference page for a historical event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLink {
    pub title: String,
    pub url: String,
}

/// A Wikipedia-sourced "on this day" event. Built fresh on every fetch and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub year: i32,
    pub description: String,
    #[serde(default)]
    pub links: Vec<EventLink>,
}

/// A NASA Astronomy-Picture-of-the-Day record. One per (month/day, year)
/// successfully fetched; only `media_type == "image"` records are retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApodEvent {
    pub date: String,
    pub title: String,
    pub explanation: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Provenance of the Wikipedia lane of an aggregated result. NASA events are
/// additive and carry no tag of their own. The current fallback policy emits
/// only `SpaceEventsToday` and `MockSpaceEvents`; the remaining variants are
/// part of the wire contract the UI switches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    SpaceEventsToday,
    MockSpaceEvents,
    GeneralEventsToday,
    NasaApodEvents,
}

/// The composed response for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEvents {
    /// Display date, e.g. "July 20, 2026".
    pub date: String,
    /// Wikipedia lane (live or mock, per `data_source`), feed order preserved.
    pub events: Vec<HistoricalEvent>,
    /// NASA lane, best-effort; empty is valid and renders no section.
    pub nasa_events: Vec<ApodEvent>,
    pub data_source: DataSource,
    /// Reserved for truly unexpected failures; expected failure modes degrade
    /// to fallback content instead and leave this `None`.
    #[serde(default)]
    pub error: Option<String>,
}
