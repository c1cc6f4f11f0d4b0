// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod classify;
pub mod config;
pub mod events;
pub mod facts;
pub mod metrics;
pub mod notify;
pub mod quiz;
pub mod watcher;
pub mod weather;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::events::types::{AggregatedEvents, ApodEvent, DataSource, HistoricalEvent};
pub use crate::events::EventAggregator;
pub use crate::notify::{AlertPayload, Notifier, NotifierMux};
