use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::events::types::AggregatedEvents;
use crate::events::EventAggregator;
use crate::facts;
use crate::quiz;
use crate::weather::{SpaceWeather, WeatherClient};

#[derive(Clone)]
pub struct AppState {
    aggregator: Arc<EventAggregator>,
    weather: Arc<WeatherClient>,
}

impl AppState {
    pub fn new(aggregator: EventAggregator, weather: WeatherClient) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            weather: Arc::new(weather),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            EventAggregator::from_config(cfg)?,
            WeatherClient::from_url(&cfg.noaa_base_url),
        ))
    }

    pub fn weather_client(&self) -> Arc<WeatherClient> {
        self.weather.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/events", get(events))
        .route("/weather", get(weather))
        .route("/quiz", get(quiz_list))
        .route("/quiz/{id}", get(quiz_get))
        .route("/quiz/{id}/answer", post(quiz_answer))
        .route("/facts/today", get(fact_today))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct EventsQuery {
    /// ISO date (YYYY-MM-DD); today (UTC) when absent.
    date: Option<NaiveDate>,
}

async fn events(
    State(state): State<AppState>,
    Query(q): Query<EventsQuery>,
) -> Json<AggregatedEvents> {
    let date = q.date.unwrap_or_else(|| Utc::now().date_naive());
    Json(state.aggregator.aggregate_for_date(date).await)
}

async fn weather(State(state): State<AppState>) -> Json<SpaceWeather> {
    Json(state.weather.fetch().await)
}

async fn quiz_list() -> Json<Vec<quiz::QuizQuestionPublic>> {
    Json(quiz::public_list())
}

async fn quiz_get(
    Path(id): Path<u32>,
) -> Result<Json<quiz::QuizQuestionPublic>, StatusCode> {
    quiz::get(id)
        .map(|q| Json(q.into()))
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Deserialize)]
struct AnswerReq {
    choice: usize,
}

async fn quiz_answer(
    Path(id): Path<u32>,
    Json(body): Json<AnswerReq>,
) -> Result<Json<quiz::AnswerCheck>, StatusCode> {
    quiz::check_answer(id, body.choice)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Serialize)]
struct FactResponse {
    date: String,
    fact: &'static str,
}

async fn fact_today() -> Json<FactResponse> {
    let today = Utc::now().date_naive();
    Json(FactResponse {
        date: today.format("%Y-%m-%d").to_string(),
        fact: facts::fact_for_date(today),
    })
}
