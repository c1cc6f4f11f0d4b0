// tests/aggregate_events.rs
//
// Fallback policy and end-to-end aggregation over fixture providers.

use std::collections::HashMap;
use std::fs;

use chrono::NaiveDate;
use stellarverse_events::classify::{KeywordClassifier, DEFAULT_KEYWORDS_TOML};
use stellarverse_events::events::providers::{nasa::ApodClient, wikipedia::WikipediaOnThisDay};
use stellarverse_events::events::EventAggregator;
use stellarverse_events::DataSource;

fn classifier() -> KeywordClassifier {
    KeywordClassifier::from_toml_str(DEFAULT_KEYWORDS_TOML).expect("default keywords")
}

fn apod_body(date: &str, media_type: &str) -> String {
    format!(
        r#"{{
            "title": "Picture for {date}",
            "explanation": "Explanation for {date}.",
            "url": "https://apod.nasa.gov/{date}.jpg",
            "media_type": "{media_type}",
            "date": "{date}"
        }}"#
    )
}

fn apod_fixtures(month_day: &str, years: &[i32]) -> HashMap<String, String> {
    years
        .iter()
        .map(|y| {
            let date = format!("{y}-{month_day}");
            (date.clone(), apod_body(&date, "image"))
        })
        .collect()
}

fn wiki_fixture(name: &str) -> WikipediaOnThisDay {
    let body = fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|_| panic!("missing tests/fixtures/{name}"));
    WikipediaOnThisDay::from_fixture_str(&body)
}

#[tokio::test]
async fn live_space_events_tag_and_order() {
    let agg = EventAggregator::new(
        wiki_fixture("onthisday_july20.json"),
        ApodClient::from_fixtures(HashMap::new()),
        classifier(),
        10,
    );
    let result = agg
        .aggregate_for_date(NaiveDate::from_ymd_opt(2025, 7, 20).unwrap())
        .await;

    assert_eq!(result.data_source, DataSource::SpaceEventsToday);
    assert_eq!(result.date, "July 20, 2025");
    assert_eq!(result.events.len(), 2);
    // Feed order preserved.
    assert_eq!(result.events[0].year, 1969);
    assert_eq!(result.events[1].year, 1976);
    // NASA lane empty is valid, and never an error.
    assert!(result.nasa_events.is_empty());
    assert!(result.error.is_none());
}

#[tokio::test]
async fn zero_qualifying_events_substitutes_the_five_milestones() {
    let agg = EventAggregator::new(
        wiki_fixture("onthisday_no_space.json"),
        ApodClient::from_fixtures(HashMap::new()),
        classifier(),
        10,
    );
    let result = agg
        .aggregate_for_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        .await;

    assert_eq!(result.data_source, DataSource::MockSpaceEvents);
    assert_eq!(result.events.len(), 5);
    let years: Vec<i32> = result.events.iter().map(|e| e.year).collect();
    assert_eq!(years, vec![1969, 1957, 1990, 1997, 1961]);
    assert!(result.error.is_none());
}

#[tokio::test]
async fn wikipedia_failure_also_falls_back_without_error() {
    let agg = EventAggregator::new(
        WikipediaOnThisDay::from_fixture_str("<html>bad gateway</html>"),
        ApodClient::from_fixtures(HashMap::new()),
        classifier(),
        10,
    );
    let result = agg
        .aggregate_for_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        .await;

    assert_eq!(result.data_source, DataSource::MockSpaceEvents);
    assert_eq!(result.events.len(), 5);
    assert!(result.error.is_none());
}

#[tokio::test]
async fn nasa_lane_attaches_independently_of_wikipedia_outcome() {
    // Wikipedia lane fails; 7 of 10 NASA years succeed.
    let years = [2015, 2016, 2017, 2018, 2019, 2020, 2021];
    let agg = EventAggregator::new(
        WikipediaOnThisDay::from_fixture_str("not json"),
        ApodClient::from_fixtures(apod_fixtures("03-14", &years)),
        classifier(),
        10,
    );
    let result = agg
        .aggregate_for_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        .await;

    assert_eq!(result.data_source, DataSource::MockSpaceEvents);
    assert_eq!(result.nasa_events.len(), 7);
    assert!(result.nasa_events.iter().all(|e| e.media_type == "image"));
}

#[tokio::test]
async fn july20_end_to_end_scenario() {
    // Apollo event passes the classifier; NASA succeeds for 2015-2020 and
    // fails for 2021-2024.
    let nasa_years = [2015, 2016, 2017, 2018, 2019, 2020];
    let agg = EventAggregator::new(
        wiki_fixture("onthisday_july20.json"),
        ApodClient::from_fixtures(apod_fixtures("07-20", &nasa_years)),
        classifier(),
        10,
    );
    let result = agg
        .aggregate_for_date(NaiveDate::from_ymd_opt(2025, 7, 20).unwrap())
        .await;

    assert_eq!(result.data_source, DataSource::SpaceEventsToday);
    assert!(result
        .events
        .iter()
        .any(|e| e.description.contains("Apollo")));
    assert_eq!(result.nasa_events.len(), 6);
    assert!(result.error.is_none());
}
