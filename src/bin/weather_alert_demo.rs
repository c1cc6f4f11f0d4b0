//! Demo that pushes a few synthetic weather alerts through the multiplexer
//! (log only when no channel is configured).

use chrono::Utc;
use stellarverse_events::config::AppConfig;
use stellarverse_events::{AlertPayload, NotifierMux};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    let _ = dotenvy::dotenv();

    let mux = NotifierMux::from_config(&AppConfig::from_env());
    if mux.is_empty() {
        println!("no alert channel configured; set DISCORD_WEBHOOK_URL to deliver");
    }

    let seq = [
        ("active", 3.7, 0),
        ("storm", 5.3, 0),
        ("severe", 7.2, 2),
    ];

    for (status, kp, alerts) in seq {
        let payload = AlertPayload {
            status: status.into(),
            kp_index: kp,
            alert_count: alerts,
            headline: format!("Kp index at {kp:.1}"),
            timestamp_iso: Utc::now().to_rfc3339(),
        };
        mux.notify(&payload).await;
        tokio::time::sleep(std::time::Duration::from_millis(400)).await;
    }

    println!("weather-alert-demo done");
}
