//! The two demo routes.
//!
//! `/fast` answers immediately; `/slow` waits [`SLOW_DELAY`] first. Firing a
//! small share of traffic at `/slow` is what makes the p99 spike visible.

use axum::Json;
use p99spike_core::message::SLOW_DELAY;
use p99spike_core::Message;

pub async fn fast() -> Json<Message> {
    Json(Message::fast())
}

pub async fn slow() -> Json<Message> {
    tracing::debug!(delay_ms = SLOW_DELAY.as_millis() as u64, "slow route sleeping");
    // Timer sleep: parks the task, the worker thread stays free.
    tokio::time::sleep(SLOW_DELAY).await;
    Json(Message::slow())
}
