//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness, with process uptime

use axum::{extract::State, Json};
use p99spike_core::Health;

use crate::app_state::AppState;

pub async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health::ok(state.uptime()))
}
