//! Axum router wiring.
//!
//! Every response, including the framework's 404/405 fallbacks, passes
//! through a permissive CORS layer.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{app_state::AppState, demo, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/fast", get(demo::fast))
        .route("/slow", get(demo::slow))
        .route("/healthz", get(ops::healthz))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
