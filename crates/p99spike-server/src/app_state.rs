//! Shared application state.
//!
//! Immutable after startup; axum clones it per request.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    started_at: Instant,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}
