//! Response payloads for the demo routes.
//!
//! Both routes answer with a single-key object, `{"message": "..."}`,
//! built fresh per request.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const FAST_MESSAGE: &str = "Fast response!";
pub const SLOW_MESSAGE: &str = "Slow response!";

/// Unconditional delay applied by the slow route before it answers.
pub const SLOW_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn fast() -> Self {
        Self { message: FAST_MESSAGE.to_string() }
    }

    pub fn slow() -> Self {
        Self { message: SLOW_MESSAGE.to_string() }
    }
}

/// Liveness payload: `{"status": "ok", "uptime": <seconds>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub uptime: f64,
}

impl Health {
    pub fn ok(uptime: Duration) -> Self {
        Self {
            status: "ok".to_string(),
            uptime: uptime.as_secs_f64(),
        }
    }
}
