//! Health endpoint for orchestrators and load balancers.
//!
//! The probe reports healthy only once start-up has finished and until the
//! server begins draining.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::to_iso8601;
use crate::inbound::http::state::HttpState;

/// Readiness and liveness flags shared across workers.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Start not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start-up finished; traffic may flow.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Report unhealthy from now on, e.g. while draining.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// True when ready and still live.
    pub fn is_healthy(&self) -> bool {
        self.ready.load(Ordering::Acquire) && self.live.load(Ordering::Acquire)
    }
}

/// Health probe body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `unavailable`.
    #[schema(example = "healthy")]
    pub status: String,
    /// Human-readable detail.
    #[schema(example = "API is running")]
    pub message: String,
    /// Probe time.
    #[schema(example = "2023-01-15T10:30:00Z")]
    pub timestamp: String,
}

/// Report service health.
#[utoipa::path(
    get,
    path = "/api/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is starting or draining", body = HealthResponse)
    ),
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(
    health_state: web::Data<HealthState>,
    state: web::Data<HttpState>,
) -> HttpResponse {
    let timestamp = to_iso8601(state.clock.utc());
    let (mut builder, body) = if health_state.is_healthy() {
        (
            HttpResponse::Ok(),
            HealthResponse {
                status: "healthy".to_owned(),
                message: "API is running".to_owned(),
                timestamp,
            },
        )
    } else {
        (
            HttpResponse::ServiceUnavailable(),
            HealthResponse {
                status: "unavailable".to_owned(),
                message: "API is not accepting traffic".to_owned(),
                timestamp,
            },
        )
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(body)
}
