//! Readiness and liveness probes.
//!
//! Readiness flips once the store is seeded and the listener is bound.
//! Liveness answers 200 whenever a worker can serve the request at all.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness flag shared between the bootstrap code and the probe handler.
#[derive(Debug, Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// New state, not yet ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the server is bound and serving.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

fn uncached(mut response: actix_web::HttpResponseBuilder) -> HttpResponse {
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 200 once seeding finished and the listener is bound.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Seeded and accepting traffic"),
        (status = 503, description = "Still starting")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if state.is_ready() {
        uncached(HttpResponse::Ok())
    } else {
        uncached(HttpResponse::ServiceUnavailable())
    }
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Process is serving requests"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    uncached(HttpResponse::Ok())
}
