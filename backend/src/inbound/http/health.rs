//! Orchestrator probes.
//!
//! `/health/live` answers as long as the process serves HTTP.
//! `/health/ready` additionally requires a bound listener and an account
//! store that answers lookups, since every gated request depends on it.
//! Neither probe sits behind the bearer gate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, ResponseError, get, web};
use tracing::warn;

use crate::domain::ports::AccountRepository;
use crate::domain::{AccountFilter, Error};
use crate::inbound::http::schemas::ErrorSchema;

/// Readiness inputs shared between the server bootstrap and the probes.
pub struct HealthState {
    listening: AtomicBool,
    accounts: Arc<dyn AccountRepository>,
}

impl HealthState {
    /// Track readiness of `accounts`; not ready until the listener binds.
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self {
            listening: AtomicBool::new(false),
            accounts,
        }
    }

    /// Record that the HTTP listener is bound.
    pub fn mark_listening(&self) {
        self.listening.store(true, Ordering::Release);
    }

    /// Whether the HTTP listener has been bound.
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }

    /// Succeeds once listening and the account store answers a lookup.
    pub async fn check_ready(&self) -> Result<(), Error> {
        if !self.is_listening() {
            return Err(Error::service_unavailable("server is still starting"));
        }
        self.accounts
            .find(&AccountFilter::default())
            .await
            .map(|_| ())
            .map_err(|err| {
                warn!(error = %err, "account store failed readiness check");
                Error::service_unavailable("account store unavailable")
            })
    }
}

fn no_store(mut response: HttpResponse) -> HttpResponse {
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

/// Readiness probe: 200 once listening with a reachable account store.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Ready to authenticate requests"),
        (status = 503, description = "Starting up or store unavailable", body = ErrorSchema)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let response = match state.check_ready().await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => err.error_response(),
    };
    no_store(response)
}

/// Liveness probe: 200 whenever the process answers.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses((status = 200, description = "Process is serving HTTP"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    no_store(HttpResponse::Ok().finish())
}
