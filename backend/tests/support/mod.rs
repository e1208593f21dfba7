//! Shared helpers for HTTP contract tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use marketplace::Trace;
use marketplace::bootstrap::seed_on_startup;
use marketplace::inbound::http::configure_api;
use marketplace::inbound::http::state::HttpState;
use marketplace::outbound::persistence::{
    DbHandle, DieselOfferRepository, DieselOrderRepository, DieselUserRepository,
};
use serde_json::Value;

/// Open a fresh in-memory store, optionally loaded with the embedded seed.
pub async fn store(seeded: bool) -> DbHandle {
    let db = DbHandle::in_memory().expect("open in-memory store");
    seed_on_startup(seeded, None, &db)
        .await
        .expect("seed store");
    db
}

/// Full API over `db`, wrapped in the tracing middleware.
pub async fn app(
    db: &DbHandle,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let state = HttpState::new(
        Arc::new(DieselUserRepository::new(db.clone())),
        Arc::new(DieselOrderRepository::new(db.clone())),
        Arc::new(DieselOfferRepository::new(db.clone())),
    );
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

/// Parse a JSON response body.
pub fn json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("response body is JSON")
}
