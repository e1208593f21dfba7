//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use marketplace::Trace;
#[cfg(debug_assertions)]
use marketplace::doc::ApiDoc;
use marketplace::inbound::http::configure_api;
use marketplace::inbound::http::health::{HealthState, live, ready};
use marketplace::inbound::http::state::HttpState;
use marketplace::outbound::persistence::{
    DbHandle, DieselOfferRepository, DieselOrderRepository, DieselUserRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(db: &DbHandle) -> HttpState {
    HttpState::new(
        Arc::new(DieselUserRepository::new(db.clone())),
        Arc::new(DieselOrderRepository::new(db.clone())),
        Arc::new(DieselOfferRepository::new(db.clone())),
    )
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(configure_api)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db } = config;
    let http_state = web::Data::new(build_http_state(&db));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    info!(%bind_addr, database_url = db.database_url(), "listening");
    Ok(server)
}
