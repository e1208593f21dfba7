//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod offers;
pub mod orders;
pub mod respond;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::Error;

pub use error::ApiResult;

/// Every path served by the entity handlers.
const ENTITY_PATHS: [&str; 7] = [
    "/users",
    "/users/{id:\\d+}",
    "/orders",
    "/orders/{id:\\d+}",
    "/offers",
    "/offers/{id:\\d+}",
    "/offers{id:\\d+}",
];

async fn unknown_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no resource at {}", req.path())))
}

async fn unsupported_method(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed(format!(
        "{} is not supported on {}",
        req.method(),
        req.path()
    )))
}

/// Mount the entity routes and their extractor configuration.
///
/// Expects a `web::Data<HttpState>` to be registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use marketplace::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::replace_user)
        .service(users::delete_user)
        .service(orders::list_orders)
        .service(orders::create_order)
        .service(orders::get_order)
        .service(orders::replace_order)
        .service(orders::delete_order)
        .service(offers::list_offers)
        .service(offers::create_offer)
        .service(offers::get_offer)
        .service(offers::replace_offer)
        .service(offers::delete_offer)
        .service(offers::get_offer_unslashed)
        .service(offers::replace_offer_unslashed)
        .service(offers::delete_offer_unslashed)
        // Registered last: only requests no handler's method guard accepted land here.
        .service(web::resource(ENTITY_PATHS).to(unsupported_method))
        .default_service(web::to(unknown_route));
}
