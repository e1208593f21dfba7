//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every entity endpoint, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by `cargo run --bin
//! openapi-dump`.
//!
//! The unslashed `/offers{id}` aliases share their handlers with
//! `/offers/{id}` and are not listed separately.

use utoipa::OpenApi;

use crate::inbound::http::offers::{NewOfferRequest, ReplaceOfferRequest};
use crate::inbound::http::orders::{NewOrderRequest, ReplaceOrderRequest};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, OfferSchema, OrderSchema, UserSchema,
};
use crate::inbound::http::users::{NewUserRequest, ReplaceUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketplace API",
        description = "CRUD interface for marketplace users, orders and offers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::replace_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::replace_order,
        crate::inbound::http::orders::delete_order,
        crate::inbound::http::offers::list_offers,
        crate::inbound::http::offers::create_offer,
        crate::inbound::http::offers::get_offer,
        crate::inbound::http::offers::replace_offer,
        crate::inbound::http::offers::delete_offer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        OrderSchema,
        OfferSchema,
        ErrorSchema,
        ErrorCodeSchema,
        NewUserRequest,
        ReplaceUserRequest,
        NewOrderRequest,
        ReplaceOrderRequest,
        NewOfferRequest,
        ReplaceOfferRequest,
    )),
    tags(
        (name = "users", description = "Marketplace participants"),
        (name = "orders", description = "Jobs posted by customers"),
        (name = "offers", description = "Executor bids on orders"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
