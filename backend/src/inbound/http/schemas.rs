//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror the JSON each entity serialises to and live in the
//! inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body is malformed or misses a required field.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No entity exists for the requested identifier.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource does not accept the request method.
    #[schema(rename = "method_not_allowed")]
    MethodNotAllowed,
    /// The backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user 7 not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Hudson")]
    first_name: Option<String>,
    #[schema(example = "Pautot")]
    last_name: Option<String>,
    #[schema(example = 34)]
    age: Option<i32>,
    email: Option<String>,
    #[schema(example = "customer")]
    role: Option<String>,
    phone: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Order`].
#[derive(ToSchema)]
#[schema(as = Order)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OrderSchema {
    #[schema(example = 1)]
    id: i32,
    name: Option<String>,
    description: Option<String>,
    /// Calendar date rendered `YYYY-MM-DD`.
    #[schema(format = Date, example = "2013-02-08")]
    start_date: Option<String>,
    /// Calendar date rendered `YYYY-MM-DD`.
    #[schema(format = Date, example = "2038-05-25")]
    end_date: Option<String>,
    address: Option<String>,
    price: Option<i32>,
    /// User id; not checked against stored users.
    customer_id: Option<i32>,
    /// User id; not checked against stored users.
    executor_id: Option<i32>,
}

/// OpenAPI schema for [`crate::domain::Offer`].
#[derive(ToSchema)]
#[schema(as = Offer)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OfferSchema {
    #[schema(example = 1)]
    id: i32,
    order_id: Option<i32>,
    executor_id: Option<i32>,
}
