//! Order API handlers.
//!
//! Dates travel as `YYYY-MM-DD` strings in both directions.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::OrderFields;
use crate::inbound::http::ApiResult;
use crate::inbound::http::respond;
use crate::inbound::http::schemas::{ErrorSchema, OrderSchema};
use crate::inbound::http::state::HttpState;

/// Body for `POST /orders`. Absent fields are stored as null.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewOrderRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "2013-02-08")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2038-05-25")]
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub price: Option<i32>,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<NewOrderRequest> for OrderFields {
    fn from(value: NewOrderRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            start_date: value.start_date,
            end_date: value.end_date,
            address: value.address,
            price: value.price,
            customer_id: value.customer_id,
            executor_id: value.executor_id,
        }
    }
}

/// Body for `PUT /orders/{id}`: every key present, `null` allowed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceOrderRequest {
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub address: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price: Option<i32>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub customer_id: Option<i32>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub executor_id: Option<i32>,
}

impl From<ReplaceOrderRequest> for OrderFields {
    fn from(value: ReplaceOrderRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            start_date: value.start_date,
            end_date: value.end_date,
            address: value.address,
            price: value.price,
            customer_id: value.customer_id,
            executor_id: value.executor_id,
        }
    }
}

/// List every order in id order.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Orders", body = [OrderSchema], content_type = "application/json; charset=utf-8"),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
pub async fn list_orders(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let orders = state.orders.list().await?;
    respond::records(&orders)
}

/// Create an order. User references are not checked.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = NewOrderRequest,
    responses(
        (status = 201, description = "Order created; empty body"),
        (status = 400, description = "Malformed body, bad date or unknown field", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/orders")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<NewOrderRequest>,
) -> ApiResult<HttpResponse> {
    let fields = OrderFields::from(payload.into_inner());
    state.orders.create(&fields).await?;
    Ok(respond::empty(StatusCode::CREATED))
}

/// Fetch one order.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = OrderSchema, content_type = "application/json; charset=utf-8"),
        (status = 404, description = "No such order", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/orders/{id:\\d+}")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let order = state.orders.find(path.into_inner()).await?;
    respond::record(&order)
}

/// Replace every field of an order.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = ReplaceOrderRequest,
    responses(
        (status = 204, description = "Order replaced"),
        (status = 400, description = "An order field is missing or mistyped", body = ErrorSchema),
        (status = 404, description = "No such order", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "replaceOrder"
)]
#[put("/orders/{id:\\d+}")]
pub async fn replace_order(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ReplaceOrderRequest>,
) -> ApiResult<HttpResponse> {
    let fields = OrderFields::from(payload.into_inner());
    state.orders.replace(path.into_inner(), &fields).await?;
    Ok(respond::empty(StatusCode::NO_CONTENT))
}

/// Delete an order. Answers 200 with an empty body.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted; empty body"),
        (status = 404, description = "No such order", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "deleteOrder"
)]
#[delete("/orders/{id:\\d+}")]
pub async fn delete_order(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.orders.delete(path.into_inner()).await?;
    Ok(respond::empty(StatusCode::OK))
}
