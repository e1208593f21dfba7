//! Offer API handlers.
//!
//! Single offers are served at both `/offers/{id}` and the historical
//! `/offers{id}` form (no slash before the id). The two spellings share one
//! implementation per verb.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::OfferFields;
use crate::inbound::http::ApiResult;
use crate::inbound::http::respond;
use crate::inbound::http::schemas::{ErrorSchema, OfferSchema};
use crate::inbound::http::state::HttpState;

/// Body for `POST /offers`. Absent fields are stored as null.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewOfferRequest {
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<NewOfferRequest> for OfferFields {
    fn from(value: NewOfferRequest) -> Self {
        Self {
            order_id: value.order_id,
            executor_id: value.executor_id,
        }
    }
}

/// Body for `PUT /offers/{id}`.
///
/// Offers have no `name` column; the key is required for compatibility but
/// its value is never stored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceOfferRequest {
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
}

/// List every offer in id order.
#[utoipa::path(
    get,
    path = "/offers",
    responses(
        (status = 200, description = "Offers", body = [OfferSchema], content_type = "application/json; charset=utf-8"),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["offers"],
    operation_id = "listOffers"
)]
#[get("/offers")]
pub async fn list_offers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let offers = state.offers.list().await?;
    respond::records(&offers)
}

/// Create an offer. Order and executor references are not checked.
#[utoipa::path(
    post,
    path = "/offers",
    request_body = NewOfferRequest,
    responses(
        (status = 201, description = "Offer created; empty body"),
        (status = 400, description = "Malformed body or unknown field", body = ErrorSchema)
    ),
    tags = ["offers"],
    operation_id = "createOffer"
)]
#[post("/offers")]
pub async fn create_offer(
    state: web::Data<HttpState>,
    payload: web::Json<NewOfferRequest>,
) -> ApiResult<HttpResponse> {
    let fields = OfferFields::from(payload.into_inner());
    state.offers.create(&fields).await?;
    Ok(respond::empty(StatusCode::CREATED))
}

async fn fetch(state: &HttpState, id: i32) -> ApiResult<HttpResponse> {
    let offer = state.offers.find(id).await?;
    respond::record(&offer)
}

async fn acknowledge_replace(
    state: &HttpState,
    id: i32,
    request: ReplaceOfferRequest,
) -> ApiResult<HttpResponse> {
    state.offers.find(id).await?;
    warn!(
        offer_id = id,
        name = ?request.name,
        "offer update names no stored column; nothing written"
    );
    Ok(respond::empty(StatusCode::NO_CONTENT))
}

async fn remove(state: &HttpState, id: i32) -> ApiResult<HttpResponse> {
    state.offers.delete(id).await?;
    Ok(respond::empty(StatusCode::OK))
}

/// Fetch one offer.
#[utoipa::path(
    get,
    path = "/offers/{id}",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer", body = OfferSchema, content_type = "application/json; charset=utf-8"),
        (status = 404, description = "No such offer", body = ErrorSchema)
    ),
    tags = ["offers"],
    operation_id = "getOffer"
)]
#[get("/offers/{id:\\d+}")]
pub async fn get_offer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    fetch(&state, path.into_inner()).await
}

/// Accept an offer update. Confirms the offer exists and stores nothing.
#[utoipa::path(
    put,
    path = "/offers/{id}",
    params(("id" = i32, Path, description = "Offer id")),
    request_body = ReplaceOfferRequest,
    responses(
        (status = 204, description = "Update acknowledged"),
        (status = 400, description = "The name key is missing", body = ErrorSchema),
        (status = 404, description = "No such offer", body = ErrorSchema)
    ),
    tags = ["offers"],
    operation_id = "replaceOffer"
)]
#[put("/offers/{id:\\d+}")]
pub async fn replace_offer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ReplaceOfferRequest>,
) -> ApiResult<HttpResponse> {
    acknowledge_replace(&state, path.into_inner(), payload.into_inner()).await
}

/// Delete an offer. Answers 200 with an empty body.
#[utoipa::path(
    delete,
    path = "/offers/{id}",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer deleted; empty body"),
        (status = 404, description = "No such offer", body = ErrorSchema)
    ),
    tags = ["offers"],
    operation_id = "deleteOffer"
)]
#[delete("/offers/{id:\\d+}")]
pub async fn delete_offer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    remove(&state, path.into_inner()).await
}

/// `GET /offers{id}`.
#[get("/offers{id:\\d+}")]
pub async fn get_offer_unslashed(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    fetch(&state, path.into_inner()).await
}

/// `PUT /offers{id}`.
#[put("/offers{id:\\d+}")]
pub async fn replace_offer_unslashed(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ReplaceOfferRequest>,
) -> ApiResult<HttpResponse> {
    acknowledge_replace(&state, path.into_inner(), payload.into_inner()).await
}

/// `DELETE /offers{id}`.
#[delete("/offers{id:\\d+}")]
pub async fn delete_offer_unslashed(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    remove(&state, path.into_inner()).await
}
