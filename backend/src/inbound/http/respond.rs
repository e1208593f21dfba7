//! Response builders shared by the entity handlers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::domain::{Error, ToRecord};

use super::ApiResult;

/// Content type attached to every JSON body the API emits.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Serialise `body` with an explicit UTF-8 JSON content type.
///
/// # Errors
///
/// Returns an internal error if serialisation fails.
pub fn json<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> ApiResult<HttpResponse> {
    let bytes = serde_json::to_vec(body)
        .map_err(|err| Error::internal(format!("failed to serialise response: {err}")))?;
    Ok(HttpResponse::build(status)
        .content_type(JSON_UTF8)
        .body(bytes))
}

/// Render one stored entity.
///
/// # Errors
///
/// See [`json`].
pub fn record<E: ToRecord>(entity: &E) -> ApiResult<HttpResponse> {
    json(StatusCode::OK, &entity.to_record())
}

/// Render a collection of stored entities as a JSON array.
///
/// # Errors
///
/// See [`json`].
pub fn records<E: ToRecord>(entities: &[E]) -> ApiResult<HttpResponse> {
    let rows: Vec<_> = entities.iter().map(ToRecord::to_record).collect();
    json(StatusCode::OK, &rows)
}

/// Empty response with the given status.
#[must_use]
pub fn empty(status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).finish()
}
