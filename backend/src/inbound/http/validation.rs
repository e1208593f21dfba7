//! Request extraction policy for inbound HTTP adapters.
//!
//! Bodies are read as JSON whatever their declared content type. Extractor
//! failures are turned into the domain error payload so clients always see
//! the same JSON shape.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyErrorCode {
    MissingField,
    UnknownField,
    InvalidBody,
}

impl BodyErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::UnknownField => "unknown_field",
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Extract the backtick-quoted field name serde places after `marker`.
fn quoted_field<'a>(message: &'a str, marker: &str) -> Option<&'a str> {
    let rest = message.split_once(marker)?.1;
    rest.split_once('`').map(|(field, _)| field)
}

/// Convert a serde failure into a Bad-Request naming the offending field.
pub(crate) fn body_error(message: &str) -> Error {
    let (code, field) = if let Some(field) = quoted_field(message, "missing field `") {
        (BodyErrorCode::MissingField, Some(field))
    } else if let Some(field) = quoted_field(message, "unknown field `") {
        (BodyErrorCode::UnknownField, Some(field))
    } else {
        (BodyErrorCode::InvalidBody, None)
    };
    let details = match field {
        Some(field) => json!({ "field": field, "code": code.as_str() }),
        None => json!({ "code": code.as_str() }),
    };
    Error::invalid_request(format!("invalid request body: {message}")).with_details(details)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let error = match &err {
        JsonPayloadError::Deserialize(source) => body_error(&source.to_string()),
        other => body_error(&other.to_string()),
    };
    error.into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    Error::not_found(format!("no resource at {}", req.path()))
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}

/// JSON extractor configuration shared by every body-reading handler.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Path extractor configuration: non-integer ids resolve to Not-Found.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
