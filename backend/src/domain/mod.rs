//! Domain primitives and aggregates.
//!
//! Purpose: define the marketplace entities shared by the HTTP adapter and
//! the persistence layer, the error payload returned to clients, and the
//! startup seeding service.
//!
//! Public surface:
//! - Error / ErrorCode: API error response payload and its stable code.
//! - User, Order, Offer and their `*Fields` column sets.
//! - Record / ToRecord: column-ordered JSON rendering of stored entities.
//! - Seeder / SeedData: startup seed data and its loader.

pub mod error;
pub mod offer;
pub mod order;
pub mod ports;
pub mod record;
pub mod seed;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::offer::{Offer, OfferFields};
pub use self::order::{Order, OrderFields};
pub use self::record::{RECORD_DATE_FORMAT, Record, ToRecord};
pub use self::seed::{SEED_DATE_FORMAT, SeedData, SeedError, SeedOutcome, Seeder};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserFields};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use marketplace::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("user 7 not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
