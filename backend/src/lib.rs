//! Marketplace backend: CRUD endpoints for users, orders and offers over an
//! embedded SQLite store.

pub mod bootstrap;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
