//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by a
//! single SQLite connection.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain entities. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Blocking isolation**: Diesel's synchronous SQLite driver runs on the
//!   blocking pool through [`DbHandle`].
//! - **Strongly typed errors**: every Diesel failure becomes a
//!   `RepositoryError`.
//!
//! # Example
//!
//! ```
//! use marketplace::outbound::persistence::{DbHandle, DieselUserRepository};
//!
//! let db = DbHandle::in_memory().expect("open store");
//! let users = DieselUserRepository::new(db);
//! # let _ = users;
//! ```

mod connection;
mod diesel_helpers;
mod diesel_offer_repository;
mod diesel_order_repository;
mod diesel_user_repository;
mod models;
mod schema;

pub use connection::{ConnectionError, DbHandle, IN_MEMORY_DATABASE_URL};
pub use diesel_offer_repository::DieselOfferRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_user_repository::DieselUserRepository;
