//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod offer_repository;
mod order_repository;
mod repository_error;
mod user_repository;

#[cfg(test)]
pub use offer_repository::MockOfferRepository;
pub use offer_repository::OfferRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::OrderRepository;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
