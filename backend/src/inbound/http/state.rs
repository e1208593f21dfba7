//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OfferRepository, OrderRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub offers: Arc<dyn OfferRepository>,
}

impl HttpState {
    /// Construct state from the three entity repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use marketplace::inbound::http::state::HttpState;
    /// use marketplace::outbound::persistence::{
    ///     DbHandle, DieselOfferRepository, DieselOrderRepository, DieselUserRepository,
    /// };
    ///
    /// let db = DbHandle::in_memory().expect("open store");
    /// let state = HttpState::new(
    ///     Arc::new(DieselUserRepository::new(db.clone())),
    ///     Arc::new(DieselOrderRepository::new(db.clone())),
    ///     Arc::new(DieselOfferRepository::new(db)),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        users: Arc<dyn UserRepository>,
        orders: Arc<dyn OrderRepository>,
        offers: Arc<dyn OfferRepository>,
    ) -> Self {
        Self {
            users,
            orders,
            offers,
        }
    }
}
