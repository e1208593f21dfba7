//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockOfferRepository, MockOrderRepository, MockUserRepository};

use super::configure_api;
use super::state::HttpState;

/// Builds an [`HttpState`] from mocks; unset ports have no expectations.
#[derive(Default)]
pub struct StateBuilder {
    users: Option<MockUserRepository>,
    orders: Option<MockOrderRepository>,
    offers: Option<MockOfferRepository>,
}

impl StateBuilder {
    pub fn users(mut self, users: MockUserRepository) -> Self {
        self.users = Some(users);
        self
    }

    pub fn orders(mut self, orders: MockOrderRepository) -> Self {
        self.orders = Some(orders);
        self
    }

    pub fn offers(mut self, offers: MockOfferRepository) -> Self {
        self.offers = Some(offers);
        self
    }

    pub fn build(self) -> HttpState {
        HttpState::new(
            Arc::new(self.users.unwrap_or_default()),
            Arc::new(self.orders.unwrap_or_default()),
            Arc::new(self.offers.unwrap_or_default()),
        )
    }
}

/// Application with every API route mounted over mocked ports.
pub fn test_app(
    state: StateBuilder,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state.build()))
        .configure(configure_api)
}
