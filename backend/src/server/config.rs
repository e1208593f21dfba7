//! HTTP server configuration object.

use std::net::SocketAddr;

use marketplace::outbound::persistence::DbHandle;

/// Everything `create_server` needs to build the application.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db: DbHandle,
}

impl ServerConfig {
    /// Construct a server configuration over an opened store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db: DbHandle) -> Self {
        Self { bind_addr, db }
    }
}
