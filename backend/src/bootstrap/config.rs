//! Server configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MARKETPLACE_*` environment variables or a
//! configuration file. With nothing set the server listens on
//! `127.0.0.1:5000` over a transient in-memory store seeded from the
//! embedded data.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address bound when `host` is unset.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// Port bound when `port` is unset.
pub const DEFAULT_PORT: u16 = 5000;
/// Seeding switch used when `seed_enabled` is unset.
pub const DEFAULT_SEED_ENABLED: bool = true;
/// Store opened when `database_url` is unset.
pub const DEFAULT_DATABASE_URL: &str = crate::outbound::persistence::IN_MEMORY_DATABASE_URL;

/// Configuration values controlling the HTTP listener, store and seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MARKETPLACE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// SQLite database path, or `:memory:` for a transient store.
    pub database_url: Option<String>,
    /// Load seed data into the store before serving.
    pub seed_enabled: Option<bool>,
    /// JSON seed document replacing the embedded one.
    pub seed_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Socket address to bind, falling back to the defaults.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Database URL, falling back to the in-memory store.
    #[must_use]
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Whether startup seeding runs; on unless explicitly disabled.
    #[must_use]
    pub fn seed_enabled(&self) -> bool {
        self.seed_enabled.unwrap_or(DEFAULT_SEED_ENABLED)
    }
}
