//! Startup wiring: settings, store opening and seeding.

mod config;
mod seeding;

pub use config::{
    DEFAULT_DATABASE_URL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SEED_ENABLED, ServerSettings,
};
pub use seeding::{StartupSeedingError, seed_on_startup};
