//! Backend entry-point: loads settings, prepares the store and serves the API.

mod server;

use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use actix_web::web;
use marketplace::bootstrap::ServerSettings;
use marketplace::inbound::http::health::HealthState;
use marketplace::outbound::persistence::DbHandle;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("load server settings")?;
    let db = DbHandle::open(settings.database_url()).wrap_err("open database")?;
    settings.seed(&db).await.wrap_err("seed database")?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), db);
    let server = create_server(health_state, config).wrap_err("start HTTP server")?;
    server.await.wrap_err("serve HTTP")?;
    Ok(())
}
