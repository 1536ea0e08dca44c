//! Contacts service entry-point: loads settings, selects the contact store, and
//! serves the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contacts::inbound::http::health::HealthState;
use contacts::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;

use server::{ServerConfig, ServiceSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let mut config = ServerConfig::new(settings.bind_addr()?);
    if let Some(database_url) = settings.database_url() {
        let pool_config = PoolConfig::new(database_url)
            .with_max_size(settings.db_max_connections())
            .with_min_idle(settings.db_min_idle())
            .with_connection_timeout(settings.db_connection_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database configured; contacts are kept in memory only");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    info!("contacts server stopped");
    result
}
