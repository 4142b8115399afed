//! Backend entry-point: loads settings, wires storage and serves the pages.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use news_backend::inbound::http::health::HealthState;
use news_backend::inbound::http::session_config::fingerprint::key_fingerprint;
use news_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use news_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{NewsSettings, ServerConfig, create_server};

/// Open the pool after bringing the schema up to date.
async fn connect_database(pool_config: PoolConfig) -> std::io::Result<DbPool> {
    let url = pool_config.database_url().to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;

    DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)
}

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

    let settings =
        NewsSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        "session signing key loaded"
    );

    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let listing = settings.listing().map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    )
    .with_listing(listing);
    if let Some(pool_config) = settings.pool_config() {
        info!(
            max_connections = pool_config.max_connections(),
            "using PostgreSQL storage"
        );
        config = config.with_db_pool(connect_database(pool_config).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
