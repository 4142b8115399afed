//! Server settings loaded via OrthoConfig and the assembled server config.

use std::net::{AddrParseError, SocketAddr};
use std::num::NonZeroUsize;

use actix_web::cookie::{Key, SameSite};
use news_backend::domain::{DEFAULT_HOME_PAGE_SIZE, ListingConfig};
use news_backend::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings read from CLI flags, `NEWS_*` environment variables and config
/// files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEWS")]
pub struct NewsSettings {
    /// Number of news items shown on the home page.
    pub home_page_size: Option<usize>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; absent means in-memory storage.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

/// Invalid values in [`NewsSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("home page size must be at least 1")]
    ZeroHomePageSize,
}

impl NewsSettings {
    /// Listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Listing rules for the home page.
    pub fn listing(&self) -> Result<ListingConfig, SettingsError> {
        let size = match self.home_page_size {
            Some(raw) => NonZeroUsize::new(raw).ok_or(SettingsError::ZeroHomePageSize)?,
            None => DEFAULT_HOME_PAGE_SIZE,
        };
        Ok(ListingConfig::new(size))
    }

    /// Pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let config = PoolConfig::new(self.database_url.as_deref()?);
        Some(match self.db_max_connections {
            Some(max) => config.with_max_connections(max),
            None => config,
        })
    }
}

/// Everything [`super::create_server`] needs.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) listing: ListingConfig,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            listing: ListingConfig::default(),
            db_pool: None,
        }
    }

    #[must_use]
    pub fn with_listing(mut self, listing: ListingConfig) -> Self {
        self.listing = listing;
        self
    }

    /// Attach a database connection pool.
    ///
    /// When provided the server uses the Diesel repositories instead of the
    /// in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
