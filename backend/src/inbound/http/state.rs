//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountService, CommentCommand, NewsPages};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub news: Arc<dyn NewsPages>,
    pub comments: Arc<dyn CommentCommand>,
    pub accounts: Arc<dyn AccountService>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use news_backend::domain::{CommentService, ListingConfig, NewsService, UserAccountService};
    /// use news_backend::inbound::http::state::HttpState;
    /// use news_backend::outbound::memory::MemoryStore;
    ///
    /// let store = MemoryStore::new();
    /// let state = HttpState::new(
    ///     Arc::new(NewsService::new(
    ///         store.news(),
    ///         store.comments(),
    ///         ListingConfig::default(),
    ///     )),
    ///     Arc::new(CommentService::new(
    ///         store.news(),
    ///         store.comments(),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     Arc::new(UserAccountService::new(store.users())),
    /// );
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn new(
        news: Arc<dyn NewsPages>,
        comments: Arc<dyn CommentCommand>,
        accounts: Arc<dyn AccountService>,
    ) -> Self {
        Self {
            news,
            comments,
            accounts,
        }
    }
}
