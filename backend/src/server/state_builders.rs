//! Build the HTTP handler state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use news_backend::domain::ports::{CommentRepository, NewsRepository, UserRepository};
use news_backend::domain::{CommentService, ListingConfig, NewsService, UserAccountService};
use news_backend::inbound::http::state::HttpState;
use news_backend::outbound::memory::MemoryStore;
use news_backend::outbound::persistence::{
    DieselCommentRepository, DieselNewsRepository, DieselUserRepository,
};
use tracing::info;

use super::ServerConfig;

fn wire<N, C, U>(
    news: Arc<N>,
    comments: Arc<C>,
    users: Arc<U>,
    listing: ListingConfig,
) -> HttpState
where
    N: NewsRepository + 'static,
    C: CommentRepository + 'static,
    U: UserRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    HttpState::new(
        Arc::new(NewsService::new(news.clone(), comments.clone(), listing)),
        Arc::new(CommentService::new(news, comments, clock)),
        Arc::new(UserAccountService::new(users)),
    )
}

/// Use the Diesel repositories when a pool is configured, the in-memory store
/// otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "wiring repositories");
            wire(
                Arc::new(DieselNewsRepository::new(pool.clone())),
                Arc::new(DieselCommentRepository::new(pool.clone())),
                Arc::new(DieselUserRepository::new(pool.clone())),
                config.listing,
            )
        }
        None => {
            info!(storage = "memory", "wiring repositories");
            let store = MemoryStore::new();
            wire(store.news(), store.comments(), store.users(), config.listing)
        }
    };
    web::Data::new(state)
}
