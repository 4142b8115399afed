//! In-memory world for page-level tests.
//!
//! [`TestWorld`] wires the real services over [`MemoryStore`] with a
//! [`SteppingClock`], and [`test_app`] builds the actix application the
//! binary serves, minus production session settings.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::NaiveDate;

use crate::Trace;
use crate::domain::ports::{CommentRepository, NewsRepository};
use crate::domain::{
    Comment, CommentId, CommentService, ListingConfig, News, NewsDraft, NewsId, NewsService,
    Registration, User, UserAccountService,
};
use crate::inbound::http::configure;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::test_session_middleware;
use crate::outbound::memory::MemoryStore;

use super::SteppingClock;

/// Services and storage shared by one test.
pub struct TestWorld {
    store: MemoryStore,
    state: web::Data<HttpState>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::with_listing(ListingConfig::default())
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// World whose home page shows `listing.home_page_size()` items.
    pub fn with_listing(listing: ListingConfig) -> Self {
        let store = MemoryStore::new();
        let clock = Arc::new(SteppingClock::default());
        let state = HttpState::new(
            Arc::new(NewsService::new(store.news(), store.comments(), listing)),
            Arc::new(CommentService::new(
                store.news(),
                store.comments(),
                clock,
            )),
            Arc::new(UserAccountService::new(store.users())),
        );
        Self {
            store,
            state: web::Data::new(state),
        }
    }

    pub fn http_state(&self) -> web::Data<HttpState> {
        self.state.clone()
    }

    /// Publish a news item dated `date`.
    pub async fn publish(&self, title: &str, date: NaiveDate) -> News {
        let draft = match NewsDraft::new(title, "Просто текст.", date) {
            Ok(draft) => draft,
            Err(error) => panic!("invalid news fixture {title:?}: {error}"),
        };
        match self.store.news().create(&draft).await {
            Ok(news) => news,
            Err(error) => panic!("publish news: {error}"),
        }
    }

    /// Register a reader through the account service.
    pub async fn register(&self, username: &str, password: &str) -> User {
        let registration = match Registration::try_from_parts(username, password, password) {
            Ok(registration) => registration,
            Err(error) => panic!("invalid registration fixture {username:?}: {error}"),
        };
        match self.state.accounts.sign_up(&registration).await {
            Ok(user) => user,
            Err(error) => panic!("sign up: {error}"),
        }
    }

    /// Post a comment as `author` through the comment service.
    pub async fn comment(&self, news: NewsId, author: &User, text: &str) -> Comment {
        match self.state.comments.create(Some(author.id()), news, text).await {
            Ok(comment) => comment,
            Err(error) => panic!("create comment: {error}"),
        }
    }

    pub async fn comment_count(&self) -> u64 {
        match self.store.comments().count().await {
            Ok(count) => count,
            Err(error) => panic!("count comments: {error}"),
        }
    }

    /// Comments on `news`, oldest first.
    pub async fn comments_for(&self, news: NewsId) -> Vec<Comment> {
        match self.store.comments().list_for_news(news).await {
            Ok(comments) => comments,
            Err(error) => panic!("list comments: {error}"),
        }
    }

    pub async fn find_comment(&self, id: CommentId) -> Option<Comment> {
        match self.store.comments().find_by_id(id).await {
            Ok(comment) => comment,
            Err(error) => panic!("find comment: {error}"),
        }
    }
}

/// Application with trace and test session middleware over `state`.
///
/// The readiness probe reports ready.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new()
        .app_data(state)
        .app_data(health)
        .wrap(test_session_middleware())
        .wrap(Trace)
        .configure(configure)
}
