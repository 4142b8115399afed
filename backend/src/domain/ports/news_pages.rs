//! Driving port for reading news pages.
//!
//! Both pages are public: any actor, signed in or not, may read the home
//! listing and a news item's comment thread.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Comment, Error, News, NewsId};

/// A news item together with its comment thread, oldest comment first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDetail {
    pub news: News,
    pub comments: Vec<Comment>,
}

/// Domain use-case port for the public news pages.
#[async_trait]
pub trait NewsPages: Send + Sync {
    /// Latest news for the home page, newest first and bounded by the
    /// configured page size.
    async fn home(&self) -> Result<Vec<News>, Error>;

    /// A single news item with its comments.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when the item does
    /// not exist.
    async fn detail(&self, id: NewsId) -> Result<NewsDetail, Error>;
}
