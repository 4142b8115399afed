//! News page service implementing the [`NewsPages`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::listing::{ListingConfig, comment_listing, home_listing};
use crate::domain::ports::{CommentRepository, NewsDetail, NewsPages, NewsRepository};
use crate::domain::service_support::{map_comment_repository_error, map_news_repository_error};
use crate::domain::{Error, News, NewsId};

/// Read-side service for the home and detail pages.
#[derive(Clone)]
pub struct NewsService<N, C> {
    news_repo: Arc<N>,
    comment_repo: Arc<C>,
    listing: ListingConfig,
}

impl<N, C> NewsService<N, C> {
    /// Create a new service with the given repositories and listing rules.
    pub fn new(news_repo: Arc<N>, comment_repo: Arc<C>, listing: ListingConfig) -> Self {
        Self {
            news_repo,
            comment_repo,
            listing,
        }
    }
}

#[async_trait]
impl<N, C> NewsPages for NewsService<N, C>
where
    N: NewsRepository,
    C: CommentRepository,
{
    async fn home(&self) -> Result<Vec<News>, Error> {
        let news = self
            .news_repo
            .list_latest(self.listing.home_page_size().get())
            .await
            .map_err(map_news_repository_error)?;
        Ok(home_listing(news, &self.listing))
    }

    async fn detail(&self, id: NewsId) -> Result<NewsDetail, Error> {
        let news = self
            .news_repo
            .find_by_id(id)
            .await
            .map_err(map_news_repository_error)?
            .ok_or_else(|| Error::not_found(format!("news {id} not found")))?;
        let comments = self
            .comment_repo
            .list_for_news(id)
            .await
            .map_err(map_comment_repository_error)?;
        Ok(NewsDetail {
            news,
            comments: comment_listing(comments),
        })
    }
}
