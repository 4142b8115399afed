//! Comment service implementing the [`CommentCommand`] driving port.
//!
//! Every change runs the same pipeline: require an authenticated actor,
//! resolve the target, apply the ownership policy, validate the text, then
//! write through the repository. Anonymous actors are turned away before any
//! lookup, so they cannot tell which comment ids exist.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::access::{AccessDenied, CommentOperation, authorize};
use crate::domain::ports::{CommentCommand, CommentRepository, NewsRepository};
use crate::domain::service_support::{
    map_access_denied, map_comment_repository_error, map_news_repository_error,
    validate_comment_text,
};
use crate::domain::{Comment, CommentId, Error, NewComment, NewsId, UserId};

/// Comment service implementing the command driving port.
#[derive(Clone)]
pub struct CommentService<N, C> {
    news_repo: Arc<N>,
    comment_repo: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<N, C> CommentService<N, C> {
    /// Create a new service. `clock` stamps newly created comments.
    pub fn new(news_repo: Arc<N>, comment_repo: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            news_repo,
            comment_repo,
            clock,
        }
    }
}

impl<N, C> CommentService<N, C>
where
    N: NewsRepository,
    C: CommentRepository,
{
    async fn find_comment(&self, id: CommentId) -> Result<Comment, Error> {
        self.comment_repo
            .find_by_id(id)
            .await
            .map_err(map_comment_repository_error)?
            .ok_or_else(|| Error::not_found("comment not found"))
    }
}

#[async_trait]
impl<N, C> CommentCommand for CommentService<N, C>
where
    N: NewsRepository,
    C: CommentRepository,
{
    async fn create(
        &self,
        actor: Option<&UserId>,
        news: NewsId,
        text: &str,
    ) -> Result<Comment, Error> {
        let Some(author) = actor else {
            return Err(Error::unauthorized("authentication required"));
        };
        self.news_repo
            .find_by_id(news)
            .await
            .map_err(map_news_repository_error)?
            .ok_or_else(|| Error::not_found(format!("news {news} not found")))?;
        let text = validate_comment_text(text)?;

        let comment = self
            .comment_repo
            .create(&NewComment {
                news,
                author: author.clone(),
                text,
                created: self.clock.utc(),
            })
            .await
            .map_err(map_comment_repository_error)?;
        info!(comment_id = %comment.id, news_id = %news, "comment created");
        Ok(comment)
    }

    async fn fetch_for_change(
        &self,
        actor: Option<&UserId>,
        id: CommentId,
        operation: CommentOperation,
    ) -> Result<Comment, Error> {
        let Some(actor) = actor else {
            return Err(map_access_denied(AccessDenied::Unauthenticated));
        };
        let comment = self.find_comment(id).await?;
        authorize(Some(actor), &comment, operation).map_err(map_access_denied)?;
        Ok(comment)
    }

    async fn edit(
        &self,
        actor: Option<&UserId>,
        id: CommentId,
        text: &str,
    ) -> Result<Comment, Error> {
        self.fetch_for_change(actor, id, CommentOperation::Edit).await?;
        let text = validate_comment_text(text)?;
        let updated = self
            .comment_repo
            .update_text(id, &text)
            .await
            .map_err(map_comment_repository_error)?
            .ok_or_else(|| Error::not_found("comment not found"))?;
        info!(comment_id = %id, "comment edited");
        Ok(updated)
    }

    async fn delete(&self, actor: Option<&UserId>, id: CommentId) -> Result<Comment, Error> {
        let comment = self
            .fetch_for_change(actor, id, CommentOperation::Delete)
            .await?;
        let deleted = self
            .comment_repo
            .delete(id)
            .await
            .map_err(map_comment_repository_error)?;
        if !deleted {
            return Err(Error::not_found("comment not found"));
        }
        info!(comment_id = %id, "comment deleted");
        Ok(comment)
    }
}

#[cfg(test)]
#[path = "comment_service_tests.rs"]
mod tests;
