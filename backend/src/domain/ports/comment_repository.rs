//! Port abstraction for comment persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, CommentText, NewComment, NewsId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "comment repository query failed: {message}",
    }
}

/// Storage for reader comments.
///
/// Adapters must return [`CommentRepository::list_for_news`] results ordered
/// by creation time, oldest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments attached to a news item, oldest first.
    async fn list_for_news(&self, news: NewsId) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Fetch a comment by identifier.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Insert a comment and return it with its assigned identifier.
    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError>;

    /// Replace a comment's text.
    ///
    /// Returns `None` when the comment no longer exists.
    async fn update_text(
        &self,
        id: CommentId,
        text: &CommentText,
    ) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Remove a comment. Returns `false` when nothing was deleted.
    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError>;

    /// Total number of stored comments.
    async fn count(&self) -> Result<u64, CommentRepositoryError>;
}
