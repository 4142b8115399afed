//! Driving port for creating and changing comments.

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, CommentOperation, Error, NewsId, UserId};

/// Domain use-case port for comment mutations.
///
/// `actor` is `None` for anonymous requests. Implementations report:
/// - [`crate::domain::ErrorCode::Unauthorized`] when the actor is anonymous;
/// - [`crate::domain::ErrorCode::NotFound`] when the target is missing or the
///   actor is not the comment's author;
/// - [`crate::domain::ErrorCode::InvalidRequest`] with
///   `{"field": "text", "code": ...}` details when the text is blank or
///   rejected by moderation.
///
/// For change operations the checks run in that order: existence, ownership,
/// then text validation.
#[async_trait]
pub trait CommentCommand: Send + Sync {
    /// Post a new comment on a news item.
    async fn create(
        &self,
        actor: Option<&UserId>,
        news: NewsId,
        text: &str,
    ) -> Result<Comment, Error>;

    /// Load a comment the actor is about to edit or delete.
    async fn fetch_for_change(
        &self,
        actor: Option<&UserId>,
        id: CommentId,
        operation: CommentOperation,
    ) -> Result<Comment, Error>;

    /// Replace the text of the actor's comment.
    async fn edit(
        &self,
        actor: Option<&UserId>,
        id: CommentId,
        text: &str,
    ) -> Result<Comment, Error>;

    /// Delete the actor's comment and return what was removed.
    async fn delete(&self, actor: Option<&UserId>, id: CommentId) -> Result<Comment, Error>;
}
