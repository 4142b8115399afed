//! Ownership policy for changing comments.
//!
//! Only a comment's author may edit or delete it. The two ways of being
//! refused stay distinct: an anonymous actor must authenticate first, while
//! an authenticated non-author is told the comment does not exist.

use super::news::Comment;
use super::user::UserId;

/// Change operations guarded by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentOperation {
    Edit,
    Delete,
}

/// Why an actor may not change a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    /// No authenticated actor; surfaced as a login redirect.
    #[error("authentication required")]
    Unauthenticated,
    /// Authenticated, but not the author; surfaced as "not found".
    #[error("comment not found")]
    NotAuthor,
}

/// Classify an actor's access to `comment`.
///
/// Both operations share the same rule today; `operation` is part of the
/// contract so callers state which action they are guarding.
pub fn authorize(
    actor: Option<&UserId>,
    comment: &Comment,
    _operation: CommentOperation,
) -> Result<(), AccessDenied> {
    match actor {
        None => Err(AccessDenied::Unauthenticated),
        Some(actor) if actor == &comment.author => Ok(()),
        Some(_) => Err(AccessDenied::NotAuthor),
    }
}

/// `true` iff `actor` is authenticated and wrote `comment`.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use news_backend::domain::access::{can_modify, CommentOperation};
/// use news_backend::domain::{Comment, CommentId, CommentText, NewsId, UserId};
///
/// let author = UserId::random();
/// let comment = Comment {
///     id: CommentId::new(1),
///     news: NewsId::new(1),
///     author: author.clone(),
///     text: CommentText::new("text").unwrap(),
///     created: Utc::now(),
/// };
/// assert!(can_modify(Some(&author), &comment, CommentOperation::Edit));
/// assert!(!can_modify(None, &comment, CommentOperation::Delete));
/// ```
pub fn can_modify(actor: Option<&UserId>, comment: &Comment, operation: CommentOperation) -> bool {
    authorize(actor, comment, operation).is_ok()
}
