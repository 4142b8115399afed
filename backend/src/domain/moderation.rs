//! Comment moderation: reject text containing denylisted words.
//!
//! Matching is a case-sensitive substring scan; a word embedded in a longer
//! word still counts. Every rejection carries the same warning regardless of
//! which entry matched.

/// Words that may not appear anywhere in a comment.
pub const BAD_WORDS: [&str; 2] = ["редиска", "негодяй"];

/// Warning attached to the `text` field when moderation rejects a comment.
pub const WARNING: &str = "Не ругайтесь!";

/// Rejection produced by [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", WARNING)]
pub struct ModerationRejected;

impl ModerationRejected {
    /// Warning shown to the author.
    pub fn warning(self) -> &'static str {
        WARNING
    }
}

/// Accept or reject submitted comment text.
///
/// # Examples
/// ```
/// use news_backend::domain::moderation::{check, BAD_WORDS};
///
/// assert!(check("Здесь написано что-то интересное!").is_ok());
/// assert!(check(&format!("Какой-то текст, {}, ...", BAD_WORDS[0])).is_err());
/// ```
pub fn check(text: &str) -> Result<(), ModerationRejected> {
    if BAD_WORDS.iter().any(|word| text.contains(word)) {
        return Err(ModerationRejected);
    }
    Ok(())
}
