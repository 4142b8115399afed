//! News items and the comments attached to them.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Validation errors for news and comment values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsValidationError {
    #[error("news title must not be empty")]
    EmptyTitle,
    #[error("news title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("comment text must not be empty")]
    EmptyCommentText,
}

/// Maximum allowed length for a news title.
pub const NEWS_TITLE_MAX: usize = 50;

macro_rules! define_row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database identifier.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw database identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_row_id! {
    /// Identifier of a news item.
    NewsId
}

define_row_id! {
    /// Identifier of a comment.
    CommentId
}

/// A published news item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: NewsId,
    pub title: String,
    pub text: String,
    pub date: NaiveDate,
}

/// Values required to publish a news item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    title: String,
    text: String,
    date: NaiveDate,
}

impl NewsDraft {
    /// Validate a draft. `date` defaults to the caller's notion of today.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use news_backend::domain::NewsDraft;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let draft = NewsDraft::new("Заголовок", "Текст новости", date).unwrap();
    /// assert_eq!(draft.title(), "Заголовок");
    /// ```
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, NewsValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(NewsValidationError::EmptyTitle);
        }
        if title.chars().count() > NEWS_TITLE_MAX {
            return Err(NewsValidationError::TitleTooLong {
                max: NEWS_TITLE_MAX,
            });
        }
        Ok(Self {
            title,
            text: text.into(),
            date,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Materialise the draft once storage has assigned an id.
    pub fn into_news(self, id: NewsId) -> News {
        News {
            id,
            title: self.title,
            text: self.text,
            date: self.date,
        }
    }
}

/// Non-blank comment body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommentText(String);

impl CommentText {
    /// Validate comment text, dropping leading and trailing whitespace.
    ///
    /// Inner whitespace, line breaks included, is kept as written.
    pub fn new(text: impl Into<String>) -> Result<Self, NewsValidationError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NewsValidationError::EmptyCommentText);
        }
        if trimmed.len() == text.len() {
            return Ok(Self(text));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CommentText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CommentText> for String {
    fn from(value: CommentText) -> Self {
        value.0
    }
}

impl TryFrom<String> for CommentText {
    type Error = NewsValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A reader's comment on a news item.
///
/// ## Invariants
/// - `news` and `author` are fixed at creation.
/// - `created` is assigned once at insertion and orders comment listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub news: NewsId,
    pub author: UserId,
    pub text: CommentText,
    pub created: DateTime<Utc>,
}

/// Values required to insert a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub news: NewsId,
    pub author: UserId,
    pub text: CommentText,
    pub created: DateTime<Utc>,
}

impl NewComment {
    /// Materialise the comment once storage has assigned an id.
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            news: self.news,
            author: self.author,
            text: self.text,
            created: self.created,
        }
    }
}
