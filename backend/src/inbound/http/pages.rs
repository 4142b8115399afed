//! Page contexts: the JSON documents page handlers respond with.
//!
//! Each context carries the data a template would be rendered with.

use serde::Serialize;

use super::forms::FormContext;
use crate::domain::{Comment, News, ports::NewsDetail};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub news: Vec<News>,
}

/// News detail. `form` is present only for authenticated readers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPage {
    pub news: News,
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormContext>,
}

impl DetailPage {
    pub fn new(detail: NewsDetail, form: Option<FormContext>) -> Self {
        let NewsDetail { news, comments } = detail;
        Self {
            news,
            comments,
            form,
        }
    }
}

/// Edit or delete confirmation page for a single comment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    pub comment: Comment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormContext>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub form: FormContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPage {
    pub form: FormContext,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutPage {}
