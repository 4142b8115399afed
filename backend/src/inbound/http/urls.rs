//! Route patterns and URL reversing for the page routes.
//!
//! [`super::configure`] registers the `*_ROUTE` patterns; the functions of the
//! same name build the concrete paths handlers redirect to.

use actix_web::HttpResponse;
use actix_web::http::header;

use crate::domain::{CommentId, NewsId};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login/";
pub const LOGOUT: &str = "/auth/logout/";
pub const SIGNUP: &str = "/auth/signup/";

pub const NEWS_DETAIL_ROUTE: &str = "/news/{id}/";
pub const EDIT_COMMENT_ROUTE: &str = "/edit_comment/{id}/";
pub const DELETE_COMMENT_ROUTE: &str = "/delete_comment/{id}/";

/// Anchor of the comment thread on a detail page.
pub const COMMENTS_ANCHOR: &str = "#comments";

pub fn news_detail(id: NewsId) -> String {
    format!("/news/{id}/")
}

/// Detail page scrolled to its comment thread.
pub fn news_comments(id: NewsId) -> String {
    format!("{}{COMMENTS_ANCHOR}", news_detail(id))
}

pub fn edit_comment(id: CommentId) -> String {
    format!("/edit_comment/{id}/")
}

pub fn delete_comment(id: CommentId) -> String {
    format!("/delete_comment/{id}/")
}

/// Login page that returns the reader to `next` after signing in.
pub fn login_with_next(next: &str) -> String {
    format!("{LOGIN}?next={next}")
}

/// Local path to continue to after login.
///
/// Only same-site absolute paths are honoured; anything else, including
/// scheme-relative `//host` URLs, falls back to the home page.
///
/// # Examples
/// ```
/// use news_backend::inbound::http::urls::safe_next;
///
/// assert_eq!(safe_next(Some("/news/1/")), "/news/1/");
/// assert_eq!(safe_next(Some("https://evil.example/")), "/");
/// assert_eq!(safe_next(None), "/");
/// ```
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => HOME,
    }
}

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
