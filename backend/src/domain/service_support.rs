//! Internal helpers shared by the news, comment and account services.

use serde_json::json;

use crate::domain::access::AccessDenied;
use crate::domain::ports::{CommentRepositoryError, NewsRepositoryError, UserPersistenceError};
use crate::domain::{CommentText, Error, moderation};

/// Field error shown when comment text is missing.
pub const REQUIRED_FIELD: &str = "Обязательное поле.";

pub(crate) fn map_news_repository_error(error: NewsRepositoryError) -> Error {
    match error {
        NewsRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("news repository unavailable: {message}"))
        }
        NewsRepositoryError::Query { message } => {
            Error::internal(format!("news repository error: {message}"))
        }
    }
}

pub(crate) fn map_comment_repository_error(error: CommentRepositoryError) -> Error {
    match error {
        CommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("comment repository unavailable: {message}"))
        }
        CommentRepositoryError::Query { message } => {
            Error::internal(format!("comment repository error: {message}"))
        }
    }
}

pub(crate) fn map_user_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { username } => {
            Error::conflict(format!("username already taken: {username}")).with_details(json!({
                "field": "username",
                "code": "duplicate_username",
            }))
        }
    }
}

pub(crate) fn map_access_denied(denied: AccessDenied) -> Error {
    match denied {
        AccessDenied::Unauthenticated => Error::unauthorized("authentication required"),
        AccessDenied::NotAuthor => Error::not_found("comment not found"),
    }
}

/// Validate submitted comment text: required first, then moderation.
pub(crate) fn validate_comment_text(raw: &str) -> Result<CommentText, Error> {
    let text = CommentText::new(raw).map_err(|_| {
        Error::invalid_request(REQUIRED_FIELD).with_details(json!({
            "field": "text",
            "code": "required",
        }))
    })?;
    moderation::check(text.as_ref()).map_err(|rejected| {
        Error::invalid_request(rejected.warning()).with_details(json!({
            "field": "text",
            "code": "moderation_rejected",
        }))
    })?;
    Ok(text)
}
