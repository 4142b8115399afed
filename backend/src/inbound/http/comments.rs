//! Comment edit and delete page handlers.
//!
//! ```text
//! GET         /edit_comment/{id}/     Edit form, author only
//! POST        /edit_comment/{id}/     Save new text, form field `text`
//! GET         /delete_comment/{id}/   Delete confirmation, author only
//! POST|DELETE /delete_comment/{id}/   Delete the comment
//! ```
//!
//! Anonymous readers are redirected to login with the requested path as
//! `next`. Readers other than the author get `404 Not Found`, the same as for
//! a comment that does not exist.

use actix_web::{HttpResponse, web};

use crate::domain::{CommentId, CommentOperation, ErrorCode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::redirect_to_login_on_unauthorized;
use crate::inbound::http::forms::{CommentForm, FormContext};
use crate::inbound::http::pages::CommentPage;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::urls;

fn requested_path(id: CommentId, operation: CommentOperation) -> String {
    match operation {
        CommentOperation::Edit => urls::edit_comment(id),
        CommentOperation::Delete => urls::delete_comment(id),
    }
}

async fn comment_page(
    state: &HttpState,
    session: &SessionContext,
    id: CommentId,
    operation: CommentOperation,
) -> ApiResult<HttpResponse> {
    let actor = session.actor(state.accounts.as_ref()).await?;
    match state
        .comments
        .fetch_for_change(actor.as_ref(), id, operation)
        .await
    {
        Ok(comment) => {
            let form = match operation {
                CommentOperation::Edit => {
                    Some(FormContext::empty().with_initial("text", comment.text.as_ref()))
                }
                CommentOperation::Delete => None,
            };
            Ok(HttpResponse::Ok().json(CommentPage { comment, form }))
        }
        Err(error) => redirect_to_login_on_unauthorized(error, &requested_path(id, operation)),
    }
}

/// Edit form for the reader's own comment.
pub async fn edit_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = CommentId::new(path.into_inner());
    comment_page(&state, &session, id, CommentOperation::Edit).await
}

/// Save edited text. Rejected text re-renders the form; the comment is left
/// unchanged.
pub async fn edit(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
    form: web::Form<CommentForm>,
) -> ApiResult<HttpResponse> {
    let id = CommentId::new(path.into_inner());
    let CommentForm { text } = form.into_inner();
    let actor = session.actor(state.accounts.as_ref()).await?;

    match state.comments.edit(actor.as_ref(), id, &text).await {
        Ok(comment) => Ok(urls::redirect(&urls::news_comments(comment.news))),
        Err(error) if error.code() == ErrorCode::InvalidRequest => {
            let comment = state
                .comments
                .fetch_for_change(actor.as_ref(), id, CommentOperation::Edit)
                .await?;
            let form = FormContext::empty()
                .with_initial("text", text)
                .with_error(&error);
            Ok(HttpResponse::Ok().json(CommentPage {
                comment,
                form: Some(form),
            }))
        }
        Err(error) => redirect_to_login_on_unauthorized(error, &urls::edit_comment(id)),
    }
}

/// Delete confirmation for the reader's own comment.
pub async fn delete_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = CommentId::new(path.into_inner());
    comment_page(&state, &session, id, CommentOperation::Delete).await
}

/// Delete the reader's own comment and return to the news item.
pub async fn delete(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = CommentId::new(path.into_inner());
    let actor = session.actor(state.accounts.as_ref()).await?;

    match state.comments.delete(actor.as_ref(), id).await {
        Ok(removed) => Ok(urls::redirect(&urls::news_comments(removed.news))),
        Err(error) => redirect_to_login_on_unauthorized(error, &urls::delete_comment(id)),
    }
}
