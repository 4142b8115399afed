//! News page handlers.
//!
//! ```text
//! GET  /news/{id}/   News item with its comments (and a form for readers)
//! POST /news/{id}/   Post a comment, form field `text`
//! ```

use actix_web::{HttpResponse, web};

use crate::domain::{Error, ErrorCode, NewsId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::redirect_to_login_on_unauthorized;
use crate::inbound::http::forms::{CommentForm, FormContext};
use crate::inbound::http::pages::{DetailPage, HomePage};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::urls;

/// Home page: the latest news, newest first.
pub async fn home(state: web::Data<HttpState>) -> ApiResult<web::Json<HomePage>> {
    let news = state.news.home().await?;
    Ok(web::Json(HomePage { news }))
}

/// News detail page. Anyone may read it; only signed-in readers get a form.
pub async fn detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DetailPage>> {
    let id = NewsId::new(path.into_inner());
    let actor = session.actor(state.accounts.as_ref()).await?;
    let detail = state.news.detail(id).await?;
    let form = actor.map(|_| FormContext::empty());
    Ok(web::Json(DetailPage::new(detail, form)))
}

/// Post a comment on a news item.
///
/// Anonymous readers are sent to the login page; rejected text re-renders
/// the detail page with the form errors and nothing is stored.
pub async fn create_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
    form: web::Form<CommentForm>,
) -> ApiResult<HttpResponse> {
    let id = NewsId::new(path.into_inner());
    let CommentForm { text } = form.into_inner();
    let actor = session.actor(state.accounts.as_ref()).await?;

    match state.comments.create(actor.as_ref(), id, &text).await {
        Ok(comment) => Ok(urls::redirect(&urls::news_comments(comment.news))),
        Err(error) if error.code() == ErrorCode::InvalidRequest => {
            rerender_with_errors(&state, id, &text, &error).await
        }
        Err(error) => redirect_to_login_on_unauthorized(error, &urls::news_detail(id)),
    }
}

async fn rerender_with_errors(
    state: &HttpState,
    id: NewsId,
    text: &str,
    error: &Error,
) -> ApiResult<HttpResponse> {
    let detail = state.news.detail(id).await?;
    let form = FormContext::empty()
        .with_initial("text", text)
        .with_error(error);
    Ok(HttpResponse::Ok().json(DetailPage::new(detail, Some(form))))
}
