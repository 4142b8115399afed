//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent responses. Page handlers
//! intercept two codes before they reach [`ResponseError`]:
//! `Unauthorized` becomes a redirect to the login page (see
//! [`redirect_to_login_on_unauthorized`]) and `InvalidRequest` re-renders the
//! submitted form. Everything else is answered with a JSON error body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use super::urls;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => error!(error = %self, "request failed"),
            ErrorCode::ServiceUnavailable => warn!(error = %self, "backing service unavailable"),
            _ => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Turn an authentication failure on a page into a login redirect.
///
/// `requested_path` is carried as the `next` parameter so the reader returns
/// to the page after signing in. Any other error is passed through.
///
/// # Examples
/// ```
/// use actix_web::http::{StatusCode, header};
/// use news_backend::domain::Error;
/// use news_backend::inbound::http::error::redirect_to_login_on_unauthorized;
///
/// let response =
///     redirect_to_login_on_unauthorized(Error::unauthorized("login"), "/edit_comment/1/")
///         .expect("unauthorised errors redirect");
/// assert_eq!(response.status(), StatusCode::FOUND);
/// assert_eq!(
///     response.headers().get(header::LOCATION).unwrap(),
///     "/auth/login/?next=/edit_comment/1/"
/// );
/// ```
pub fn redirect_to_login_on_unauthorized(
    error: Error,
    requested_path: &str,
) -> ApiResult<HttpResponse> {
    if error.code() == ErrorCode::Unauthorized {
        Ok(urls::redirect(&urls::login_with_next(requested_path)))
    } else {
        Err(error)
    }
}

#[cfg(test)]
mod tests;
