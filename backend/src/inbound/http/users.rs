//! Account page handlers.
//!
//! ```text
//! GET|POST /auth/login/    Login form; POST fields `username`, `password`, `next`
//! GET|POST /auth/logout/   Sign out
//! GET|POST /auth/signup/   Sign-up form; POST fields `username`, `password1`, `password2`
//! ```

use actix_web::{HttpResponse, web};

use crate::domain::{ErrorCode, LoginCredentials, Registration};
use crate::inbound::http::ApiResult;
use crate::inbound::http::forms::{
    FormContext, INVALID_LOGIN, LoginForm, NextQuery, SignupForm, USERNAME_TAKEN, login_error,
    registration_error,
};
use crate::inbound::http::pages::{LoginPage, LogoutPage, SignupPage};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::urls;

/// Login form. `next` is echoed so the form can post it back.
pub async fn login_page(query: web::Query<NextQuery>) -> web::Json<LoginPage> {
    web::Json(LoginPage {
        form: FormContext::empty(),
        next: query.into_inner().next,
    })
}

fn login_form_page(form: FormContext, next: Option<String>) -> HttpResponse {
    HttpResponse::Ok().json(LoginPage { form, next })
}

/// Authenticate a reader and establish a session.
///
/// Success redirects to `next` when it is a local path, otherwise home.
/// Failure re-renders the form with a single non-field error.
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let LoginForm {
        username,
        password,
        next,
    } = form.into_inner();
    let initial = FormContext::empty().with_initial("username", username.as_str());

    let credentials = match LoginCredentials::try_from_parts(&username, &password) {
        Ok(credentials) => credentials,
        Err(error) => {
            let (field, message) = login_error(&error);
            return Ok(login_form_page(initial.with_field_error(field, message), next));
        }
    };

    match state.accounts.authenticate(&credentials).await {
        Ok(user_id) => {
            session.persist_user(&user_id)?;
            Ok(urls::redirect(urls::safe_next(next.as_deref())))
        }
        Err(error) if error.code() == ErrorCode::Unauthorized => Ok(login_form_page(
            initial.with_non_field_error(INVALID_LOGIN),
            next,
        )),
        Err(error) => Err(error),
    }
}

/// Sign out. Always succeeds, signed in or not.
pub async fn logout(session: SessionContext) -> web::Json<LogoutPage> {
    session.clear();
    web::Json(LogoutPage::default())
}

pub async fn signup_page() -> web::Json<SignupPage> {
    web::Json(SignupPage {
        form: FormContext::empty(),
    })
}

fn signup_form_page(form: FormContext) -> HttpResponse {
    HttpResponse::Ok().json(SignupPage { form })
}

/// Register a reader and send them to the login page.
pub async fn signup(
    state: web::Data<HttpState>,
    form: web::Form<SignupForm>,
) -> ApiResult<HttpResponse> {
    let SignupForm {
        username,
        password1,
        password2,
    } = form.into_inner();
    let initial = FormContext::empty().with_initial("username", username.as_str());

    let registration = match Registration::try_from_parts(&username, &password1, &password2) {
        Ok(registration) => registration,
        Err(error) => {
            let (field, message) = registration_error(&error);
            return Ok(signup_form_page(initial.with_field_error(field, message)));
        }
    };

    match state.accounts.sign_up(&registration).await {
        Ok(_) => Ok(urls::redirect(urls::LOGIN)),
        Err(error) if error.code() == ErrorCode::Conflict => Ok(signup_form_page(
            initial.with_field_error("username", USERNAME_TAKEN),
        )),
        Err(error) => Err(error),
    }
}
