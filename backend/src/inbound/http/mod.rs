//! HTTP inbound adapter exposing the news site pages.
//!
//! Page handlers answer with JSON page contexts. Each route is registered as
//! a resource with explicit per-method routes, so any other method is
//! answered with `405 Method Not Allowed`.

use actix_web::web;

pub mod comments;
pub mod error;
pub mod forms;
pub mod health;
pub mod news;
pub mod pages;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod urls;
pub mod users;

pub use error::ApiResult;

/// Register every page route and the health probes.
///
/// Handlers expect [`state::HttpState`] and [`health::HealthState`] in the
/// application data.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use news_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(urls::HOME).route(web::get().to(news::home)))
        .service(
            web::resource(urls::NEWS_DETAIL_ROUTE)
                .route(web::get().to(news::detail))
                .route(web::post().to(news::create_comment)),
        )
        .service(
            web::resource(urls::EDIT_COMMENT_ROUTE)
                .route(web::get().to(comments::edit_page))
                .route(web::post().to(comments::edit)),
        )
        .service(
            web::resource(urls::DELETE_COMMENT_ROUTE)
                .route(web::get().to(comments::delete_page))
                .route(web::post().to(comments::delete))
                .route(web::delete().to(comments::delete)),
        )
        .service(
            web::resource(urls::LOGIN)
                .route(web::get().to(users::login_page))
                .route(web::post().to(users::login)),
        )
        .service(
            web::resource(urls::LOGOUT)
                .route(web::get().to(users::logout))
                .route(web::post().to(users::logout)),
        )
        .service(
            web::resource(urls::SIGNUP)
                .route(web::get().to(users::signup_page))
                .route(web::post().to(users::signup)),
        )
        .service(web::resource("/health/ready").route(web::get().to(health::ready)))
        .service(web::resource("/health/live").route(web::get().to(health::live)));
}
