//! Domain primitives, policies and services.
//!
//! Purpose: define strongly typed entities for news, comments and readers,
//! the pure moderation and ownership rules, and the services that implement
//! the driving ports. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - News, Comment, User: entities.
//! - `moderation::check` and `access::can_modify`: pure decision logic.
//! - NewsService, CommentService, UserAccountService: port implementations.

pub mod access;
pub mod account_service;
pub mod auth;
pub mod comment_service;
pub mod error;
pub mod listing;
pub mod moderation;
pub mod news;
pub mod news_service;
pub mod ports;
mod service_support;
pub mod user;

pub use self::access::{AccessDenied, CommentOperation, authorize, can_modify};
pub use self::account_service::UserAccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, PasswordDigest, Registration,
    RegistrationValidationError,
};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::listing::{
    DEFAULT_HOME_PAGE_SIZE, ListingConfig, comment_listing, home_listing, latest_news,
};
pub use self::moderation::ModerationRejected;
pub use self::news::{
    Comment, CommentId, CommentText, NEWS_TITLE_MAX, NewComment, News, NewsDraft, NewsId,
    NewsValidationError,
};
pub use self::news_service::NewsService;
pub use self::service_support::REQUIRED_FIELD;
pub use self::user::{USERNAME_MAX, User, UserId, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use news_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
