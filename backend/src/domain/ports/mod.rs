//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`NewsPages`], [`CommentCommand`], [`AccountService`]) are
//! called by inbound adapters. Driven ports ([`NewsRepository`],
//! [`CommentRepository`], [`UserRepository`]) are implemented by outbound
//! adapters and expose typed errors so services map failures predictably.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod comment_command;
mod comment_repository;
mod news_pages;
mod news_repository;
mod user_repository;

pub use account_service::AccountService;
pub use comment_command::CommentCommand;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
pub use news_pages::{NewsDetail, NewsPages};
#[cfg(test)]
pub use news_repository::MockNewsRepository;
pub use news_repository::{NewsRepository, NewsRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{StoredCredentials, UserPersistenceError, UserRepository};
