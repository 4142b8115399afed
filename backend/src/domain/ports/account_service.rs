//! Driving port for sign-up and login.
//!
//! Inbound adapters call it to register and authenticate readers without
//! knowing the backing infrastructure.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, User, UserId};

/// Domain use-case port for reader accounts.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new reader.
    ///
    /// Fails with [`crate::domain::ErrorCode::Conflict`] when the username is
    /// taken.
    async fn sign_up(&self, registration: &Registration) -> Result<User, Error>;

    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller: both fail with [`crate::domain::ErrorCode::Unauthorized`].
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;

    /// Look up the reader a session refers to.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
