//! Reader account service implementing the [`AccountService`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{AccountService, UserRepository};
use crate::domain::service_support::map_user_repository_error;
use crate::domain::{
    Error, LoginCredentials, PasswordDigest, Registration, User, UserId, Username,
};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Account service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserAccountService<U> {
    user_repo: Arc<U>,
}

impl<U> UserAccountService<U> {
    /// Create a new service with the given repository.
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> AccountService for UserAccountService<U>
where
    U: UserRepository,
{
    async fn sign_up(&self, registration: &Registration) -> Result<User, Error> {
        let user = User::new(UserId::random(), registration.username().clone());
        let digest = PasswordDigest::derive(registration.password());
        self.user_repo
            .create(&user, &digest)
            .await
            .map_err(map_user_repository_error)?;
        info!(user_id = %user.id(), "user signed up");
        Ok(user)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let Ok(username) = Username::new(credentials.username()) else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        let stored = self
            .user_repo
            .find_by_username(&username)
            .await
            .map_err(map_user_repository_error)?;
        match stored {
            Some(stored) if stored.digest.verify(credentials.password()) => {
                Ok(stored.user.id().clone())
            }
            _ => {
                debug!(username = %username, "login rejected");
                Err(Error::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockUserRepository, StoredCredentials, UserPersistenceError};
    use rstest::{fixture, rstest};

    #[fixture]
    fn registration() -> Registration {
        Registration::try_from_parts("Читатель", "пароль-123", "пароль-123")
            .expect("valid registration")
    }

    fn stored(username: &str, password: &str) -> StoredCredentials {
        StoredCredentials {
            user: User::new(UserId::random(), Username::new(username).expect("valid username")),
            digest: PasswordDigest::derive(password),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn sign_up_stores_digest_not_password(registration: Registration) {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user, digest| {
                user.username().as_ref() == "Читатель"
                    && digest.verify("пароль-123")
                    && !digest.as_stored().contains("пароль-123")
            })
            .times(1)
            .return_once(|_, _| Ok(()));

        let user = UserAccountService::new(Arc::new(repo))
            .sign_up(&registration)
            .await
            .expect("sign-up succeeds");
        assert_eq!(user.username().as_ref(), "Читатель");
    }

    #[rstest]
    #[tokio::test]
    async fn sign_up_with_taken_username_conflicts(registration: Registration) {
        let mut repo = MockUserRepository::new();
        repo.expect_create().return_once(|user, _| {
            Err(UserPersistenceError::duplicate_username(
                user.username().as_ref(),
            ))
        });

        let error = UserAccountService::new(Arc::new(repo))
            .sign_up(&registration)
            .await
            .expect_err("duplicate username");
        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(error.field(), Some("username"));
    }

    #[rstest]
    #[tokio::test]
    async fn authenticate_returns_id_for_matching_password() {
        let record = stored("reader", "secret");
        let expected = record.user.id().clone();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|username| username.as_ref() == "reader")
            .return_once(move |_| Ok(Some(record)));

        let credentials =
            LoginCredentials::try_from_parts("reader", "secret").expect("credentials shape");
        let id = UserAccountService::new(Arc::new(repo))
            .authenticate(&credentials)
            .await
            .expect("login succeeds");
        assert_eq!(id, expected);
    }

    #[rstest]
    #[case(Some(("reader", "other")))]
    #[case(None)]
    #[tokio::test]
    async fn authenticate_failures_are_indistinguishable(#[case] existing: Option<(&str, &str)>) {
        let record = existing.map(|(username, password)| stored(username, password));
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .return_once(move |_| Ok(record));

        let credentials =
            LoginCredentials::try_from_parts("reader", "secret").expect("credentials shape");
        let error = UserAccountService::new(Arc::new(repo))
            .authenticate(&credentials)
            .await
            .expect_err("login fails");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
        assert_eq!(error.message(), INVALID_CREDENTIALS);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_username_never_reaches_the_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().never();

        let credentials =
            LoginCredentials::try_from_parts("two words", "secret").expect("credentials shape");
        let error = UserAccountService::new(Arc::new(repo))
            .authenticate(&credentials)
            .await
            .expect_err("login fails");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[tokio::test]
    async fn find_user_maps_connection_failures() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Err(UserPersistenceError::connection("refused")));

        let error = UserAccountService::new(Arc::new(repo))
            .find_user(&UserId::random())
            .await
            .expect_err("connection failure");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
