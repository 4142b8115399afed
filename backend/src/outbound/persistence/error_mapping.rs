//! Translation of pool and Diesel failures into repository port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{CommentRepositoryError, NewsRepositoryError, UserPersistenceError};

use super::pool::PoolError;

/// Port error enums carrying `Connection` and `Query` variants.
pub(super) trait StorageFailure: Sized {
    fn connection_failure(message: String) -> Self;
    fn query_failure(message: String) -> Self;
}

macro_rules! storage_failure {
    ($($error:ty),* $(,)?) => {
        $(
            impl StorageFailure for $error {
                fn connection_failure(message: String) -> Self {
                    Self::Connection { message }
                }

                fn query_failure(message: String) -> Self {
                    Self::Query { message }
                }
            }
        )*
    };
}

storage_failure!(NewsRepositoryError, CommentRepositoryError, UserPersistenceError);

/// A pool that cannot hand out a connection is a connection failure.
pub(super) fn pool_error<E: StorageFailure>(error: PoolError) -> E {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            E::connection_failure(message)
        }
    }
}

/// Lost connections become connection failures; everything else is a query
/// failure with a generic message. Driver details only reach the debug log.
pub(super) fn diesel_error<E: StorageFailure>(error: DieselError) -> E {
    match error {
        DieselError::NotFound => E::query_failure("record not found".to_owned()),
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "database rejected statement");
            match kind {
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand => {
                    E::connection_failure("database connection lost".to_owned())
                }
                _ => E::query_failure("database error".to_owned()),
            }
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            E::query_failure("database error".to_owned())
        }
    }
}
