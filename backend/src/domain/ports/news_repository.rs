//! Port abstraction for news persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{News, NewsDraft, NewsId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by news repository adapters.
    pub enum NewsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "news repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "news repository query failed: {message}",
    }
}

/// Storage for published news items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Newest items first, at most `limit` of them.
    async fn list_latest(&self, limit: usize) -> Result<Vec<News>, NewsRepositoryError>;

    /// Fetch a news item by identifier.
    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsRepositoryError>;

    /// Publish a news item and return it with its assigned identifier.
    async fn create(&self, draft: &NewsDraft) -> Result<News, NewsRepositoryError>;
}
