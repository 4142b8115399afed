//! In-process adapters for the repository ports.
//!
//! Used when no database URL is configured and by the test suite. State lives
//! behind `std::sync::RwLock`; no lock is held across an `.await`. Identifiers
//! come from per-repository counters that only increase.

mod comments;
mod news;
mod users;

use std::sync::Arc;

pub use comments::MemoryCommentRepository;
pub use news::MemoryNewsRepository;
pub use users::MemoryUserRepository;

/// Error message used when a lock was poisoned by a panicking writer.
const POISONED: &str = "memory store lock poisoned";

/// The three memory repositories, created together.
///
/// # Examples
/// ```
/// use news_backend::outbound::memory::MemoryStore;
///
/// let store = MemoryStore::new();
/// let news = store.news();
/// assert!(std::sync::Arc::ptr_eq(&news, &store.news()));
/// ```
#[derive(Clone, Default)]
pub struct MemoryStore {
    news: Arc<MemoryNewsRepository>,
    comments: Arc<MemoryCommentRepository>,
    users: Arc<MemoryUserRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn news(&self) -> Arc<MemoryNewsRepository> {
        Arc::clone(&self.news)
    }

    pub fn comments(&self) -> Arc<MemoryCommentRepository> {
        Arc::clone(&self.comments)
    }

    pub fn users(&self) -> Arc<MemoryUserRepository> {
        Arc::clone(&self.users)
    }
}
