use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{NewsRepository, NewsRepositoryError};
use crate::domain::{News, NewsDraft, NewsId, latest_news};

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<NewsId, News>,
}

/// In-memory [`NewsRepository`].
#[derive(Default)]
pub struct MemoryNewsRepository {
    state: RwLock<State>,
}

#[async_trait]
impl NewsRepository for MemoryNewsRepository {
    async fn list_latest(&self, limit: usize) -> Result<Vec<News>, NewsRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| NewsRepositoryError::query(POISONED))?;
        Ok(latest_news(state.rows.values().cloned().collect(), limit))
    }

    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| NewsRepositoryError::query(POISONED))?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn create(&self, draft: &NewsDraft) -> Result<News, NewsRepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| NewsRepositoryError::query(POISONED))?;
        state.next_id += 1;
        let news = draft.clone().into_news(NewsId::new(state.next_id));
        state.rows.insert(news.id, news.clone());
        Ok(news)
    }
}
