use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, CommentId, CommentText, NewComment, NewsId, comment_listing};

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<CommentId, Comment>,
}

/// In-memory [`CommentRepository`].
#[derive(Default)]
pub struct MemoryCommentRepository {
    state: RwLock<State>,
}

impl MemoryCommentRepository {
    fn poisoned<T>(_: T) -> CommentRepositoryError {
        CommentRepositoryError::query(POISONED)
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn list_for_news(&self, news: NewsId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let state = self.state.read().map_err(Self::poisoned)?;
        let comments = state
            .rows
            .values()
            .filter(|comment| comment.news == news)
            .cloned()
            .collect();
        Ok(comment_listing(comments))
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        let state = self.state.read().map_err(Self::poisoned)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut state = self.state.write().map_err(Self::poisoned)?;
        state.next_id += 1;
        let comment = comment.clone().into_comment(CommentId::new(state.next_id));
        state.rows.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update_text(
        &self,
        id: CommentId,
        text: &CommentText,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut state = self.state.write().map_err(Self::poisoned)?;
        Ok(state.rows.get_mut(&id).map(|comment| {
            comment.text = text.clone();
            comment.clone()
        }))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError> {
        let mut state = self.state.write().map_err(Self::poisoned)?;
        Ok(state.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, CommentRepositoryError> {
        let state = self.state.read().map_err(Self::poisoned)?;
        Ok(state.rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use chrono::{Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};

    fn new_comment(news: i64, minutes: i64) -> NewComment {
        let base = Utc
            .with_ymd_and_hms(2024, 2, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        NewComment {
            news: NewsId::new(news),
            author: UserId::random(),
            text: CommentText::new(format!("Текст {minutes}")).expect("valid text"),
            created: base + Duration::minutes(minutes),
        }
    }

    #[fixture]
    fn repo() -> MemoryCommentRepository {
        MemoryCommentRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn lists_only_the_news_thread_oldest_first(repo: MemoryCommentRepository) {
        for (news, minutes) in [(1, 20), (2, 0), (1, -5), (1, 10)] {
            repo.create(&new_comment(news, minutes)).await.expect("insert");
        }

        let thread = repo.list_for_news(NewsId::new(1)).await.expect("list");
        let created: Vec<_> = thread.iter().map(|comment| comment.created).collect();
        let mut sorted = created.clone();
        sorted.sort();
        assert_eq!(thread.len(), 3);
        assert_eq!(created, sorted);
        assert_eq!(repo.count().await.expect("count"), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn update_text_keeps_author_news_and_timestamp(repo: MemoryCommentRepository) {
        let stored = repo.create(&new_comment(1, 0)).await.expect("insert");
        let text = CommentText::new("Новый текст").expect("valid text");

        let updated = repo
            .update_text(stored.id, &text)
            .await
            .expect("update")
            .expect("comment exists");

        assert_eq!(updated.text, text);
        assert_eq!(updated.author, stored.author);
        assert_eq!(updated.news, stored.news);
        assert_eq!(updated.created, stored.created);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_rows_are_reported(repo: MemoryCommentRepository) {
        let text = CommentText::new("Текст").expect("valid text");
        assert_eq!(
            repo.update_text(CommentId::new(9), &text).await.expect("update"),
            None
        );
        assert!(!repo.delete(CommentId::new(9)).await.expect("delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_exactly_one(repo: MemoryCommentRepository) {
        let first = repo.create(&new_comment(1, 0)).await.expect("insert");
        repo.create(&new_comment(1, 1)).await.expect("insert");

        assert!(repo.delete(first.id).await.expect("delete"));
        assert_eq!(repo.count().await.expect("count"), 1);
        assert_eq!(repo.find_by_id(first.id).await.expect("lookup"), None);
    }
}
