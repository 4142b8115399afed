//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.
//!
//! Rows are validated through [`CommentText`] on the way out so corrupted
//! data surfaces as a query error instead of reaching a page.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, CommentId, CommentText, NewComment, NewsId, UserId};

use super::error_mapping::{diesel_error, pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::{DbPool, PoolError};
use super::schema::comments;

/// Diesel-backed implementation of the comment repository port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CommentRepositoryError {
    pool_error(error)
}

fn map_diesel_error(error: diesel::result::Error) -> CommentRepositoryError {
    diesel_error(error)
}

fn row_to_comment(row: CommentRow) -> Result<Comment, CommentRepositoryError> {
    let CommentRow {
        id,
        news_id,
        author_id,
        text,
        created,
    } = row;

    let text = CommentText::new(text)
        .map_err(|err| CommentRepositoryError::query(format!("stored comment {id}: {err}")))?;

    Ok(Comment {
        id: CommentId::new(id),
        news: NewsId::new(news_id),
        author: UserId::from_uuid(author_id),
        text,
        created,
    })
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn list_for_news(&self, news: NewsId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comments::table
            .filter(comments::news_id.eq(news.get()))
            .order((comments::created.asc(), comments::id.asc()))
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_comment).collect()
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = comments::table
            .find(id.get())
            .select(CommentRow::as_select())
            .first::<CommentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_comment).transpose()
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCommentRow {
            news_id: comment.news.get(),
            author_id: *comment.author.as_uuid(),
            text: comment.text.as_ref(),
            created: comment.created,
        };

        let stored = diesel::insert_into(comments::table)
            .values(&row)
            .returning(CommentRow::as_returning())
            .get_result::<CommentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_comment(stored)
    }

    async fn update_text(
        &self,
        id: CommentId,
        text: &CommentText,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(comments::table.find(id.get()))
            .set(comments::text.eq(text.as_ref()))
            .returning(CommentRow::as_returning())
            .get_result::<CommentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_comment).transpose()
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(comments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn count(&self) -> Result<u64, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = comments::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total).map_err(|err| CommentRepositoryError::query(err.to_string()))
    }
}
