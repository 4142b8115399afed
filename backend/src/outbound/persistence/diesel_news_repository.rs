//! PostgreSQL-backed `NewsRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NewsRepository, NewsRepositoryError};
use crate::domain::{News, NewsDraft, NewsId};

use super::error_mapping::{diesel_error, pool_error};
use super::models::{NewNewsRow, NewsRow};
use super::pool::{DbPool, PoolError};
use super::schema::news;

/// Diesel-backed implementation of the news repository port.
#[derive(Clone)]
pub struct DieselNewsRepository {
    pool: DbPool,
}

impl DieselNewsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NewsRepositoryError {
    pool_error(error)
}

fn map_diesel_error(error: diesel::result::Error) -> NewsRepositoryError {
    diesel_error(error)
}

fn row_to_news(row: NewsRow) -> News {
    News {
        id: NewsId::new(row.id),
        title: row.title,
        text: row.text,
        date: row.date,
    }
}

#[async_trait]
impl NewsRepository for DieselNewsRepository {
    async fn list_latest(&self, limit: usize) -> Result<Vec<News>, NewsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows: Vec<NewsRow> = news::table
            .order((news::date.desc(), news::id.desc()))
            .limit(limit)
            .select(NewsRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_news).collect())
    }

    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = news::table
            .find(id.get())
            .select(NewsRow::as_select())
            .first::<NewsRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_news))
    }

    async fn create(&self, draft: &NewsDraft) -> Result<News, NewsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewNewsRow {
            title: draft.title(),
            text: draft.text(),
            date: draft.date(),
        };

        diesel::insert_into(news::table)
            .values(&row)
            .returning(NewsRow::as_returning())
            .get_result::<NewsRow>(&mut conn)
            .await
            .map(row_to_news)
            .map_err(map_diesel_error)
    }
}
