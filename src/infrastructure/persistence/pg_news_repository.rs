//! PostgreSQL implementation of the news repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NEWS_NOT_FOUND, NewNews, News, UpdateNews};
use crate::domain::repositories::NewsRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<NewsRow> for News {
    fn from(r: NewsRow) -> Self {
        News {
            id: r.id,
            title: r.title,
            body: r.body,
            author_id: r.author_id,
            category_id: r.category_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for news articles.
///
/// Author and category references are enforced by foreign keys; a violation
/// surfaces as [`AppError::Validation`].
pub struct PgNewsRepository {
    pool: Arc<PgPool>,
}

impl PgNewsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    async fn create(&self, new_news: NewNews) -> Result<News, AppError> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            INSERT INTO news (title, body, author_id, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, author_id, category_id, created_at, updated_at
            "#,
        )
        .bind(new_news.title)
        .bind(new_news.body)
        .bind(new_news.author_id)
        .bind(new_news.category_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<News>, AppError> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT id, title, body, author_id, category_id, created_at, updated_at
            FROM news
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<News>, AppError> {
        let rows = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT id, title, body, author_id, category_id, created_at, updated_at
            FROM news
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<News>, AppError> {
        let rows = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT id, title, body, author_id, category_id, created_at, updated_at
            FROM news
            WHERE category_id = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, update: UpdateNews) -> Result<News, AppError> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            UPDATE news SET
                title       = $2,
                body        = $3,
                category_id = $4,
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, title, body, author_id, category_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.body)
        .bind(update.category_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found(NEWS_NOT_FOUND))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(NEWS_NOT_FOUND));
        }

        Ok(())
    }
}
