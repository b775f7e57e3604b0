//! PostgreSQL implementation of the author repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{AUTHOR_NOT_FOUND, Author, NewAuthor, UpdateAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    user_id: i64,
    name: String,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            bio: r.bio,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for author profiles.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (user_id, name, bio)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, bio, created_at, updated_at
            "#,
        )
        .bind(new_author.user_id)
        .bind(new_author.name)
        .bind(new_author.bio)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, user_id, name, bio, created_at, updated_at FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, user_id, name, bio, created_at, updated_at FROM authors WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, user_id, name, bio, created_at, updated_at FROM authors ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, update: UpdateAuthor) -> Result<Author, AppError> {
        let update_bio = update.bio.is_some();
        let new_bio = update.bio.flatten();

        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            UPDATE authors SET
                name       = COALESCE($2::TEXT, name),
                bio        = CASE WHEN $3 THEN $4::TEXT ELSE bio END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, name, bio, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update_bio)
        .bind(new_bio)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found(AUTHOR_NOT_FOUND))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(AUTHOR_NOT_FOUND));
        }

        Ok(())
    }
}
