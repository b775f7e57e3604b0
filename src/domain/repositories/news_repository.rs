//! Repository trait for news articles.

use crate::domain::entities::{NewNews, News, UpdateNews};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for news articles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgNewsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_news.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Persists a new article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the author or category no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_news: NewNews) -> Result<News, AppError>;

    /// Finds an article by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<News>, AppError>;

    /// Lists all articles ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<News>, AppError>;

    /// Lists all articles classified under a category, ordered by ID.
    ///
    /// An unknown category yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<News>, AppError>;

    /// Overwrites the editable fields of an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateNews) -> Result<News, AppError>;

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
