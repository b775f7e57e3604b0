//! News article service.

use std::sync::Arc;

use crate::domain::entities::{NEWS_NOT_FOUND, NewNews, News, UpdateNews};
use crate::domain::repositories::{CategoryRepository, NewsRepository};
use crate::error::AppError;

/// Service for reading and writing news articles.
///
/// Checks that referenced rows exist before writing. Access control is the
/// caller's job (see [`crate::domain::policy`]).
pub struct NewsService {
    news: Arc<dyn NewsRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl NewsService {
    /// Creates a new news service.
    pub fn new(news: Arc<dyn NewsRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { news, categories }
    }

    /// Lists all articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<News>, AppError> {
        self.news.list().await
    }

    /// Lists the articles of one category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<News>, AppError> {
        self.news.list_by_category(category_id).await
    }

    /// Retrieves an article by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<News, AppError> {
        self.news
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NEWS_NOT_FOUND))
    }

    /// Creates an article owned by `author_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the caller has no author profile or
    /// the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(
        &self,
        author_id: Option<i64>,
        title: String,
        body: String,
        category_id: i64,
    ) -> Result<News, AppError> {
        let author_id = author_id
            .ok_or_else(|| AppError::field("author", "The caller has no author profile."))?;

        self.ensure_category(category_id).await?;

        let news = self
            .news
            .create(NewNews {
                title,
                body,
                author_id,
                category_id,
            })
            .await?;

        tracing::info!(news_id = news.id, author_id, "News created");
        Ok(news)
    }

    /// Overwrites the editable fields of an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the category does not exist.
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, update: UpdateNews) -> Result<News, AppError> {
        self.ensure_category(update.category_id).await?;
        self.news.update(id, update).await
    }

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.news.delete(id).await?;
        tracing::info!(news_id = id, "News deleted");
        Ok(())
    }

    async fn ensure_category(&self, category_id: i64) -> Result<(), AppError> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::field(
                "category",
                format!("Invalid pk \"{category_id}\" - object does not exist."),
            ));
        }
        Ok(())
    }
}
