//! Category service.

use std::sync::Arc;

use crate::domain::entities::{CATEGORY_NOT_FOUND, Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// Service for managing categories.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a category by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Category, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(CATEGORY_NOT_FOUND))
    }

    pub async fn create(&self, name: String) -> Result<Category, AppError> {
        let category = self.repository.create(NewCategory { name }).await?;
        tracing::info!(category_id = category.id, "Category created");
        Ok(category)
    }

    pub async fn update(&self, id: i64, name: String) -> Result<Category, AppError> {
        self.repository.update(id, NewCategory { name }).await
    }

    /// Deletes a category together with its articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }

    /// Counts categories; used by the health check.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
