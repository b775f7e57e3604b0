//! Author profile service.

use std::sync::Arc;

use crate::domain::entities::{Author, NewAuthor, UpdateAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

/// Service for managing author profiles.
///
/// The HTTP API lists, updates and deletes authors; creation happens through
/// the `admin` binary.
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Author>, AppError> {
        self.repository.list().await
    }

    /// Creates an author profile for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user already has an author profile.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        if self
            .repository
            .find_by_user(new_author.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User already has an author profile"));
        }

        self.repository.create(new_author).await
    }

    /// Applies a partial update to an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, update: UpdateAuthor) -> Result<Author, AppError> {
        self.repository.update(id, update).await
    }

    /// Deletes an author together with their articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }
}
