//! Repository trait for author profiles.

use crate::domain::entities::{Author, NewAuthor, UpdateAuthor};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for author profiles.
///
/// Deleting an author also deletes every article they wrote.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Creates an author profile for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user already has an author profile.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Finds the author profile belonging to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user(&self, user_id: i64) -> Result<Option<Author>, AppError>;

    /// Lists all authors ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Author>, AppError>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateAuthor) -> Result<Author, AppError>;

    /// Deletes an author and their articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
