//! DTOs for author endpoints.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::api::dto::common::not_blank;
use crate::domain::entities::{Author, UpdateAuthor};
use crate::error::{AppError, NON_FIELD_ERRORS};

/// Read profile of an author.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthorItem {
    pub id: i64,
    /// ID of the user account behind this author.
    pub user: i64,
    pub name: String,
    pub bio: Option<String>,
}

impl From<Author> for AuthorItem {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            user: a.user_id,
            name: a.name,
            bio: a.bio,
        }
    }
}

/// Request body for `PUT /api/authors/{id}`: full overwrite of the profile.
///
/// An absent `bio` clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct AuthorUpdateRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 150, message = "Ensure this field has no more than 150 characters.")
    )]
    pub name: Option<String>,

    pub bio: Option<String>,
}

impl AuthorUpdateRequest {
    /// Validates the payload and converts it into an update touching every field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field messages.
    pub fn into_update(self) -> Result<UpdateAuthor, AppError> {
        self.validate()?;
        let name = self
            .name
            .ok_or_else(|| AppError::field(NON_FIELD_ERRORS, "Incomplete payload."))?;

        Ok(UpdateAuthor {
            name: Some(name),
            bio: Some(self.bio),
        })
    }
}

/// Request body for `PATCH /api/authors/{id}`.
///
/// # `bio` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the biography
/// - **String** → set new biography
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AuthorPatchRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 150, message = "Ensure this field has no more than 150 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub bio: Option<Option<String>>,
}

impl AuthorPatchRequest {
    /// Validates the payload and converts it into a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field messages.
    pub fn into_update(self) -> Result<UpdateAuthor, AppError> {
        self.validate()?;
        Ok(UpdateAuthor {
            name: self.name,
            bio: self.bio,
        })
    }
}
