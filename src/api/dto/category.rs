//! DTOs for category endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::common::not_blank;
use crate::domain::entities::Category;
use crate::error::{AppError, NON_FIELD_ERRORS};

/// Read profile of a category.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryItem {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// Write profile for `POST /api/categories` and `PUT /api/categories/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryWriteRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,
}

impl CategoryWriteRequest {
    /// Validates the payload and returns the category name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field messages.
    pub fn into_name(self) -> Result<String, AppError> {
        self.validate()?;
        self.name
            .ok_or_else(|| AppError::field(NON_FIELD_ERRORS, "Incomplete payload."))
    }
}
