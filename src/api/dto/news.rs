//! DTOs for news endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::common::not_blank;
use crate::domain::entities::{News, UpdateNews};
use crate::error::{AppError, NON_FIELD_ERRORS};

/// Read profile of a news article.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// ID of the author who wrote the article.
    pub author: i64,
    /// ID of the category the article is classified under.
    pub category: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<News> for NewsItem {
    fn from(n: News) -> Self {
        Self {
            id: n.id,
            title: n.title,
            body: n.body,
            author: n.author_id,
            category: n.category_id,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

/// Write profile for `POST /api/news` and `PUT /api/news/{id}`.
///
/// Every field is required; `PUT` overwrites the whole article. Unknown
/// fields (including `author`) are ignored: the author always comes from
/// the authenticated caller.
#[derive(Debug, Deserialize, Validate)]
pub struct NewsWriteRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub body: Option<String>,

    /// ID of an existing category.
    #[validate(required(message = "This field is required."))]
    pub category: Option<i64>,
}

impl NewsWriteRequest {
    /// Validates the payload and converts it into the editable fields of an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field messages.
    pub fn into_update(self) -> Result<UpdateNews, AppError> {
        self.validate()?;

        let (Some(title), Some(body), Some(category_id)) = (self.title, self.body, self.category)
        else {
            return Err(AppError::field(NON_FIELD_ERRORS, "Incomplete payload."));
        };

        Ok(UpdateNews {
            title,
            body,
            category_id,
        })
    }
}
