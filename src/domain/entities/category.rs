//! Category entity.

use chrono::{DateTime, Utc};

/// Message returned when a lookup by id finds no category.
pub const CATEGORY_NOT_FOUND: &str = "Category matching query does not exist.";

/// A label news articles are classified under.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating or overwriting a category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}
