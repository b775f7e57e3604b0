//! Author entity: the publishing profile attached to a user account.

use chrono::{DateTime, Utc};

/// Message returned when a lookup by id finds no author.
pub const AUTHOR_NOT_FOUND: &str = "Author matching query does not exist.";

/// Publishing profile of a user.
///
/// Each user has at most one author record. News ownership is decided by
/// comparing the caller's author record with the article's `author_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating an author record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub user_id: i64,
    pub name: String,
    pub bio: Option<String>,
}

/// Partial update of an author profile.
///
/// `None` leaves a field unchanged. `bio: Some(None)` clears the biography.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub bio: Option<Option<String>>,
}

impl UpdateAuthor {
    /// Applies the update to an existing author in memory.
    pub fn apply(self, mut author: Author) -> Author {
        if let Some(name) = self.name {
            author.name = name;
        }
        if let Some(bio) = self.bio {
            author.bio = bio;
        }
        author
    }
}
