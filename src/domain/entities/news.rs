//! News article entity.

use chrono::{DateTime, Utc};

/// Message returned when a lookup by id finds no news.
pub const NEWS_NOT_FOUND: &str = "News matching query does not exist.";

/// A published news article.
///
/// Every article is written by exactly one [`super::Author`] and classified
/// under exactly one [`super::Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    /// Returns true if the article was written by the given author.
    pub fn is_written_by(&self, author_id: i64) -> bool {
        self.author_id == author_id
    }

    /// Returns true if the article is classified under the given category.
    pub fn is_in_category(&self, category_id: i64) -> bool {
        self.category_id == category_id
    }
}

/// Input data for creating a new article.
///
/// `author_id` is always taken from the calling identity, never from the
/// request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNews {
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub category_id: i64,
}

/// Full overwrite of an article's editable fields.
///
/// The author never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateNews {
    pub title: String,
    pub body: String,
    pub category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> News {
        let now = Utc::now();
        News {
            id: 1,
            title: "Launch".to_string(),
            body: "We launched.".to_string(),
            author_id: 7,
            category_id: 3,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_written_by() {
        let news = sample();
        assert!(news.is_written_by(7));
        assert!(!news.is_written_by(8));
    }

    #[test]
    fn test_is_in_category() {
        let news = sample();
        assert!(news.is_in_category(3));
        assert!(!news.is_in_category(4));
    }
}
