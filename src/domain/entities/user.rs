//! User account entity.

use chrono::{DateTime, Utc};

/// An account that can authenticate with API tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub is_staff: bool,
}
