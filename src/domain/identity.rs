//! Caller identity attached to every API request.

/// Authenticated account resolved from an API token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub is_staff: bool,
    /// The user's author record, if one exists.
    pub author_id: Option<i64>,
}

/// Who is making a request.
///
/// Requests without an `Authorization` header are [`Identity::Anonymous`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Anonymous,
    User(Principal),
}

impl Identity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::User(_))
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Identity::User(p) if p.is_staff)
    }

    /// Author record of the caller, `None` for anonymous callers and users
    /// without an author profile.
    pub fn author_id(&self) -> Option<i64> {
        match self {
            Identity::User(p) => p.author_id,
            Identity::Anonymous => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        match self {
            Identity::User(p) => Some(p.user_id),
            Identity::Anonymous => None,
        }
    }
}
