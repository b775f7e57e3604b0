//! Access rules for news, categories and authors.
//!
//! [`AccessPolicy::decide`] is a pure function of the caller, the action and
//! the target resource. Handlers call [`AccessPolicy::authorize`] before any
//! mutating persistence call and return its error unchanged.
//!
//! | Resource        | Action                 | Rule                     |
//! |-----------------|------------------------|--------------------------|
//! | News            | list, read             | always                   |
//! | News            | create                 | staff                    |
//! | News            | update, delete         | owning author or staff   |
//! | Category        | list, read             | always                   |
//! | Category        | create, update, delete | see [`CategoryWrites`]   |
//! | Category news   | list, read             | always                   |
//! | Author          | any                    | staff                    |

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::News;
use crate::domain::identity::Identity;
use crate::error::AppError;

/// Message returned to authenticated callers that are denied.
pub const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

/// Message returned to anonymous callers that are denied.
pub const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn is_read(self) -> bool {
        matches!(self, Action::List | Action::Read)
    }
}

/// Target of an access decision.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    /// The news collection (`None`) or a concrete article.
    News(Option<&'a News>),
    Category,
    /// News filtered by category.
    CategoryNews,
    Author,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Who may create, update and delete categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryWrites {
    /// Staff only, like news creation.
    #[default]
    StaffOnly,
    /// Any authenticated caller, no ownership restriction.
    Authenticated,
}

impl FromStr for CategoryWrites {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "staff" => Ok(CategoryWrites::StaffOnly),
            "authenticated" => Ok(CategoryWrites::Authenticated),
            other => Err(format!(
                "expected 'staff' or 'authenticated', got '{other}'"
            )),
        }
    }
}

impl fmt::Display for CategoryWrites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryWrites::StaffOnly => f.write_str("staff"),
            CategoryWrites::Authenticated => f.write_str("authenticated"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy {
    category_writes: CategoryWrites,
}

impl AccessPolicy {
    pub fn new(category_writes: CategoryWrites) -> Self {
        Self { category_writes }
    }

    pub fn category_writes(&self) -> CategoryWrites {
        self.category_writes
    }

    pub fn decide(&self, identity: &Identity, action: Action, resource: Resource<'_>) -> Decision {
        let allowed = match resource {
            Resource::News(item) => match action {
                Action::List | Action::Read => true,
                Action::Create => identity.is_staff(),
                Action::Update | Action::Delete => {
                    identity.is_staff() || item.is_some_and(|news| owns(identity, news))
                }
            },
            Resource::Category => {
                action.is_read()
                    || match self.category_writes {
                        CategoryWrites::StaffOnly => identity.is_staff(),
                        CategoryWrites::Authenticated => identity.is_authenticated(),
                    }
            }
            Resource::CategoryNews => action.is_read(),
            Resource::Author => identity.is_staff(),
        };

        if allowed {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }

    /// Runs [`decide`](Self::decide) and converts a denial into an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when an anonymous caller is denied
    /// and [`AppError::Forbidden`] when an authenticated caller is denied.
    pub fn authorize(
        &self,
        identity: &Identity,
        action: Action,
        resource: Resource<'_>,
    ) -> Result<(), AppError> {
        match self.decide(identity, action, resource) {
            Decision::Allow => Ok(()),
            Decision::Deny => {
                tracing::debug!(
                    user_id = ?identity.user_id(),
                    ?action,
                    ?resource,
                    "Access denied"
                );
                if identity.is_authenticated() {
                    Err(AppError::forbidden(PERMISSION_DENIED))
                } else {
                    Err(AppError::unauthorized(NOT_AUTHENTICATED))
                }
            }
        }
    }
}

fn owns(identity: &Identity, news: &News) -> bool {
    identity
        .author_id()
        .is_some_and(|author_id| news.is_written_by(author_id))
}
