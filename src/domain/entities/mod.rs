//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; access rules live in
//! [`crate::domain::policy`] and orchestration in the application services.
//!
//! # Entity Types
//!
//! - [`News`] - An article written by an author under a category
//! - [`Category`] - A label articles are classified under
//! - [`Author`] - The publishing profile of a user
//! - [`User`] - An account that authenticates with API tokens
//!
//! Creation inputs use separate `New*` structs, updates use `Update*` structs.

pub mod author;
pub mod category;
pub mod news;
pub mod user;

pub use author::{AUTHOR_NOT_FOUND, Author, NewAuthor, UpdateAuthor};
pub use category::{CATEGORY_NOT_FOUND, Category, NewCategory};
pub use news::{NEWS_NOT_FOUND, News, NewNews, UpdateNews};
pub use user::{NewUser, User};
