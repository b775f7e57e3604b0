//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by concrete
//! repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`NewsRepository`] - News article CRUD
//! - [`CategoryRepository`] - Category CRUD
//! - [`AuthorRepository`] - Author profile management
//! - [`UserRepository`] - User accounts (admin CLI)
//! - [`TokenRepository`] - API token authentication

pub mod author_repository;
pub mod category_repository;
pub mod news_repository;
pub mod token_repository;
pub mod user_repository;

pub use author_repository::AuthorRepository;
pub use category_repository::CategoryRepository;
pub use news_repository::NewsRepository;
pub use token_repository::{ApiToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use news_repository::MockNewsRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
