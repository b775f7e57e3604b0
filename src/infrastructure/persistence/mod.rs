//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgNewsRepository`] - News articles
//! - [`PgCategoryRepository`] - Categories
//! - [`PgAuthorRepository`] - Author profiles
//! - [`PgUserRepository`] - User accounts
//! - [`PgTokenRepository`] - API token storage and identity resolution

pub mod pg_author_repository;
pub mod pg_category_repository;
pub mod pg_news_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_news_repository::PgNewsRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
