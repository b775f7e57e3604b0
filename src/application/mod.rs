//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the `admin` binary.
//!
//! # Available Services
//!
//! - [`services::news_service::NewsService`] - News articles and category filtering
//! - [`services::category_service::CategoryService`] - Category management
//! - [`services::author_service::AuthorService`] - Author profiles
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
