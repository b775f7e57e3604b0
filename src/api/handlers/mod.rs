//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Handlers call the access
//! policy first, then the service, then map entities to read-profile DTOs.

pub mod authors;
pub mod categories;
pub mod health;
pub mod news;

pub use authors::{
    author_list_handler, delete_author_handler, patch_author_handler, update_author_handler,
};
pub use categories::{
    category_list_handler, category_news_handler, create_category_handler,
    delete_category_handler, get_category_handler, update_category_handler,
};
pub use health::health_handler;
pub use news::{
    create_news_handler, delete_news_handler, get_news_handler, news_list_handler,
    update_news_handler,
};
