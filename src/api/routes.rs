//! API route configuration.
//!
//! Every route accepts an optional Bearer token (see
//! [`crate::api::middleware::auth`]); access is decided per handler by the
//! [`AccessPolicy`](crate::domain::policy::AccessPolicy).

use crate::api::handlers::{
    author_list_handler, category_list_handler, category_news_handler, create_category_handler,
    create_news_handler, delete_author_handler, delete_category_handler, delete_news_handler,
    get_category_handler, get_news_handler, news_list_handler, patch_author_handler,
    update_author_handler, update_category_handler, update_news_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /news`                  - List news (public)
/// - `POST   /news`                  - Create news (staff)
/// - `GET    /news/{id}`             - Read news (public)
/// - `PUT    /news/{id}`             - Update news (author or staff)
/// - `DELETE /news/{id}`             - Delete news (author or staff)
/// - `GET    /categories`            - List categories (public)
/// - `POST   /categories`            - Create a category
/// - `GET    /categories/{id}`       - Read a category (public)
/// - `PUT    /categories/{id}`       - Update a category
/// - `DELETE /categories/{id}`       - Delete a category and its news
/// - `GET    /categories/{id}/news`  - News of one category (public)
/// - `GET    /authors`               - List authors (staff)
/// - `PUT    /authors/{id}`          - Replace an author profile (staff)
/// - `PATCH  /authors/{id}`          - Partially update an author profile (staff)
/// - `DELETE /authors/{id}`          - Delete an author and their news (staff)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(news_list_handler).post(create_news_handler))
        .route(
            "/news/{id}",
            get(get_news_handler)
                .put(update_news_handler)
                .delete(delete_news_handler),
        )
        .route(
            "/categories",
            get(category_list_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
        .route("/categories/{id}/news", get(category_news_handler))
        .route("/authors", get(author_list_handler))
        .route(
            "/authors/{id}",
            put(update_author_handler)
                .patch(patch_author_handler)
                .delete(delete_author_handler),
        )
}
