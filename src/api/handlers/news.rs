//! Handlers for news endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::common::DeletedResponse;
use crate::api::dto::news::{NewsItem, NewsWriteRequest};
use crate::domain::identity::Identity;
use crate::domain::policy::{Action, Resource};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all news articles.
///
/// # Endpoint
///
/// `GET /api/news`
pub async fn news_list_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<NewsItem>>, AppError> {
    state
        .policy
        .authorize(&identity, Action::List, Resource::News(None))?;

    let news = state.news_service.list().await?;

    Ok(Json(news.into_iter().map(NewsItem::from).collect()))
}

/// Creates a news article authored by the caller.
///
/// # Endpoint
///
/// `POST /api/news`
///
/// # Request Body
///
/// ```json
/// { "title": "Election results", "body": "...", "category": 2 }
/// ```
///
/// The `author` of the new article is always the caller's own author record;
/// an `author` value in the body is ignored.
///
/// # Errors
///
/// Returns 401/403 if the caller is not staff.
/// Returns 400 if the payload is invalid, the category does not exist, or the
/// caller has no author profile.
pub async fn create_news_handler(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<NewsWriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NewsItem>), AppError> {
    state
        .policy
        .authorize(&identity, Action::Create, Resource::News(None))?;

    let Json(payload) = payload?;
    let input = payload.into_update()?;

    let news = state
        .news_service
        .create(
            identity.author_id(),
            input.title,
            input.body,
            input.category_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(news.into())))
}

/// Returns a single news article.
///
/// # Endpoint
///
/// `GET /api/news/{id}`
///
/// # Errors
///
/// Returns 404 if the article does not exist or `{id}` is not an integer.
pub async fn get_news_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<NewsItem>, AppError> {
    let Path(id) = path?;
    let news = state.news_service.get(id).await?;

    state
        .policy
        .authorize(&identity, Action::Read, Resource::News(Some(&news)))?;

    Ok(Json(news.into()))
}

/// Overwrites a news article.
///
/// # Endpoint
///
/// `PUT /api/news/{id}`
///
/// Checks run in order: existence, ownership (author or staff), payload.
///
/// # Errors
///
/// Returns 404 if the article does not exist or `{id}` is not an integer.
/// Returns 401/403 if the caller is neither the owning author nor staff.
/// Returns 400 if the payload is invalid or the category does not exist.
pub async fn update_news_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<NewsWriteRequest>, JsonRejection>,
) -> Result<Json<NewsItem>, AppError> {
    let Path(id) = path?;
    let news = state.news_service.get(id).await?;

    state
        .policy
        .authorize(&identity, Action::Update, Resource::News(Some(&news)))?;

    let Json(payload) = payload?;
    let update = payload.into_update()?;

    let updated = state.news_service.update(news.id, update).await?;

    Ok(Json(updated.into()))
}

/// Deletes a news article.
///
/// # Endpoint
///
/// `DELETE /api/news/{id}`
///
/// # Response
///
/// ```json
/// { "deleted": true }
/// ```
///
/// # Errors
///
/// Returns 404 if the article does not exist or `{id}` is not an integer.
/// Returns 401/403 if the caller is neither the owning author nor staff.
pub async fn delete_news_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(id) = path?;
    let news = state.news_service.get(id).await?;

    state
        .policy
        .authorize(&identity, Action::Delete, Resource::News(Some(&news)))?;

    state.news_service.delete(news.id).await?;

    Ok(Json(DeletedResponse::yes()))
}
