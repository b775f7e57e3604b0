//! Handlers for category endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::category::{CategoryItem, CategoryWriteRequest};
use crate::api::dto::common::DeletedResponse;
use crate::api::dto::news::NewsItem;
use crate::domain::identity::Identity;
use crate::domain::policy::{Action, Resource};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn category_list_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<CategoryItem>>, AppError> {
    state
        .policy
        .authorize(&identity, Action::List, Resource::Category)?;

    let categories = state.category_service.list().await?;

    Ok(Json(categories.into_iter().map(CategoryItem::from).collect()))
}

/// Creates a category.
///
/// # Endpoint
///
/// `POST /api/categories`
///
/// # Errors
///
/// Returns 401/403 if the caller may not write categories.
/// Returns 400 if the payload is invalid.
pub async fn create_category_handler(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<CategoryWriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryItem>), AppError> {
    state
        .policy
        .authorize(&identity, Action::Create, Resource::Category)?;

    let Json(payload) = payload?;
    let category = state.category_service.create(payload.into_name()?).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Returns a single category.
///
/// # Endpoint
///
/// `GET /api/categories/{id}`
pub async fn get_category_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<CategoryItem>, AppError> {
    let Path(id) = path?;
    let category = state.category_service.get(id).await?;

    state
        .policy
        .authorize(&identity, Action::Read, Resource::Category)?;

    Ok(Json(category.into()))
}

/// Overwrites a category.
///
/// # Endpoint
///
/// `PUT /api/categories/{id}`
///
/// # Errors
///
/// Returns 404 if the category does not exist.
/// Returns 401/403 if the caller may not write categories.
/// Returns 400 if the payload is invalid.
pub async fn update_category_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<CategoryWriteRequest>, JsonRejection>,
) -> Result<Json<CategoryItem>, AppError> {
    let Path(id) = path?;
    let category = state.category_service.get(id).await?;

    state
        .policy
        .authorize(&identity, Action::Update, Resource::Category)?;

    let Json(payload) = payload?;
    let updated = state
        .category_service
        .update(category.id, payload.into_name()?)
        .await?;

    Ok(Json(updated.into()))
}

/// Deletes a category and every article classified under it.
///
/// # Endpoint
///
/// `DELETE /api/categories/{id}`
///
/// # Errors
///
/// Returns 404 if the category does not exist.
/// Returns 401/403 if the caller may not write categories.
pub async fn delete_category_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(id) = path?;
    let category = state.category_service.get(id).await?;

    state
        .policy
        .authorize(&identity, Action::Delete, Resource::Category)?;

    state.category_service.delete(category.id).await?;

    Ok(Json(DeletedResponse::yes()))
}

/// Lists the news articles of a category.
///
/// # Endpoint
///
/// `GET /api/categories/{id}/news`
///
/// An unknown category yields an empty array. A non-integer `{id}` is a 404.
pub async fn category_news_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<NewsItem>>, AppError> {
    state
        .policy
        .authorize(&identity, Action::List, Resource::CategoryNews)?;
    let Path(id) = path?;

    let news = state.news_service.list_by_category(id).await?;

    Ok(Json(news.into_iter().map(NewsItem::from).collect()))
}
