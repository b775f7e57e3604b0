//! Handlers for author management endpoints.
//!
//! Every handler here is staff only.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::author::{AuthorItem, AuthorPatchRequest, AuthorUpdateRequest};
use crate::domain::identity::Identity;
use crate::domain::policy::{Action, Resource};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all authors.
///
/// # Endpoint
///
/// `GET /api/authors`
pub async fn author_list_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<AuthorItem>>, AppError> {
    state
        .policy
        .authorize(&identity, Action::List, Resource::Author)?;

    let authors = state.author_service.list().await?;

    Ok(Json(authors.into_iter().map(AuthorItem::from).collect()))
}

/// Overwrites an author profile.
///
/// # Endpoint
///
/// `PUT /api/authors/{id}`
///
/// # Errors
///
/// Returns 401/403 if the caller is not staff.
/// Returns 400 if the payload is invalid.
/// Returns 404 if the author does not exist.
pub async fn update_author_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<AuthorUpdateRequest>, JsonRejection>,
) -> Result<Json<AuthorItem>, AppError> {
    state
        .policy
        .authorize(&identity, Action::Update, Resource::Author)?;
    let Path(id) = path?;

    let Json(payload) = payload?;
    let author = state
        .author_service
        .update(id, payload.into_update()?)
        .await?;

    Ok(Json(author.into()))
}

/// Partially updates an author profile.
///
/// # Endpoint
///
/// `PATCH /api/authors/{id}`
///
/// All fields are optional. `bio: null` clears the biography.
pub async fn patch_author_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<AuthorPatchRequest>, JsonRejection>,
) -> Result<Json<AuthorItem>, AppError> {
    state
        .policy
        .authorize(&identity, Action::Update, Resource::Author)?;
    let Path(id) = path?;

    let Json(payload) = payload?;
    let author = state
        .author_service
        .update(id, payload.into_update()?)
        .await?;

    Ok(Json(author.into()))
}

/// Deletes an author and every article they wrote.
///
/// # Endpoint
///
/// `DELETE /api/authors/{id}`
///
/// # Errors
///
/// Returns 401/403 if the caller is not staff.
/// Returns 404 if the author does not exist.
pub async fn delete_author_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    identity: Identity,
) -> Result<StatusCode, AppError> {
    state
        .policy
        .authorize(&identity, Action::Delete, Resource::Author)?;
    let Path(id) = path?;

    state.author_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
