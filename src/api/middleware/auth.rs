//! Optional Bearer token authentication.
//!
//! Requests without an `Authorization` header proceed as
//! [`Identity::Anonymous`]. Requests carrying one must present a valid,
//! unrevoked token; the resolved account is stored in request extensions and
//! picked up by handlers through the [`Identity`] extractor.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{domain::identity::Identity, error::AppError, state::AppState};

/// Resolves the caller's identity from the `Authorization` header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is present but:
/// - does not use the Bearer scheme
/// - carries a token that is unknown or revoked
///
/// A missing header is not an error.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let identity = if parts.headers.contains_key(header::AUTHORIZATION) {
        let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
            .await
            .map_err(|_| AppError::unauthorized("Invalid token header."))?;

        Identity::User(st.auth_service.authenticate(&token).await?)
    } else {
        Identity::Anonymous
    };

    if let Some(user_id) = identity.user_id() {
        tracing::Span::current().record("user_id", user_id);
    }
    tracing::debug!(
        user_id = ?identity.user_id(),
        is_staff = identity.is_staff(),
        "Resolved caller identity"
    );

    parts.extensions.insert(identity);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Reads the identity placed by [`layer`]; defaults to anonymous when the
/// middleware did not run.
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Identity>()
            .cloned()
            .unwrap_or_default())
    }
}
