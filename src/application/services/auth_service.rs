//! Authentication service resolving API tokens to caller identities.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::identity::Principal;
use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC. Shared by the HTTP
/// authentication path and the `admin` binary that issues tokens.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<dyn TokenRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    fn hash(&self, token: &str) -> String {
        hash_token(&self.signing_secret, token)
    }

    /// Resolves a raw token to the account it belongs to.
    ///
    /// On success, updates the token's `last_used_at` timestamp. A failure to
    /// record usage is logged and does not fail the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let token_hash = self.hash(token);

        let principal = self
            .repository
            .resolve_principal(&token_hash)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid or revoked token."))?;

        if let Err(e) = self.repository.update_last_used(&token_hash).await {
            tracing::warn!(error = %e, user_id = principal.user_id, "Failed to record token usage");
        }

        Ok(principal)
    }

    /// Stores a new token for a user and returns its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name or token is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn issue_token(
        &self,
        user_id: i64,
        name: &str,
        raw_token: &str,
    ) -> Result<ApiToken, AppError> {
        let token_hash = self.hash(raw_token);
        self.repository
            .create_token(user_id, name, &token_hash)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn principal() -> Principal {
        Principal {
            user_id: 1,
            username: "editor".to_string(),
            is_staff: true,
            author_id: Some(3),
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockTokenRepository::new();

        let token = "valid-token";
        let expected_hash = hash_token(&test_secret(), token);
        let expected_for_update = expected_hash.clone();

        mock_repo
            .expect_resolve_principal()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(principal())));

        mock_repo
            .expect_update_last_used()
            .withf(move |hash| hash == expected_for_update)
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate(token).await;

        assert_eq!(result.unwrap(), principal());
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_resolve_principal()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update_last_used().never();

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("invalid-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_ignores_usage_update_failure() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_resolve_principal()
            .times(1)
            .returning(|_| Ok(Some(principal())));
        mock_repo
            .expect_update_last_used()
            .times(1)
            .returning(|_| Err(AppError::internal("db down")));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        assert!(service.authenticate("valid-token").await.is_ok());
    }

    #[tokio::test]
    async fn test_issue_token_stores_hash() {
        let mut mock_repo = MockTokenRepository::new();
        let expected_hash = hash_token(&test_secret(), "raw");

        mock_repo
            .expect_create_token()
            .withf(move |user_id, name, hash| {
                *user_id == 1 && name == "CI" && hash == expected_hash
            })
            .times(1)
            .returning(|user_id, name, hash| {
                Ok(ApiToken {
                    id: 1,
                    user_id,
                    name: name.to_string(),
                    token_hash: hash.to_string(),
                    created_at: Utc::now(),
                    last_used_at: None,
                    revoked_at: None,
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let token = service.issue_token(1, "CI", "raw").await.unwrap();
        assert_ne!(token.token_hash, "raw");
    }

    #[test]
    fn test_hash_token_consistency() {
        let hash1 = hash_token(&test_secret(), "test-token");
        let hash2 = hash_token(&test_secret(), "test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_hash_token_different_inputs() {
        assert_ne!(
            hash_token(&test_secret(), "token1"),
            hash_token(&test_secret(), "token2")
        );
    }

    #[test]
    fn test_hash_token_secret_matters() {
        // Same token, different secrets → different hashes
        assert_ne!(hash_token("secret-a", "token"), hash_token("secret-b", "token"));
    }
}
