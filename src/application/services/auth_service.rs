//! Authentication service resolving API bearer tokens to actors.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::Actor;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::token_hash::hmac_sha256_hex;

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with the server signing secret.
    pub fn hash_token(&self, token: &str) -> String {
        hmac_sha256_hex(&self.signing_secret, token)
    }

    /// Authenticates a raw token and returns the user it belongs to.
    ///
    /// On success the token's `last_used_at` is refreshed; a failure there is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Actor, AppError> {
        let token_hash = self.hash_token(token);

        let Some(user_id) = self.repository.find_user_by_token_hash(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        };

        if let Err(e) = self.repository.update_last_used(&token_hash).await {
            debug!(error = %e, "Failed to refresh token last_used_at");
        }

        Ok(Actor::new(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockTokenRepository::new();

        let token = "valid-token";
        let expected_hash = hmac_sha256_hex(&test_secret(), token);

        mock_repo
            .expect_find_user_by_token_hash()
            .withf(move |hash| hash == &expected_hash)
            .times(1)
            .returning(|_| Ok(Some(42)));

        mock_repo
            .expect_update_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let actor = service.authenticate(token).await.unwrap();

        assert_eq!(actor, Actor::new(42));
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_find_user_by_token_hash()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update_last_used().never();

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("invalid-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_last_used_failure_is_ignored() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_find_user_by_token_hash()
            .returning(|_| Ok(Some(7)));
        mock_repo
            .expect_update_last_used()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        assert_eq!(service.authenticate("t").await.unwrap().user_id, 7);
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        let svc1 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-a".to_string());
        let svc2 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-b".to_string());

        assert_ne!(svc1.hash_token("token"), svc2.hash_token("token"));
        assert_eq!(svc1.hash_token("token").len(), 64);
    }
}
