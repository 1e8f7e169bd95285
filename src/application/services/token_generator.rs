//! Sharing credential generation with store-backed collision checks.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::repositories::BoardRepository;
use crate::domain::sharing_credential::SharingCredential;
use crate::error::AppError;

/// Upper bound on draws before giving up. With 128 bits of entropy a single
/// collision is already an operational anomaly.
const MAX_ATTEMPTS: usize = 10;

/// Produces credentials that no board holds at the time of the check.
///
/// The returned value is not reserved. Callers persist it themselves and must
/// handle a [`AppError::Conflict`] from the write if another request raced
/// them to the same value.
pub struct TokenGenerator<B: BoardRepository> {
    board_repository: Arc<B>,
}

impl<B: BoardRepository> TokenGenerator<B> {
    pub fn new(board_repository: Arc<B>) -> Self {
        Self { board_repository }
    }

    /// Draws random credentials until one is unused.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the system RNG fails or every one of
    /// the attempts collided.
    pub async fn generate(&self) -> Result<SharingCredential, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = SharingCredential::random().map_err(|e| {
                AppError::internal(
                    "Failed to generate sharing token",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            if self
                .board_repository
                .find_by_share_token(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }

            warn!(
                attempt,
                prefix = candidate.prefix(),
                "Sharing token collision, regenerating"
            );
        }

        Err(AppError::internal(
            "Failed to generate unique sharing token",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
