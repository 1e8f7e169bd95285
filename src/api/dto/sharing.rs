//! DTOs for the public sharing endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Board;

/// Request body for `POST /api/boards/{id}/public-share-token`.
#[derive(Debug, Deserialize, Validate)]
pub struct ToggleSharingRequest {
    /// `true` issues a fresh credential (rotating any existing one),
    /// `false` revokes it.
    #[validate(required(message = "enabled is required"))]
    pub enabled: Option<bool>,
}

/// Single board wrapped in the `item` envelope.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub item: Board,
}
