//! Handler for toggling a board's public link.

use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use validator::Validate;

use crate::api::dto::sharing::{BoardResponse, ToggleSharingRequest};
use crate::domain::entities::Actor;
use crate::error::AppError;
use crate::state::AppState;

/// Enables, rotates or revokes the public sharing link of a board.
///
/// # Endpoint
///
/// `POST /api/boards/{id}/public-share-token`
///
/// # Request Body
///
/// ```json
/// { "enabled": true }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "item": {
///     "id": 12,
///     "projectId": 3,
///     "name": "Roadmap",
///     "publicShareToken": "9f86d081884c7d659a2feaa0c55ad015",
///     ...
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 if `enabled` is missing or not a boolean, or the id is not numeric
/// - 401 if the bearer token is missing or invalid
/// - 403 if the caller is not a manager of the board's project
/// - 404 if the board does not exist
pub async fn toggle_public_sharing_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ToggleSharingRequest>, JsonRejection>,
) -> Result<Json<BoardResponse>, AppError> {
    let Path(board_id) = path?;
    let Json(payload) = payload?;
    payload.validate()?;

    let enabled = payload.enabled == Some(true);

    let board = state
        .share_service
        .set_sharing_enabled(board_id, enabled, &actor)
        .await?;

    Ok(Json(BoardResponse { item: board }))
}
