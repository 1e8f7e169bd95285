//! Handler for the anonymous board snapshot.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::header,
    response::IntoResponse,
};

use crate::application::services::snapshot_service::public_board_not_found;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the read-only snapshot of a publicly shared board.
///
/// # Endpoint
///
/// `GET /public-boards/{token}`
///
/// No authentication: the token in the path is the only credential. The
/// response is marked `Cache-Control: no-store` so a revoked link is not
/// served from intermediary caches.
///
/// # Response
///
/// ```json
/// {
///   "item": { "id": 12, "name": "Roadmap", ... },
///   "included": {
///     "labels": [], "lists": [], "cards": [], "cardLabels": [],
///     "taskLists": [], "tasks": [], "customFieldGroups": [],
///     "customFields": [], "customFieldValues": [], "projects": [],
///     "attachments": []
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 with the same body for malformed, unknown and revoked tokens.
/// A path segment that fails to decode counts as malformed.
pub async fn public_board_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(token) = path.map_err(|_| public_board_not_found())?;
    let snapshot = state.snapshot_service.get_public_snapshot(&token).await?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(snapshot)))
}
