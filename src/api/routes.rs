//! API route configuration.

use crate::api::handlers::{public_board_handler, toggle_public_sharing_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes requiring Bearer token authentication via
/// [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST /boards/{id}/public-share-token` - Enable, rotate or revoke a board's public link
pub fn protected_routes() -> Router<AppState> {
    Router::new().route(
        "/boards/{id}/public-share-token",
        post(toggle_public_sharing_handler),
    )
}

/// Anonymous routes.
///
/// # Endpoints
///
/// - `GET /public-boards/{token}` - Read-only board snapshot
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/public-boards/{token}", get(public_board_handler))
}
