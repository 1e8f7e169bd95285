//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1`
/// 2. **Event Queue**: Checks if the board event channel is open and reports capacity
/// 3. **Notification Bus**: Backend reachability (Redis PING, always ok in-process)
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let queue_check = check_event_queue(&state);
    let bus_check = check_notification_bus(&state).await;

    let all_healthy = db_check.is_ok() && queue_check.is_ok() && bus_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            event_queue: queue_check,
            notification_bus: bus_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query("SELECT 1").execute(state.db.as_ref()).await {
        Ok(_) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

fn check_event_queue(state: &AppState) -> CheckStatus {
    if state.event_sender.is_closed() {
        CheckStatus::error("Event queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", state.event_sender.capacity()))
    }
}

async fn check_notification_bus(state: &AppState) -> CheckStatus {
    if state.notifier.health_check().await {
        CheckStatus::ok("Reachable")
    } else {
        CheckStatus::error("Notification bus unreachable")
    }
}
