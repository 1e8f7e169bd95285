//! Notification bus trait and error types.

use async_trait::async_trait;

use crate::domain::board_event::BoardEvent;

/// Errors that can occur while publishing board events.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification bus connection error: {0}")]
    Connection(String),
    #[error("Notification bus publish error: {0}")]
    Publish(String),
    #[error("Failed to encode board event: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for notification operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Fan-out of board events to live subscribers.
///
/// Delivery is best-effort. Callers never block a request on it: events are
/// queued and published by [`crate::infrastructure::notify::run_event_worker`].
///
/// # Implementations
///
/// - [`crate::infrastructure::notify::RedisBus`] - Redis pub/sub, shared across instances
/// - [`crate::infrastructure::notify::LocalBus`] - In-process broadcast for single-node setups
#[async_trait]
pub trait NotificationBus: Send + Sync {
    /// Publishes `event` on its per-board channel.
    ///
    /// Having no subscribers is not an error.
    async fn publish(&self, event: &BoardEvent) -> NotifyResult<()>;

    /// Checks if the bus backend is reachable.
    async fn health_check(&self) -> bool;
}
