//! Redis pub/sub notification bus.

use super::service::{NotificationBus, NotifyError, NotifyResult};
use crate::domain::board_event::BoardEvent;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Publishes board events with Redis `PUBLISH` on `board:{id}`.
///
/// Uses `ConnectionManager` for automatic reconnection; the manager is cheap
/// to clone per call.
pub struct RedisBus {
    client: ConnectionManager,
}

impl RedisBus {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> NotifyResult<Self> {
        info!("Connecting to Redis notification bus");

        let client = Client::open(redis_url).map_err(|e| {
            NotifyError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| NotifyError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| NotifyError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl NotificationBus for RedisBus {
    async fn publish(&self, event: &BoardEvent) -> NotifyResult<()> {
        let channel = event.channel();
        let message = event.to_message()?;
        let mut conn = self.client.clone();

        let receivers = conn
            .publish::<_, _, i64>(&channel, message)
            .await
            .map_err(|e| NotifyError::Publish(e.to_string()))?;

        debug!(channel = %channel, receivers, "Board event published");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
