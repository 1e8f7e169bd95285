//! In-process notification bus.

use super::service::{NotificationBus, NotifyResult};
use crate::domain::board_event::BoardEvent;
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

/// Broadcasts board events to subscribers inside this process.
///
/// Used when Redis is not configured or unreachable at startup, and in
/// tests. Slow subscribers lag and lose the oldest events.
pub struct LocalBus {
    sender: broadcast::Sender<BoardEvent>,
}

impl LocalBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        debug!("Using in-process notification bus");
        Self { sender }
    }

    /// Registers a new subscriber. Only events published afterwards are seen.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.sender.subscribe()
    }
}

impl Default for LocalBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl NotificationBus for LocalBus {
    async fn publish(&self, event: &BoardEvent) -> NotifyResult<()> {
        match self.sender.send(event.clone()) {
            Ok(receivers) => debug!(board_id = event.board_id, receivers, "Board event broadcast"),
            Err(_) => debug!(board_id = event.board_id, "Board event had no subscribers"),
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
