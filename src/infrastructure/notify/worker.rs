//! Background delivery of queued board events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::{
    Retry,
    strategy::{ExponentialBackoff, jitter},
};
use tracing::{error, info};

use super::service::NotificationBus;
use crate::domain::board_event::BoardEvent;

/// Number of retries after the first failed publish.
const PUBLISH_RETRIES: usize = 3;

/// Drains the board event queue until every sender is dropped.
///
/// Each event is published with jittered exponential backoff. An event that
/// still fails is logged and counted, then dropped; the worker keeps going.
pub async fn run_event_worker(mut rx: mpsc::Receiver<BoardEvent>, bus: Arc<dyn NotificationBus>) {
    info!("Board event worker started");

    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(10)
            .map(jitter)
            .take(PUBLISH_RETRIES);

        if let Err(e) = Retry::spawn(strategy, || bus.publish(&event)).await {
            metrics::counter!("board_events_publish_failures_total").increment(1);
            error!(board_id = event.board_id, error = %e, "Failed to publish board event");
        }
    }

    info!("Board event worker stopped");
}
