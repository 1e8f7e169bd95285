//! Live-update fan-out for board events.
//!
//! Provides a [`NotificationBus`] trait with two implementations and the
//! worker that drains the outbound event queue:
//! - [`RedisBus`] - Redis pub/sub for multi-instance deployments
//! - [`LocalBus`] - In-process broadcast fallback
//! - [`run_event_worker`] - Background publisher with retry

mod local_bus;
mod redis_bus;
mod service;
mod worker;

pub use local_bus::LocalBus;
pub use redis_bus::RedisBus;
pub use service::{NotificationBus, NotifyError, NotifyResult};
pub use worker::run_event_worker;
