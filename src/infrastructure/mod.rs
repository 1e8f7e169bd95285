//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and live-update fan-out.
//!
//! # Modules
//!
//! - [`notify`] - Board event publishing (Redis and in-process implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod notify;
pub mod persistence;
