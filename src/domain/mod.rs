//! Domain layer containing business entities and contracts.
//!
//! Independent of infrastructure concerns: it defines what a board and its
//! sharing credential are, and the interfaces the application layer needs
//! from storage and the authorization system.
//!
//! # Architecture
//!
//! - [`entities`] - Board graph and the public snapshot read model
//! - [`sharing_credential`] - Opaque token value object
//! - [`repositories`] - Data access and authorization trait definitions
//! - [`board_event`] - Board update event for live subscribers
//!
//! # Board Event Flow
//!
//! 1. Share service commits a credential change
//! 2. [`board_event::BoardEvent`] is sent to a bounded async channel
//! 3. [`crate::infrastructure::notify::run_event_worker`] publishes it with retry
//! 4. Subscribers on `board:{id}` receive the updated board

pub mod board_event;
pub mod entities;
pub mod repositories;
pub mod sharing_credential;
