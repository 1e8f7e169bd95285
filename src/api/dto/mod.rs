//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. The public snapshot is serialized straight from
//! [`crate::domain::entities::BoardSnapshot`].

pub mod health;
pub mod sharing;
