//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Contracts
//!
//! - [`BoardRepository`] - Board lookup and sharing credential writes
//! - [`ProjectRepository`] - Parent project lookup
//! - [`BoardContentRepository`] - Read-only board entity graph
//! - [`AuthorizationGate`] - Project manager check
//! - [`TokenRepository`] - API token authentication

pub mod authorization_gate;
pub mod board_content_repository;
pub mod board_repository;
pub mod project_repository;
pub mod token_repository;

pub use authorization_gate::AuthorizationGate;
pub use board_content_repository::BoardContentRepository;
pub use board_repository::BoardRepository;
pub use project_repository::ProjectRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use authorization_gate::MockAuthorizationGate;
#[cfg(test)]
pub use board_content_repository::MockBoardContentRepository;
#[cfg(test)]
pub use board_repository::MockBoardRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
