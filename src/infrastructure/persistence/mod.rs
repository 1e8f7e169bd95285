//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries decoded into row types or tuples.
//!
//! # Repositories
//!
//! - [`PgBoardRepository`] - Board lookup and sharing credential writes
//! - [`PgProjectRepository`] - Project lookup
//! - [`PgBoardContentRepository`] - Board entity graph reads
//! - [`PgAuthorizationGate`] - Project manager checks
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_authorization_gate;
pub mod pg_board_content_repository;
pub mod pg_board_repository;
pub mod pg_project_repository;
pub mod pg_token_repository;
pub mod rows;

pub use pg_authorization_gate::PgAuthorizationGate;
pub use pg_board_content_repository::PgBoardContentRepository;
pub use pg_board_repository::PgBoardRepository;
pub use pg_project_repository::PgProjectRepository;
pub use pg_token_repository::PgTokenRepository;
