//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! authorization checks, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::share_service::ShareService`] - Enabling, rotating and revoking public links
//! - [`services::snapshot_service::SnapshotService`] - Anonymous board snapshot assembly
//! - [`services::token_generator::TokenGenerator`] - Collision-checked sharing credentials
//! - [`services::attachment_urls::AttachmentUrlSigner`] - Signed attachment download URLs
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
