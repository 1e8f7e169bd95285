//! Business logic services for the application layer.

pub mod attachment_urls;
pub mod auth_service;
pub mod share_service;
pub mod snapshot_service;
pub mod token_generator;

pub use attachment_urls::AttachmentUrlSigner;
pub use auth_service::AuthService;
pub use share_service::ShareService;
pub use snapshot_service::SnapshotService;
pub use token_generator::TokenGenerator;
