//! Small helpers shared across layers.
//!
//! - [`token_hash`] - HMAC-SHA256 hashing for API tokens and signed URLs

pub mod token_hash;
