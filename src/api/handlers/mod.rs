//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod public_boards;
pub mod sharing;

pub use health::health_handler;
pub use public_boards::public_board_handler;
pub use sharing::toggle_public_sharing_handler;
