//! Authorization contract backed by the project membership system.

use crate::error::AppError;
use async_trait::async_trait;

/// Answers whether a user may toggle public sharing on a project's boards.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorizationGate`] - reads `project_managers`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationGate: Send + Sync {
    /// Returns `true` if `user_id` has manager rights on `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn is_project_manager(&self, user_id: i64, project_id: i64) -> Result<bool, AppError>;
}
