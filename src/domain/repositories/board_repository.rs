//! Repository trait for board lookup and sharing credential persistence.

use crate::domain::entities::Board;
use crate::domain::sharing_credential::SharingCredential;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for boards.
///
/// The store's unique index on the credential column is the authority for
/// credential uniqueness; this trait only surfaces violations as
/// [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBoardRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_board.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Finds a board by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Board>, AppError>;

    /// Finds the board holding exactly this credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_share_token(
        &self,
        token: &SharingCredential,
    ) -> Result<Option<Board>, AppError>;

    /// Sets (or clears, with `None`) the board's credential and returns the
    /// updated board.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Board))` when the board was updated
    /// - `Ok(None)` when the board no longer exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another board already holds `token`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_share_token(
        &self,
        board_id: i64,
        token: Option<SharingCredential>,
    ) -> Result<Option<Board>, AppError>;

    /// Lists every board with an active credential, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_shared(&self) -> Result<Vec<Board>, AppError>;
}
