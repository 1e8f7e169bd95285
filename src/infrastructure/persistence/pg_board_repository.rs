//! PostgreSQL implementation of board repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::BoardRow;
use crate::domain::entities::Board;
use crate::domain::repositories::BoardRepository;
use crate::domain::sharing_credential::SharingCredential;
use crate::error::AppError;

const BOARD_COLUMNS: &str =
    "id, project_id, position, name, public_share_token, created_at, updated_at";

/// PostgreSQL repository for boards.
///
/// Credential uniqueness is enforced by the `boards_public_share_token_key`
/// constraint; a duplicate write surfaces as [`AppError::Conflict`].
pub struct PgBoardRepository {
    pool: Arc<PgPool>,
}

impl PgBoardRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for PgBoardRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Board>, AppError> {
        let row = sqlx::query_as::<_, BoardRow>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Board::from))
    }

    async fn find_by_share_token(
        &self,
        token: &SharingCredential,
    ) -> Result<Option<Board>, AppError> {
        let row = sqlx::query_as::<_, BoardRow>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE public_share_token = $1"
        ))
        .bind(token.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Board::from))
    }

    async fn set_share_token(
        &self,
        board_id: i64,
        token: Option<SharingCredential>,
    ) -> Result<Option<Board>, AppError> {
        let row = sqlx::query_as::<_, BoardRow>(&format!(
            r#"
            UPDATE boards
            SET public_share_token = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {BOARD_COLUMNS}
            "#
        ))
        .bind(board_id)
        .bind(token.as_ref().map(SharingCredential::as_str))
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Board::from))
    }

    async fn list_shared(&self) -> Result<Vec<Board>, AppError> {
        let rows = sqlx::query_as::<_, BoardRow>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE public_share_token IS NOT NULL ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Board::from).collect())
    }
}
