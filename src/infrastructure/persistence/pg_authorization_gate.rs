//! PostgreSQL implementation of the authorization gate.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::AuthorizationGate;
use crate::error::AppError;

/// Grants manager rights from rows in `project_managers`.
pub struct PgAuthorizationGate {
    pool: Arc<PgPool>,
}

impl PgAuthorizationGate {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorizationGate for PgAuthorizationGate {
    async fn is_project_manager(&self, user_id: i64, project_id: i64) -> Result<bool, AppError> {
        let is_manager: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM project_managers
                WHERE project_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(is_manager)
    }
}
