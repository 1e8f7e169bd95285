//! PostgreSQL implementation of project repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::ProjectRow;
use crate::domain::entities::Project;
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

pub struct PgProjectRepository {
    pool: Arc<PgPool>,
}

impl PgProjectRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, description, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Project::from))
    }
}
