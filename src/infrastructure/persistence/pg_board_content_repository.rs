//! PostgreSQL implementation of the board content repository.
//!
//! Each method is a single indexed query filtered by parent ids with
//! `= ANY($1)`. Results are ordered by position then id so snapshots are
//! stable between requests.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{
    AttachmentRow, CardLabelRow, CardRow, CustomFieldGroupRow, CustomFieldRow,
    CustomFieldValueRow, LabelRow, ListRow, TaskListRow, TaskRow,
};
use crate::domain::entities::{
    Attachment, Card, CardLabel, CustomField, CustomFieldGroup, CustomFieldValue, Label, List,
    Task, TaskList,
};
use crate::domain::repositories::BoardContentRepository;
use crate::error::AppError;

pub struct PgBoardContentRepository {
    pool: Arc<PgPool>,
}

impl PgBoardContentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardContentRepository for PgBoardContentRepository {
    async fn labels_by_board(&self, board_id: i64) -> Result<Vec<Label>, AppError> {
        let rows = sqlx::query_as::<_, LabelRow>(
            r#"
            SELECT id, board_id, position, name, color
            FROM labels
            WHERE board_id = $1
            ORDER BY position, id
            "#,
        )
        .bind(board_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn lists_by_board(&self, board_id: i64) -> Result<Vec<List>, AppError> {
        let rows = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT id, board_id, type, position, name, color
            FROM lists
            WHERE board_id = $1
            ORDER BY position NULLS LAST, id
            "#,
        )
        .bind(board_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().filter_map(ListRow::into_list).collect())
    }

    async fn cards_by_list_ids(&self, list_ids: &[i64]) -> Result<Vec<Card>, AppError> {
        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CardRow>(
            r#"
            SELECT id, board_id, list_id, position, name, description, due_date, is_closed, created_at
            FROM cards
            WHERE list_id = ANY($1)
            ORDER BY position NULLS LAST, id
            "#,
        )
        .bind(list_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn card_labels_by_card_ids(
        &self,
        card_ids: &[i64],
    ) -> Result<Vec<CardLabel>, AppError> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CardLabelRow>(
            r#"
            SELECT id, card_id, label_id
            FROM card_labels
            WHERE card_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(card_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn task_lists_by_card_ids(&self, card_ids: &[i64]) -> Result<Vec<TaskList>, AppError> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, TaskListRow>(
            r#"
            SELECT id, card_id, position, name
            FROM task_lists
            WHERE card_id = ANY($1)
            ORDER BY position, id
            "#,
        )
        .bind(card_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn tasks_by_task_list_ids(
        &self,
        task_list_ids: &[i64],
    ) -> Result<Vec<Task>, AppError> {
        if task_list_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, task_list_id, position, name, is_completed
            FROM tasks
            WHERE task_list_id = ANY($1)
            ORDER BY position, id
            "#,
        )
        .bind(task_list_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn attachments_by_card_ids(
        &self,
        card_ids: &[i64],
    ) -> Result<Vec<Attachment>, AppError> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, AttachmentRow>(
            r#"
            SELECT id, card_id, type, name, data, created_at
            FROM attachments
            WHERE card_id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(card_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(AttachmentRow::into_attachment)
            .collect())
    }

    async fn custom_field_groups_by_board(
        &self,
        board_id: i64,
        card_ids: &[i64],
    ) -> Result<Vec<CustomFieldGroup>, AppError> {
        let rows = sqlx::query_as::<_, CustomFieldGroupRow>(
            r#"
            SELECT id, board_id, card_id, position, name
            FROM custom_field_groups
            WHERE board_id = $1 OR card_id = ANY($2)
            ORDER BY position, id
            "#,
        )
        .bind(board_id)
        .bind(card_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn custom_fields_by_group_ids(
        &self,
        group_ids: &[i64],
    ) -> Result<Vec<CustomField>, AppError> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CustomFieldRow>(
            r#"
            SELECT id, custom_field_group_id, position, name, show_on_front_of_card
            FROM custom_fields
            WHERE custom_field_group_id = ANY($1)
            ORDER BY position, id
            "#,
        )
        .bind(group_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn custom_field_values_by_card_ids(
        &self,
        card_ids: &[i64],
    ) -> Result<Vec<CustomFieldValue>, AppError> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CustomFieldValueRow>(
            r#"
            SELECT id, card_id, custom_field_group_id, custom_field_id, content
            FROM custom_field_values
            WHERE card_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(card_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
