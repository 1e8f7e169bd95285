//! Read-only access to a board's descendant entities.

use crate::domain::entities::{
    Attachment, Card, CardLabel, CustomField, CustomFieldGroup, CustomFieldValue, Label, List,
    Task, TaskList,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the board entity graph.
///
/// Every query is scoped by parent ids. Results are not assumed to be
/// consistent with each other: entities deleted between calls are simply
/// missing, and callers filter by reachability themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBoardContentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_board_content.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardContentRepository: Send + Sync {
    async fn labels_by_board(&self, board_id: i64) -> Result<Vec<Label>, AppError>;

    /// Returns every list of the board regardless of type.
    async fn lists_by_board(&self, board_id: i64) -> Result<Vec<List>, AppError>;

    async fn cards_by_list_ids(&self, list_ids: &[i64]) -> Result<Vec<Card>, AppError>;

    async fn card_labels_by_card_ids(&self, card_ids: &[i64])
    -> Result<Vec<CardLabel>, AppError>;

    async fn task_lists_by_card_ids(&self, card_ids: &[i64]) -> Result<Vec<TaskList>, AppError>;

    async fn tasks_by_task_list_ids(&self, task_list_ids: &[i64])
    -> Result<Vec<Task>, AppError>;

    async fn attachments_by_card_ids(&self, card_ids: &[i64])
    -> Result<Vec<Attachment>, AppError>;

    /// Returns groups attached to the board itself or to any of `card_ids`.
    async fn custom_field_groups_by_board(
        &self,
        board_id: i64,
        card_ids: &[i64],
    ) -> Result<Vec<CustomFieldGroup>, AppError>;

    async fn custom_fields_by_group_ids(
        &self,
        group_ids: &[i64],
    ) -> Result<Vec<CustomField>, AppError>;

    async fn custom_field_values_by_card_ids(
        &self,
        card_ids: &[i64],
    ) -> Result<Vec<CustomFieldValue>, AppError>;
}
