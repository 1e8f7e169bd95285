//! Assembly of the anonymous, read-only board snapshot.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::debug;

use super::attachment_urls::AttachmentUrlSigner;
use crate::domain::entities::{BoardSnapshot, SnapshotIncluded};
use crate::domain::repositories::{BoardContentRepository, BoardRepository, ProjectRepository};
use crate::domain::sharing_credential::SharingCredential;
use crate::error::AppError;

/// Resolves a sharing credential to a privacy-filtered board snapshot.
///
/// Every failure to resolve the credential (malformed, never issued,
/// revoked, orphaned board) produces the same [`AppError::NotFound`].
///
/// Child collections are read without a transaction. Each one is filtered
/// against the ids already accepted above it, so a row that moved or
/// vanished mid-assembly is dropped instead of leaking or failing the
/// request.
pub struct SnapshotService<B, P, C>
where
    B: BoardRepository,
    P: ProjectRepository,
    C: BoardContentRepository,
{
    board_repository: Arc<B>,
    project_repository: Arc<P>,
    content_repository: Arc<C>,
    url_signer: AttachmentUrlSigner,
}

impl<B, P, C> SnapshotService<B, P, C>
where
    B: BoardRepository,
    P: ProjectRepository,
    C: BoardContentRepository,
{
    pub fn new(
        board_repository: Arc<B>,
        project_repository: Arc<P>,
        content_repository: Arc<C>,
        url_signer: AttachmentUrlSigner,
    ) -> Self {
        Self {
            board_repository,
            project_repository,
            content_repository,
            url_signer,
        }
    }

    /// Builds the public snapshot for `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the credential does not resolve to
    /// a currently shared board with an existing project.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_public_snapshot(&self, credential: &str) -> Result<BoardSnapshot, AppError> {
        let result = self.assemble(credential).await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(AppError::NotFound { .. }) => "not_found",
            Err(_) => "error",
        };
        metrics::counter!("public_snapshot_requests_total", "outcome" => outcome).increment(1);

        result
    }

    async fn assemble(&self, raw: &str) -> Result<BoardSnapshot, AppError> {
        let credential = SharingCredential::parse(raw).ok_or_else(public_board_not_found)?;

        let board = self
            .board_repository
            .find_by_share_token(&credential)
            .await?
            .filter(|board| board.public_share_token.as_ref() == Some(&credential))
            .ok_or_else(public_board_not_found)?;

        let project = self
            .project_repository
            .find_by_id(board.project_id)
            .await?
            .ok_or_else(public_board_not_found)?;

        let content = &self.content_repository;

        let labels: Vec<_> = content
            .labels_by_board(board.id)
            .await?
            .into_iter()
            .filter(|label| label.board_id == board.id)
            .collect();
        let label_ids: HashSet<i64> = labels.iter().map(|label| label.id).collect();

        let lists: Vec<_> = content
            .lists_by_board(board.id)
            .await?
            .into_iter()
            .filter(|list| list.board_id == board.id && list.list_type.is_finite())
            .collect();
        let list_ids: Vec<i64> = lists.iter().map(|list| list.id).collect();
        let list_id_set: HashSet<i64> = list_ids.iter().copied().collect();

        let cards: Vec<_> = content
            .cards_by_list_ids(&list_ids)
            .await?
            .into_iter()
            .filter(|card| card.board_id == board.id && list_id_set.contains(&card.list_id))
            .collect();
        let card_ids: Vec<i64> = cards.iter().map(|card| card.id).collect();
        let card_id_set: HashSet<i64> = card_ids.iter().copied().collect();

        let card_labels: Vec<_> = content
            .card_labels_by_card_ids(&card_ids)
            .await?
            .into_iter()
            .filter(|link| card_id_set.contains(&link.card_id) && label_ids.contains(&link.label_id))
            .collect();

        let task_lists: Vec<_> = content
            .task_lists_by_card_ids(&card_ids)
            .await?
            .into_iter()
            .filter(|task_list| card_id_set.contains(&task_list.card_id))
            .collect();
        let task_list_ids: Vec<i64> = task_lists.iter().map(|task_list| task_list.id).collect();
        let task_list_id_set: HashSet<i64> = task_list_ids.iter().copied().collect();

        let tasks: Vec<_> = content
            .tasks_by_task_list_ids(&task_list_ids)
            .await?
            .into_iter()
            .filter(|task| task_list_id_set.contains(&task.task_list_id))
            .collect();

        let now = Utc::now();
        let attachments: Vec<_> = content
            .attachments_by_card_ids(&card_ids)
            .await?
            .into_iter()
            .filter(|attachment| card_id_set.contains(&attachment.card_id))
            .map(|attachment| self.url_signer.resolve(attachment, now))
            .collect();

        let custom_field_groups: Vec<_> = content
            .custom_field_groups_by_board(board.id, &card_ids)
            .await?
            .into_iter()
            .filter(|group| match (group.board_id, group.card_id) {
                (Some(board_id), _) => board_id == board.id,
                (None, Some(card_id)) => card_id_set.contains(&card_id),
                (None, None) => false,
            })
            .collect();
        let group_ids: Vec<i64> = custom_field_groups.iter().map(|group| group.id).collect();
        let group_id_set: HashSet<i64> = group_ids.iter().copied().collect();

        let custom_fields: Vec<_> = content
            .custom_fields_by_group_ids(&group_ids)
            .await?
            .into_iter()
            .filter(|field| group_id_set.contains(&field.custom_field_group_id))
            .collect();
        let field_id_set: HashSet<i64> = custom_fields.iter().map(|field| field.id).collect();

        let custom_field_values: Vec<_> = content
            .custom_field_values_by_card_ids(&card_ids)
            .await?
            .into_iter()
            .filter(|value| {
                card_id_set.contains(&value.card_id)
                    && group_id_set.contains(&value.custom_field_group_id)
                    && field_id_set.contains(&value.custom_field_id)
            })
            .collect();

        debug!(
            board_id = board.id,
            lists = lists.len(),
            cards = cards.len(),
            "Public snapshot assembled"
        );

        Ok(BoardSnapshot {
            item: board,
            included: SnapshotIncluded {
                labels,
                lists,
                cards,
                card_labels,
                task_lists,
                tasks,
                custom_field_groups,
                custom_fields,
                custom_field_values,
                projects: vec![project],
                attachments,
            },
        })
    }
}

/// The single not-found error of the public read path.
pub fn public_board_not_found() -> AppError {
    AppError::not_found("Board not found", json!({}))
}
