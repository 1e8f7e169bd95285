//! Enabling, rotating and revoking a board's public sharing credential.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{info, warn};

use super::token_generator::TokenGenerator;
use crate::domain::board_event::BoardEvent;
use crate::domain::entities::{Actor, Board};
use crate::domain::repositories::{AuthorizationGate, BoardRepository, ProjectRepository};
use crate::error::AppError;

/// Attempts to persist a fresh credential before treating repeated unique
/// violations as an internal fault.
const MAX_ASSIGN_ATTEMPTS: usize = 5;

/// Toggles public sharing for boards.
///
/// Every mutation is gated on the actor being a manager of the board's
/// project. Successful writes are announced on the board event queue without
/// waiting for delivery.
pub struct ShareService<B, P, G>
where
    B: BoardRepository,
    P: ProjectRepository,
    G: AuthorizationGate,
{
    board_repository: Arc<B>,
    project_repository: Arc<P>,
    authorization_gate: Arc<G>,
    token_generator: TokenGenerator<B>,
    event_sender: mpsc::Sender<BoardEvent>,
}

impl<B, P, G> ShareService<B, P, G>
where
    B: BoardRepository,
    P: ProjectRepository,
    G: AuthorizationGate,
{
    pub fn new(
        board_repository: Arc<B>,
        project_repository: Arc<P>,
        authorization_gate: Arc<G>,
        event_sender: mpsc::Sender<BoardEvent>,
    ) -> Self {
        Self {
            token_generator: TokenGenerator::new(board_repository.clone()),
            board_repository,
            project_repository,
            authorization_gate,
            event_sender,
        }
    }

    /// Enables (issuing a new credential) or disables public sharing.
    ///
    /// Enabling an already shared board rotates the credential, so links
    /// handed out earlier stop working.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the board or its project does not
    /// exist, or the board is deleted before the write lands.
    /// Returns [`AppError::Forbidden`] if `actor` is not a project manager.
    /// Returns [`AppError::Internal`] if no unique credential could be stored
    /// or on database errors.
    pub async fn set_sharing_enabled(
        &self,
        board_id: i64,
        enabled: bool,
        actor: &Actor,
    ) -> Result<Board, AppError> {
        let board = self
            .board_repository
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| board_not_found(board_id))?;

        self.project_repository
            .find_by_id(board.project_id)
            .await?
            .ok_or_else(|| board_not_found(board_id))?;

        if !self
            .authorization_gate
            .is_project_manager(actor.user_id, board.project_id)
            .await?
        {
            warn!(
                board_id,
                actor_id = actor.user_id,
                "Sharing toggle rejected: not a project manager"
            );
            return Err(AppError::forbidden(
                "Not enough rights",
                json!({ "board_id": board_id }),
            ));
        }

        let updated = if enabled {
            self.assign_new_token(board_id).await?
        } else {
            self.board_repository.set_share_token(board_id, None).await?
        }
        .ok_or_else(|| board_not_found(board_id))?;

        metrics::counter!(
            "board_sharing_toggles_total",
            "enabled" => enabled.to_string()
        )
        .increment(1);

        info!(
            board_id,
            actor_id = actor.user_id,
            enabled,
            token_prefix = updated.public_share_token.as_ref().map(|t| t.prefix()),
            "Board sharing updated"
        );

        self.publish(BoardEvent::updated(updated.clone()));

        Ok(updated)
    }

    /// Generates and stores a credential, retrying when a concurrent writer
    /// claimed the same value between the check and the write.
    async fn assign_new_token(&self, board_id: i64) -> Result<Option<Board>, AppError> {
        for attempt in 1..=MAX_ASSIGN_ATTEMPTS {
            let token = self.token_generator.generate().await?;

            match self
                .board_repository
                .set_share_token(board_id, Some(token))
                .await
            {
                Err(AppError::Conflict { .. }) => {
                    warn!(board_id, attempt, "Sharing token taken at write time, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::internal(
            "Failed to assign sharing token",
            json!({ "reason": "Too many conflicts" }),
        ))
    }

    fn publish(&self, event: BoardEvent) {
        let board_id = event.board_id;

        match self.event_sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                metrics::counter!("board_events_dropped_total").increment(1);
                warn!(board_id, "Board event queue full, update not broadcast");
            }
            Err(TrySendError::Closed(_)) => {
                metrics::counter!("board_events_dropped_total").increment(1);
                warn!(board_id, "Board event queue closed, update not broadcast");
            }
        }
    }
}

fn board_not_found(board_id: i64) -> AppError {
    AppError::not_found("Board not found", json!({ "board_id": board_id }))
}
