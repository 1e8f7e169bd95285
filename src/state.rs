//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AttachmentUrlSigner, AuthService, ShareService, SnapshotService};
use crate::domain::board_event::BoardEvent;
use crate::infrastructure::notify::NotificationBus;
use crate::infrastructure::persistence::{
    PgAuthorizationGate, PgBoardContentRepository, PgBoardRepository, PgProjectRepository,
    PgTokenRepository,
};

pub type AppShareService = ShareService<PgBoardRepository, PgProjectRepository, PgAuthorizationGate>;

pub type AppSnapshotService =
    SnapshotService<PgBoardRepository, PgProjectRepository, PgBoardContentRepository>;

/// Cloneable handle to services and shared resources.
///
/// Services are generic over repository traits; the state pins them to the
/// PostgreSQL implementations.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub share_service: Arc<AppShareService>,
    pub snapshot_service: Arc<AppSnapshotService>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    pub notifier: Arc<dyn NotificationBus>,
    pub event_sender: mpsc::Sender<BoardEvent>,
}

impl AppState {
    /// Wires repositories and services on top of one connection pool.
    ///
    /// # Arguments
    ///
    /// - `pool` - PostgreSQL connection pool
    /// - `event_sender` - producer side of the board event queue
    /// - `notifier` - bus the event worker publishes to, exposed for health checks
    /// - `token_signing_secret` - HMAC key for API bearer tokens
    /// - `url_signer` - attachment URL signer for public snapshots
    pub fn new(
        pool: Arc<PgPool>,
        event_sender: mpsc::Sender<BoardEvent>,
        notifier: Arc<dyn NotificationBus>,
        token_signing_secret: String,
        url_signer: AttachmentUrlSigner,
    ) -> Self {
        let board_repository = Arc::new(PgBoardRepository::new(pool.clone()));
        let project_repository = Arc::new(PgProjectRepository::new(pool.clone()));
        let content_repository = Arc::new(PgBoardContentRepository::new(pool.clone()));
        let authorization_gate = Arc::new(PgAuthorizationGate::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

        let share_service = Arc::new(ShareService::new(
            board_repository.clone(),
            project_repository.clone(),
            authorization_gate,
            event_sender.clone(),
        ));

        let snapshot_service = Arc::new(SnapshotService::new(
            board_repository,
            project_repository,
            content_repository,
            url_signer,
        ));

        let auth_service = Arc::new(AuthService::new(token_repository, token_signing_secret));

        Self {
            db: pool,
            share_service,
            snapshot_service,
            auth_service,
            notifier,
            event_sender,
        }
    }
}
