//! Board entity, the root of the shared snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::sharing_credential::SharingCredential;

/// A kanban board inside a project.
///
/// `public_share_token` is `None` while public sharing is disabled. When
/// present it is unique across all boards (enforced by the store).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: i64,
    pub project_id: i64,
    pub position: f64,
    pub name: String,
    pub public_share_token: Option<SharingCredential>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Board {
    /// Returns true if the board currently has an active public link.
    pub fn is_shared(&self) -> bool {
        self.public_share_token.is_some()
    }
}
