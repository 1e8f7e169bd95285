//! Project entity, parent of boards.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A project grouping boards. Managers of a project may toggle public sharing
/// on any of its boards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
