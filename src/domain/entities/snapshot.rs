//! Public board snapshot returned to anonymous visitors.
//!
//! The snapshot is assembled per request and never persisted. Its schema has
//! no slot for board memberships or user records, so they cannot leak into
//! a public response.

use serde::Serialize;

use super::{
    Board, Card, CardLabel, CustomField, CustomFieldGroup, CustomFieldValue, Label, List,
    Project, PublicAttachment, Task, TaskList,
};

/// Root board plus its flattened descendants.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub item: Board,
    pub included: SnapshotIncluded,
}

/// Flat entity collections reachable from the snapshot's root board.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotIncluded {
    pub labels: Vec<Label>,
    pub lists: Vec<List>,
    pub cards: Vec<Card>,
    pub card_labels: Vec<CardLabel>,
    pub task_lists: Vec<TaskList>,
    pub tasks: Vec<Task>,
    pub custom_field_groups: Vec<CustomFieldGroup>,
    pub custom_fields: Vec<CustomField>,
    pub custom_field_values: Vec<CustomFieldValue>,
    pub projects: Vec<Project>,
    pub attachments: Vec<PublicAttachment>,
}
