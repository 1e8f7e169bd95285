//! Checklist entities attached to cards.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: i64,
    pub card_id: i64,
    pub position: f64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub task_list_id: i64,
    pub position: f64,
    pub name: String,
    pub is_completed: bool,
}
