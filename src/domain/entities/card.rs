//! Card and card-label link entities.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A card on a list.
///
/// The creator reference the wider product keeps on cards is
/// not part of this read model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub board_id: i64,
    pub list_id: i64,
    pub position: Option<f64>,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
}

/// Link between a card and one of its board's labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLabel {
    pub id: i64,
    pub card_id: i64,
    pub label_id: i64,
}
