//! Custom field entities.
//!
//! A group belongs either to a board (applies to every card) or to a single
//! card. Fields belong to a group; values tie a card to a field.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldGroup {
    pub id: i64,
    pub board_id: Option<i64>,
    pub card_id: Option<i64>,
    pub position: f64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: i64,
    pub custom_field_group_id: i64,
    pub position: f64,
    pub name: String,
    pub show_on_front_of_card: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    pub id: i64,
    pub card_id: i64,
    pub custom_field_group_id: i64,
    pub custom_field_id: i64,
    pub content: String,
}
