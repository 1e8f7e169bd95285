use serde::Serialize;

/// A colored label defined on a board.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: i64,
    pub board_id: i64,
    pub position: f64,
    pub name: Option<String>,
    pub color: String,
}
