//! List entity and list type taxonomy.

use serde::Serialize;
use std::str::FromStr;

/// Kind of a list on a board.
///
/// `Active` and `Closed` lists hold ordinary work and are finite;
/// `Archive` and `Trash` are system lists that never leave the board's
/// private view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Active,
    Closed,
    Archive,
    Trash,
}

impl ListType {
    /// Returns true for ordinary work lists eligible for the public view.
    pub fn is_finite(self) -> bool {
        matches!(self, ListType::Active | ListType::Closed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListType::Active => "active",
            ListType::Closed => "closed",
            ListType::Archive => "archive",
            ListType::Trash => "trash",
        }
    }
}

impl FromStr for ListType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ListType::Active),
            "closed" => Ok(ListType::Closed),
            "archive" => Ok(ListType::Archive),
            "trash" => Ok(ListType::Trash),
            other => Err(format!("unknown list type '{}'", other)),
        }
    }
}

/// A column of cards on a board.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: i64,
    pub board_id: i64,
    #[serde(rename = "type")]
    pub list_type: ListType,
    pub position: Option<f64>,
    pub name: Option<String>,
    pub color: Option<String>,
}
