//! Row types decoded by `sqlx::FromRow` and their conversion into entities.
//!
//! Columns stored as free text (list and attachment types) are parsed here;
//! a row with an unrecognised value is skipped with a warning instead of
//! failing the whole query.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::warn;

use crate::domain::entities::{
    Attachment, Board, Card, CardLabel, CustomField, CustomFieldGroup, CustomFieldValue, Label,
    List, Project, Task, TaskList,
};
use crate::domain::repositories::ApiToken;
use crate::domain::sharing_credential::SharingCredential;

#[derive(Debug, FromRow)]
pub struct BoardRow {
    pub id: i64,
    pub project_id: i64,
    pub position: f64,
    pub name: String,
    pub public_share_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<BoardRow> for Board {
    fn from(row: BoardRow) -> Self {
        Board {
            id: row.id,
            project_id: row.project_id,
            position: row.position,
            name: row.name,
            public_share_token: row.public_share_token.map(SharingCredential::from_stored),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ListRow {
    pub id: i64,
    pub board_id: i64,
    #[sqlx(rename = "type")]
    pub list_type: String,
    pub position: Option<f64>,
    pub name: Option<String>,
    pub color: Option<String>,
}

impl ListRow {
    pub fn into_list(self) -> Option<List> {
        match self.list_type.parse() {
            Ok(list_type) => Some(List {
                id: self.id,
                board_id: self.board_id,
                list_type,
                position: self.position,
                name: self.name,
                color: self.color,
            }),
            Err(e) => {
                warn!(list_id = self.id, error = %e, "Skipping list with unknown type");
                None
            }
        }
    }
}

#[derive(Debug, FromRow)]
pub struct LabelRow {
    pub id: i64,
    pub board_id: i64,
    pub position: f64,
    pub name: Option<String>,
    pub color: String,
}

impl From<LabelRow> for Label {
    fn from(row: LabelRow) -> Self {
        Label {
            id: row.id,
            board_id: row.board_id,
            position: row.position,
            name: row.name,
            color: row.color,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CardRow {
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

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Card {
            id: row.id,
            board_id: row.board_id,
            list_id: row.list_id,
            position: row.position,
            name: row.name,
            description: row.description,
            due_date: row.due_date,
            is_closed: row.is_closed,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CardLabelRow {
    pub id: i64,
    pub card_id: i64,
    pub label_id: i64,
}

impl From<CardLabelRow> for CardLabel {
    fn from(row: CardLabelRow) -> Self {
        CardLabel {
            id: row.id,
            card_id: row.card_id,
            label_id: row.label_id,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TaskListRow {
    pub id: i64,
    pub card_id: i64,
    pub position: f64,
    pub name: String,
}

impl From<TaskListRow> for TaskList {
    fn from(row: TaskListRow) -> Self {
        TaskList {
            id: row.id,
            card_id: row.card_id,
            position: row.position,
            name: row.name,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub task_list_id: i64,
    pub position: f64,
    pub name: String,
    pub is_completed: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            task_list_id: row.task_list_id,
            position: row.position,
            name: row.name,
            is_completed: row.is_completed,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CustomFieldGroupRow {
    pub id: i64,
    pub board_id: Option<i64>,
    pub card_id: Option<i64>,
    pub position: f64,
    pub name: Option<String>,
}

impl From<CustomFieldGroupRow> for CustomFieldGroup {
    fn from(row: CustomFieldGroupRow) -> Self {
        CustomFieldGroup {
            id: row.id,
            board_id: row.board_id,
            card_id: row.card_id,
            position: row.position,
            name: row.name,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CustomFieldRow {
    pub id: i64,
    pub custom_field_group_id: i64,
    pub position: f64,
    pub name: String,
    pub show_on_front_of_card: bool,
}

impl From<CustomFieldRow> for CustomField {
    fn from(row: CustomFieldRow) -> Self {
        CustomField {
            id: row.id,
            custom_field_group_id: row.custom_field_group_id,
            position: row.position,
            name: row.name,
            show_on_front_of_card: row.show_on_front_of_card,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CustomFieldValueRow {
    pub id: i64,
    pub card_id: i64,
    pub custom_field_group_id: i64,
    pub custom_field_id: i64,
    pub content: String,
}

impl From<CustomFieldValueRow> for CustomFieldValue {
    fn from(row: CustomFieldValueRow) -> Self {
        CustomFieldValue {
            id: row.id,
            card_id: row.card_id,
            custom_field_group_id: row.custom_field_group_id,
            custom_field_id: row.custom_field_id,
            content: row.content,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct AttachmentRow {
    pub id: i64,
    pub card_id: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub name: String,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

impl AttachmentRow {
    pub fn into_attachment(self) -> Option<Attachment> {
        match self.kind.parse() {
            Ok(kind) => Some(Attachment {
                id: self.id,
                card_id: self.card_id,
                kind,
                name: self.name,
                data: self.data,
                created_at: self.created_at,
            }),
            Err(e) => {
                warn!(attachment_id = self.id, error = %e, "Skipping attachment with unknown type");
                None
            }
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ApiTokenRow {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl From<ApiTokenRow> for ApiToken {
    fn from(row: ApiTokenRow) -> Self {
        ApiToken {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            token_hash: row.token_hash,
            created_at: row.created_at,
            last_used_at: row.last_used_at,
            revoked_at: row.revoked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AttachmentKind, ListType};

    #[test]
    fn test_list_row_parses_type() {
        let row = ListRow {
            id: 1,
            board_id: 2,
            list_type: "archive".to_string(),
            position: None,
            name: None,
            color: None,
        };

        assert_eq!(row.into_list().unwrap().list_type, ListType::Archive);
    }

    #[test]
    fn test_list_row_with_unknown_type_is_skipped() {
        let row = ListRow {
            id: 1,
            board_id: 2,
            list_type: "kanban".to_string(),
            position: None,
            name: None,
            color: None,
        };

        assert!(row.into_list().is_none());
    }

    #[test]
    fn test_attachment_row_parses_kind() {
        let row = AttachmentRow {
            id: 1,
            card_id: 2,
            kind: "link".to_string(),
            name: "Docs".to_string(),
            data: "https://example.org".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(row.into_attachment().unwrap().kind, AttachmentKind::Link);
    }

    #[test]
    fn test_card_row_maps_every_column() {
        let due = Utc::now();
        let row = CardRow {
            id: 5,
            board_id: 2,
            list_id: 3,
            position: Some(1.5),
            name: "Card".to_string(),
            description: Some("Details".to_string()),
            due_date: Some(due),
            is_closed: true,
            created_at: due,
        };

        let card: Card = row.into();
        assert_eq!(card.id, 5);
        assert_eq!(card.list_id, 3);
        assert_eq!(card.position, Some(1.5));
        assert_eq!(card.description.as_deref(), Some("Details"));
        assert_eq!(card.due_date, Some(due));
        assert!(card.is_closed);
    }

    #[test]
    fn test_board_row_wraps_token() {
        let row = BoardRow {
            id: 1,
            project_id: 2,
            position: 0.0,
            name: "B".to_string(),
            public_share_token: Some("0123456789abcdef0123456789abcdef".to_string()),
            created_at: Utc::now(),
            updated_at: None,
        };

        let board: Board = row.into();
        assert_eq!(
            board.public_share_token.unwrap().as_str(),
            "0123456789abcdef0123456789abcdef"
        );
    }
}
