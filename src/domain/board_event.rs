//! Board update event model for live subscribers.

use serde::Serialize;

use crate::domain::entities::Board;

/// Event name used for every board mutation broadcast.
pub const BOARD_UPDATE_EVENT: &str = "boardUpdate";

/// A board mutation waiting to be fanned out to live subscribers.
///
/// Created by the share service after a successful write and handed to the
/// background worker through a bounded channel, so delivery never blocks or
/// fails the originating request.
///
/// # Wire Format
///
/// Published on channel `board:{board_id}` as:
///
/// ```json
/// { "event": "boardUpdate", "data": { "item": { "id": 1, "publicShareToken": null, ... } } }
/// ```
#[derive(Debug, Clone)]
pub struct BoardEvent {
    pub board_id: i64,
    pub name: &'static str,
    pub item: Board,
}

#[derive(Serialize)]
struct EventEnvelope<'a> {
    event: &'a str,
    data: ItemPayload<'a>,
}

#[derive(Serialize)]
struct ItemPayload<'a> {
    item: &'a Board,
}

impl BoardEvent {
    /// Builds a `boardUpdate` event carrying the full updated board.
    pub fn updated(board: Board) -> Self {
        Self {
            board_id: board.id,
            name: BOARD_UPDATE_EVENT,
            item: board,
        }
    }

    /// Per-board subscriber channel.
    pub fn channel(&self) -> String {
        format!("board:{}", self.board_id)
    }

    /// Serializes the event envelope.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the board cannot be encoded.
    pub fn to_message(&self) -> serde_json::Result<String> {
        serde_json::to_string(&EventEnvelope {
            event: self.name,
            data: ItemPayload { item: &self.item },
        })
    }
}
