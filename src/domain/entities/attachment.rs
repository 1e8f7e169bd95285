//! Attachment entity and its public projection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// Uploaded file; `data` is a storage key.
    File,
    /// External link; `data` is the target URL.
    Link,
}

impl FromStr for AttachmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(AttachmentKind::File),
            "link" => Ok(AttachmentKind::Link),
            other => Err(format!("unknown attachment type '{}'", other)),
        }
    }
}

/// An attachment as stored.
///
/// Not serializable: the raw storage key in `data` must never reach a
/// client. Use [`PublicAttachment`] for responses.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub id: i64,
    pub card_id: i64,
    pub kind: AttachmentKind,
    pub name: String,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

/// An attachment with a resolved access URL in place of its storage key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAttachment {
    pub id: i64,
    pub card_id: i64,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
