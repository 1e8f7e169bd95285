//! Core domain entities of the board sharing service.
//!
//! Entities are plain data structures mirroring the kanban board graph. Only
//! the fields needed by the public read model are carried; user references
//! and memberships are intentionally absent.
//!
//! # Entity Types
//!
//! - [`Board`] - Root of a snapshot; holds the sharing credential
//! - [`Project`] - Parent of boards, unit of manager authorization
//! - [`List`], [`Card`], [`Label`], [`CardLabel`] - Board content
//! - [`TaskList`], [`Task`] - Card checklists
//! - [`CustomFieldGroup`], [`CustomField`], [`CustomFieldValue`] - Custom fields
//! - [`Attachment`], [`PublicAttachment`] - Stored and client-facing attachments
//! - [`BoardSnapshot`] - Public read model
//! - [`Actor`] - Authenticated caller

pub mod actor;
pub mod attachment;
pub mod board;
pub mod card;
pub mod custom_field;
pub mod label;
pub mod list;
pub mod project;
pub mod snapshot;
pub mod task;

pub use actor::Actor;
pub use attachment::{Attachment, AttachmentKind, PublicAttachment};
pub use board::Board;
pub use card::{Card, CardLabel};
pub use custom_field::{CustomField, CustomFieldGroup, CustomFieldValue};
pub use label::Label;
pub use list::{List, ListType};
pub use project::Project;
pub use snapshot::{BoardSnapshot, SnapshotIncluded};
pub use task::{Task, TaskList};
