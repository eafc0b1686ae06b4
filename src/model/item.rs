use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque, stable item identifier (allocated by the store)
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// Item status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
    Planning,
}

impl Status {
    /// The character shown in the list gutter `[ ]`
    pub fn glyph(self) -> char {
        match self {
            Status::Pending => ' ',
            Status::InProgress => '>',
            Status::Completed => 'x',
            Status::Planning => '~',
        }
    }

    /// Cycle: pending → in-progress → completed → pending.
    /// Planning cycles back to pending.
    pub fn cycled(self) -> Status {
        match self {
            Status::Pending => Status::InProgress,
            Status::InProgress => Status::Completed,
            Status::Completed => Status::Pending,
            Status::Planning => Status::Pending,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::InProgress => write!(f, "in-progress"),
            Status::Completed => write!(f, "completed"),
            Status::Planning => write!(f, "planning"),
        }
    }
}

/// A task item as stored. Owned exclusively by the store; the view layer
/// only reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub status: Status,
    /// Ordering position — unique within a snapshot, monotonic for sort,
    /// not necessarily contiguous
    pub position: i64,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new item
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub title: String,
    pub status: Option<Status>,
    pub note: Option<String>,
}

impl ItemDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        ItemDraft {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial update applied to an existing item. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub status: Option<Status>,
    pub note: Option<Option<String>>,
}

impl ItemPatch {
    pub fn status(status: Status) -> Self {
        ItemPatch {
            status: Some(status),
            ..Default::default()
        }
    }
}
