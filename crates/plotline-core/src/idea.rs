//! Inspiration note records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An inspiration note attached to a novel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    /// Idea identifier.
    pub id: i64,
    /// Note text.
    pub content: String,
    /// Loose category such as `general` or `plot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea_type: Option<String>,
    /// Creation time, timezone-naive as the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for creating an inspiration note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIdea {
    /// Note text. Must not be empty.
    pub content: String,
    /// Loose category. The backend records `general` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_type: Option<String>,
}

impl NewIdea {
    /// Create a payload with just the note text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            idea_type: None,
        }
    }
}
