//! Novel records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A novel as returned by the backend.
///
/// List responses carry every field; the record returned on creation may
/// carry only the identifier and title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Novel {
    /// Novel identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// One-paragraph synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Comma-separated genre tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Last modification time, timezone-naive as the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload for creating a novel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNovel {
    /// Title. Must not be empty.
    pub title: String,
    /// One-paragraph synopsis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Comma-separated genre tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl NewNovel {
    /// Create a payload with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: None,
            tags: None,
        }
    }
}

/// Partial update for a novel. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNovel {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New synopsis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// New genre tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}
