//! Chapter version history records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A saved snapshot of a chapter's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterVersion {
    /// Version identifier.
    pub id: i64,
    /// Chapter content at the time the snapshot was taken.
    #[serde(default)]
    pub content: String,
    /// Optional note describing the snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Snapshot time, timezone-naive as the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for snapshotting a chapter's current content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVersion {
    /// Optional note describing the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewVersion {
    /// Create a payload with the given note.
    pub fn with_note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_deserialization() {
        let json = r#"{
            "id": 31,
            "content": "The sea was calm that morning.",
            "note": "before the rewrite",
            "created_at": "2024-06-20T22:15:03"
        }"#;

        let version: ChapterVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.note.as_deref(), Some("before the rewrite"));
        assert!(version.content.starts_with("The sea"));
    }

    #[test]
    fn test_empty_snapshot_body() {
        assert_eq!(
            serde_json::to_string(&NewVersion::default()).unwrap(),
            "{}"
        );
    }
}
