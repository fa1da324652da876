//! Chapter records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A chapter as it appears in a novel's chapter list. Content is omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterSummary {
    /// Chapter identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Position within the novel, starting at 1.
    pub order_index: i64,
    /// Last modification time, timezone-naive as the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// A chapter with its full content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter identifier.
    pub id: i64,
    /// Novel this chapter belongs to.
    pub novel_id: i64,
    /// Title.
    pub title: String,
    /// Manuscript text.
    #[serde(default)]
    pub content: String,
}

/// Payload for creating a chapter.
///
/// New chapters start empty; the backend assigns the next position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewChapter {
    /// Title.
    pub title: String,
}

impl NewChapter {
    /// Create a payload with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Partial update for a chapter. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChapter {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New manuscript text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserialization() {
        let json = r#"{
            "id": 12,
            "title": "The Long Thaw",
            "order_index": 3,
            "updated_at": "2024-05-01T10:30:00"
        }"#;

        let summary: ChapterSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 12);
        assert_eq!(summary.order_index, 3);
        assert!(summary.updated_at.is_some());
    }

    #[test]
    fn test_chapter_deserialization() {
        let json = r#"{"id": 12, "novel_id": 4, "title": "The Long Thaw", "content": "Snow."}"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.novel_id, 4);
        assert_eq!(chapter.content, "Snow.");
    }

    #[test]
    fn test_new_chapter_body() {
        let chapter = NewChapter::new("Prologue");
        assert_eq!(
            serde_json::to_string(&chapter).unwrap(),
            r#"{"title":"Prologue"}"#
        );
    }

    #[test]
    fn test_update_content_only() {
        let changes = UpdateChapter {
            content: Some("Snow fell harder.".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&changes).unwrap();
        assert!(json.contains("content"));
        assert!(!json.contains("title"));
    }
}
