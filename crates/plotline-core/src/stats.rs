//! Aggregate statistics and liveness records.

use serde::{Deserialize, Serialize};

/// Aggregate counts across the whole workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WritingStats {
    /// Number of novels.
    pub novel_count: i64,
    /// Number of chapters across all novels.
    pub chapter_count: i64,
    /// Number of character cards across all novels.
    pub character_count: i64,
    /// Total characters of manuscript text.
    pub word_count: i64,
}

/// Liveness report from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Status code, `OK` when the backend is up.
    pub code: String,
}

impl Health {
    /// Check whether the backend reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.code.eq_ignore_ascii_case("ok")
    }
}
