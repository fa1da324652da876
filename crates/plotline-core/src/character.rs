//! Character card records.

use serde::{Deserialize, Serialize};

/// A character card attached to a novel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCard {
    /// Character identifier.
    pub id: i64,
    /// Character name.
    pub name: String,
    /// Free-form profile (appearance, motives, arc).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// Payload for creating a character card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCharacter {
    /// Character name. Must not be empty.
    pub name: String,
    /// Free-form profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl NewCharacter {
    /// Create a payload with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile: None,
        }
    }
}

/// Partial update for a character card. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCharacter {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}
