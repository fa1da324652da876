//! # Plotline Core
//!
//! Wire-contract types for the Plotline novel-writing assistant API.
//!
//! Every backend operation exchanges one of the records defined here:
//! - Account registration and login payloads
//! - AI generation and brainstorming requests
//! - Novels, chapters, characters, ideas, and chapter version history
//! - Aggregate writing statistics and liveness

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ai;
pub mod auth;
pub mod chapter;
pub mod character;
pub mod idea;
pub mod novel;
pub mod stats;
pub mod types;
pub mod version;

// Re-export commonly used types
pub use ai::{
    BrainstormRequest, GenerateRequest, GenerateRequestBuilder, Generation, GenerationContext,
    GenerationMode,
};
pub use auth::{AuthSession, Credentials, UserProfile};
pub use chapter::{Chapter, ChapterSummary, NewChapter, UpdateChapter};
pub use character::{CharacterCard, NewCharacter, UpdateCharacter};
pub use idea::{Idea, NewIdea};
pub use novel::{NewNovel, Novel, UpdateNovel};
pub use stats::{Health, WritingStats};
pub use types::Created;
pub use version::{ChapterVersion, NewVersion};
