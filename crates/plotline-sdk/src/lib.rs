//! # Plotline SDK
//!
//! A Rust client for the Plotline novel-writing assistant API.
//!
//! ## Features
//!
//! - Async-first design with full `tokio` support
//! - One named method per backend operation, grouped by resource
//! - Streaming generation over Server-Sent Events
//! - Typed request and response records from [`plotline_core`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plotline_sdk::{Client, NewNovel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), plotline_sdk::Error> {
//!     let client = Client::builder()
//!         .base_url("http://127.0.0.1:5000")
//!         .build()?;
//!
//!     let novel = client.novels().create(&NewNovel::new("Ashes of the North")).await?;
//!     println!("created novel {}", novel.id);
//!
//!     for chapter in client.chapters().list(novel.id).await? {
//!         println!("{:>3}  {}", chapter.order_index, chapter.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming generation
//!
//! ```rust,no_run
//! use plotline_sdk::{Client, GenerateRequest, GenerationMode};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), plotline_sdk::Error> {
//!     let client = Client::builder().build()?;
//!
//!     let request = GenerateRequest::builder(GenerationMode::Continue)
//!         .previous_text("The lighthouse had been dark for years.")
//!         .build();
//!
//!     let mut stream = client.ai().generate_stream(request).await?;
//!     while let Some(chunk) = stream.next().await {
//!         print!("{}", chunk?.content);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod client;
mod config;
mod error;
mod streaming;

pub mod api;

pub use client::{ApiRequest, Client, ClientBuilder, ResponseBody};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use streaming::{GenerationChunk, GenerationStream};

// Re-export core types for convenience
pub use plotline_core::{
    AuthSession, BrainstormRequest, Chapter, ChapterSummary, ChapterVersion, CharacterCard,
    Created, Credentials, GenerateRequest, GenerateRequestBuilder, Generation, GenerationContext,
    GenerationMode, Health, Idea, NewChapter, NewCharacter, NewIdea, NewNovel, NewVersion, Novel,
    UpdateChapter, UpdateCharacter, UpdateNovel, UserProfile, WritingStats,
};
