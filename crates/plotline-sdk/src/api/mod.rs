//! Endpoint bindings, grouped by backend domain.
//!
//! Each group is a lightweight handle borrowed from a [`Client`] and names
//! one function per backend operation. A binding contributes nothing but
//! the method, the interpolated path, and the typed payload; issuing the
//! call and decoding the outcome is [`Client::send`]'s job.
//!
//! [`Client`]: crate::Client
//! [`Client::send`]: crate::Client::send

mod ai;
mod auth;
mod chapters;
mod characters;
mod ideas;
mod novels;
mod versions;

pub use ai::AiApi;
pub use auth::AuthApi;
pub use chapters::ChaptersApi;
pub use characters::CharactersApi;
pub use ideas::IdeasApi;
pub use novels::NovelsApi;
pub use versions::VersionsApi;
