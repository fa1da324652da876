//! CLI commands module.

pub mod auth;
pub mod brainstorm;
pub mod chapters;
pub mod characters;
pub mod generate;
pub mod health;
pub mod ideas;
pub mod models;
pub mod novels;
pub mod stats;
pub mod versions;

use anyhow::Result;
use plotline_sdk::Client;

/// Build the SDK client used by every command.
pub(crate) fn client(base_url: &str) -> Result<Client> {
    Ok(Client::builder().base_url(base_url).build()?)
}
