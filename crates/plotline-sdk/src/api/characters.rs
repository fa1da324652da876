//! Character card bindings.

use crate::client::{ApiRequest, Client};
use crate::error::Result;
use plotline_core::{CharacterCard, Created, NewCharacter, UpdateCharacter};

/// Bindings for the character endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CharactersApi<'a> {
    client: &'a Client,
}

impl<'a> CharactersApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List a novel's character cards.
    pub async fn list(&self, novel_id: i64) -> Result<Vec<CharacterCard>> {
        self.client
            .send_json(ApiRequest::get(format!("/api/novels/{}/characters", novel_id)))
            .await
    }

    /// Add a character card to a novel.
    pub async fn create(&self, novel_id: i64, character: &NewCharacter) -> Result<Created> {
        self.client
            .send_json(
                ApiRequest::post(format!("/api/novels/{}/characters", novel_id)).json(character)?,
            )
            .await
    }

    /// Update a character card. Absent fields keep their stored value.
    pub async fn update(&self, id: i64, update: &UpdateCharacter) -> Result<()> {
        self.client
            .execute(ApiRequest::put(format!("/api/characters/{}", id)).json(update)?)
            .await
    }

    /// Delete a character card.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/characters/{}", id)))
            .await
    }
}
