//! Chapter version history bindings.

use crate::client::{ApiRequest, Client};
use crate::error::Result;
use plotline_core::{ChapterVersion, Created, NewVersion};

/// Bindings for the version history endpoints.
#[derive(Debug, Clone, Copy)]
pub struct VersionsApi<'a> {
    client: &'a Client,
}

impl<'a> VersionsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List a chapter's saved versions, newest first.
    pub async fn list(&self, chapter_id: i64) -> Result<Vec<ChapterVersion>> {
        self.client
            .send_json(ApiRequest::get(format!("/api/chapters/{}/versions", chapter_id)))
            .await
    }

    /// Snapshot a chapter's current content as a new version.
    pub async fn create(&self, chapter_id: i64, version: &NewVersion) -> Result<Created> {
        self.client
            .send_json(
                ApiRequest::post(format!("/api/chapters/{}/versions", chapter_id)).json(version)?,
            )
            .await
    }

    /// Overwrite a chapter's content with a saved version.
    ///
    /// The version must belong to the chapter. The content being replaced
    /// is not snapshotted.
    pub async fn restore(&self, chapter_id: i64, version_id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::post(format!(
                "/api/chapters/{}/restore/{}",
                chapter_id, version_id
            )))
            .await
    }

    /// Delete a saved version.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/versions/{}", id)))
            .await
    }
}
