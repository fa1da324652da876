//! Chapter bindings.

use crate::client::{ApiRequest, Client};
use crate::error::Result;
use plotline_core::{Chapter, ChapterSummary, Created, NewChapter, UpdateChapter};

/// Bindings for the chapter endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ChaptersApi<'a> {
    client: &'a Client,
}

impl<'a> ChaptersApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List a novel's chapters in manuscript order, without their content.
    pub async fn list(&self, novel_id: i64) -> Result<Vec<ChapterSummary>> {
        self.client
            .send_json(ApiRequest::get(format!("/api/novels/{}/chapters", novel_id)))
            .await
    }

    /// Add a chapter at the end of a novel.
    pub async fn create(&self, novel_id: i64, chapter: &NewChapter) -> Result<Created> {
        self.client
            .send_json(ApiRequest::post(format!("/api/novels/{}/chapters", novel_id)).json(chapter)?)
            .await
    }

    /// Fetch a chapter with its full content.
    pub async fn get(&self, id: i64) -> Result<Chapter> {
        self.client
            .send_json(ApiRequest::get(format!("/api/chapters/{}", id)))
            .await
    }

    /// Update a chapter's title or content. Absent fields keep their stored value.
    pub async fn update(&self, id: i64, update: &UpdateChapter) -> Result<()> {
        self.client
            .execute(ApiRequest::put(format!("/api/chapters/{}", id)).json(update)?)
            .await
    }

    /// Delete a chapter.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/chapters/{}", id)))
            .await
    }
}
