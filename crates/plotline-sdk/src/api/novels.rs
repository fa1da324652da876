//! Novel bindings.

use crate::client::{ApiRequest, Client, ResponseBody};
use crate::error::Result;
use plotline_core::{NewNovel, Novel, UpdateNovel};

/// Bindings for the novel endpoints.
#[derive(Debug, Clone, Copy)]
pub struct NovelsApi<'a> {
    client: &'a Client,
}

impl<'a> NovelsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List every novel, most recently updated first.
    pub async fn list(&self) -> Result<Vec<Novel>> {
        self.client.send_json(ApiRequest::get("/api/novels")).await
    }

    /// Create a novel.
    pub async fn create(&self, novel: &NewNovel) -> Result<Novel> {
        self.client
            .send_json(ApiRequest::post("/api/novels").json(novel)?)
            .await
    }

    /// Update a novel's metadata. Absent fields keep their stored value.
    pub async fn update(&self, id: i64, update: &UpdateNovel) -> Result<()> {
        self.client
            .execute(ApiRequest::put(format!("/api/novels/{}", id)).json(update)?)
            .await
    }

    /// Delete a novel and everything in it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/novels/{}", id)))
            .await
    }

    /// Export a novel's full manuscript as plain text.
    pub async fn export_text(&self, id: i64) -> Result<String> {
        let request = ApiRequest::get(format!("/api/novels/{}/export?format=txt", id));
        match self.client.send(request).await? {
            ResponseBody::Text(text) => Ok(text),
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
        }
    }
}
