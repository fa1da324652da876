//! Inspiration note bindings.

use crate::client::{ApiRequest, Client};
use crate::error::Result;
use plotline_core::{Created, Idea, NewIdea};

/// Bindings for the idea endpoints.
#[derive(Debug, Clone, Copy)]
pub struct IdeasApi<'a> {
    client: &'a Client,
}

impl<'a> IdeasApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List a novel's saved ideas, newest first.
    pub async fn list(&self, novel_id: i64) -> Result<Vec<Idea>> {
        self.client
            .send_json(ApiRequest::get(format!("/api/novels/{}/ideas", novel_id)))
            .await
    }

    /// Save an idea against a novel.
    pub async fn create(&self, novel_id: i64, idea: &NewIdea) -> Result<Created> {
        self.client
            .send_json(ApiRequest::post(format!("/api/novels/{}/ideas", novel_id)).json(idea)?)
            .await
    }

    /// Delete an idea.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/ideas/{}", id)))
            .await
    }
}
