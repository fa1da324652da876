//! AI generation, brainstorming, and model discovery bindings.

use crate::client::{ApiRequest, Client};
use crate::error::Result;
use crate::streaming::GenerationStream;
use plotline_core::{BrainstormRequest, GenerateRequest, Generation};
use tracing::instrument;

/// Bindings for the AI endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AiApi<'a> {
    client: &'a Client,
}

impl<'a> AiApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Generate prose in one round trip.
    ///
    /// The backend streams unless told otherwise, so this forces
    /// `stream: false` and decodes the complete result.
    #[instrument(skip(self, request), fields(mode = %request.mode))]
    pub async fn generate(&self, mut request: GenerateRequest) -> Result<Generation> {
        request.stream = Some(false);
        self.client
            .send_json(ApiRequest::post("/api/ai/generate").json(&request)?)
            .await
    }

    /// Generate prose as a stream of fragments.
    ///
    /// Forces `stream: true`. The call resolves once the response headers
    /// arrive; the text itself comes through the returned stream.
    #[instrument(skip(self, request), fields(mode = %request.mode))]
    pub async fn generate_stream(&self, mut request: GenerateRequest) -> Result<GenerationStream> {
        request.stream = Some(true);
        self.client
            .send_stream(ApiRequest::post("/api/ai/generate").json(&request)?)
            .await
    }

    /// Brainstorm outlines, characters, twists, or settings from keywords.
    #[instrument(skip(self, request), fields(kind = %request.kind))]
    pub async fn brainstorm(&self, request: &BrainstormRequest) -> Result<Generation> {
        self.client
            .send_json(ApiRequest::post("/api/ai/brainstorm").json(request)?)
            .await
    }

    /// List the models the backend's configured provider exposes.
    #[instrument(skip(self))]
    pub async fn models(&self) -> Result<Vec<String>> {
        self.client.send_json(ApiRequest::get("/api/ai/models")).await
    }
}
