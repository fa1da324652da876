//! AI generation and brainstorming payloads.

use serde::{Deserialize, Serialize};

/// Prompt template applied to a generation or brainstorming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Continue the manuscript from where it leaves off.
    Continue,
    /// Rewrite the selected passage without changing the plot.
    Rewrite,
    /// Polish wording and pacing while keeping the meaning.
    Polish,
    /// Produce a three-act outline from keywords.
    Outline,
    /// Draft a character sheet.
    Character,
    /// Propose plot twists.
    PlotTwist,
    /// Write a standalone story fragment.
    StoryFragment,
    /// Design world-building material.
    WorldBuilding,
    /// Rewrite the selected passage imitating a named style.
    Mimic,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Rewrite => write!(f, "rewrite"),
            Self::Polish => write!(f, "polish"),
            Self::Outline => write!(f, "outline"),
            Self::Character => write!(f, "character"),
            Self::PlotTwist => write!(f, "plot_twist"),
            Self::StoryFragment => write!(f, "story_fragment"),
            Self::WorldBuilding => write!(f, "world_building"),
            Self::Mimic => write!(f, "mimic"),
        }
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continue" => Ok(Self::Continue),
            "rewrite" => Ok(Self::Rewrite),
            "polish" => Ok(Self::Polish),
            "outline" => Ok(Self::Outline),
            "character" => Ok(Self::Character),
            "plot_twist" => Ok(Self::PlotTwist),
            "story_fragment" => Ok(Self::StoryFragment),
            "world_building" => Ok(Self::WorldBuilding),
            "mimic" => Ok(Self::Mimic),
            other => Err(format!("unknown generation mode '{}'", other)),
        }
    }
}

/// Manuscript context a generation prompt is built from.
///
/// Every field is optional; the backend fills its prompt template with
/// whatever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Text immediately before the cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_text: Option<String>,
    /// Passage selected for rewrite, polish, or mimic modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_text: Option<String>,
    /// Requested prose style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Keywords to build on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Title of the novel being written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub novel_title: Option<String>,
    /// Synopsis of the novel being written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub novel_summary: Option<String>,
    /// Condensed character sheets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_summary: Option<String>,
}

/// Request for AI prose generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt template to apply.
    pub mode: GenerationMode,
    /// Manuscript context the prompt is built from.
    #[serde(default)]
    pub context: GenerationContext,
    /// Request streamed delivery. The backend streams when this is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// Provider override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Model override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Per-request API key for the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request provider endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Novel whose stored chapters and characters seed the context server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub novel_id: Option<i64>,
}

impl GenerateRequest {
    /// Create a request with the given mode and an empty context.
    pub fn new(mode: GenerationMode) -> Self {
        Self {
            mode,
            context: GenerationContext::default(),
            stream: None,
            provider: None,
            model: None,
            api_key: None,
            base_url: None,
            novel_id: None,
        }
    }

    /// Create a builder for this request.
    pub fn builder(mode: GenerationMode) -> GenerateRequestBuilder {
        GenerateRequestBuilder::new(mode)
    }
}

/// Builder for generation requests.
#[derive(Debug)]
pub struct GenerateRequestBuilder {
    request: GenerateRequest,
}

impl GenerateRequestBuilder {
    /// Create a new builder.
    pub fn new(mode: GenerationMode) -> Self {
        Self {
            request: GenerateRequest::new(mode),
        }
    }

    /// Set the text immediately before the cursor.
    pub fn previous_text(mut self, text: impl Into<String>) -> Self {
        self.request.context.previous_text = Some(text.into());
        self
    }

    /// Set the passage to rewrite, polish, or mimic.
    pub fn target_text(mut self, text: impl Into<String>) -> Self {
        self.request.context.target_text = Some(text.into());
        self
    }

    /// Set the requested prose style.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.request.context.style = Some(style.into());
        self
    }

    /// Set the keywords to build on.
    pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.request.context.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Set the novel title carried in the context.
    pub fn novel_title(mut self, title: impl Into<String>) -> Self {
        self.request.context.novel_title = Some(title.into());
        self
    }

    /// Set the novel synopsis carried in the context.
    pub fn novel_summary(mut self, summary: impl Into<String>) -> Self {
        self.request.context.novel_summary = Some(summary.into());
        self
    }

    /// Set the condensed character sheets carried in the context.
    pub fn character_summary(mut self, summary: impl Into<String>) -> Self {
        self.request.context.character_summary = Some(summary.into());
        self
    }

    /// Request or suppress streamed delivery.
    pub fn stream(mut self, stream: bool) -> Self {
        self.request.stream = Some(stream);
        self
    }

    /// Set the provider override.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.request.provider = Some(provider.into());
        self
    }

    /// Set the model override.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.request.model = Some(model.into());
        self
    }

    /// Set the per-request provider API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.request.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request provider endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.request.base_url = Some(base_url.into());
        self
    }

    /// Let the backend seed the context from this novel's stored records.
    pub fn novel_id(mut self, novel_id: i64) -> Self {
        self.request.novel_id = Some(novel_id);
        self
    }

    /// Build the request.
    pub fn build(self) -> GenerateRequest {
        self.request
    }
}

/// Request for AI brainstorming around keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainstormRequest {
    /// Prompt template to apply.
    #[serde(rename = "type")]
    pub kind: GenerationMode,
    /// Keywords to build on.
    pub keywords: Vec<String>,
    /// Provider override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Model override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Per-request API key for the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request provider endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl BrainstormRequest {
    /// Create a brainstorming request with the given template and keywords.
    pub fn new(kind: GenerationMode, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind,
            keywords: keywords.into_iter().map(Into::into).collect(),
            provider: None,
            model: None,
            api_key: None,
            base_url: None,
        }
    }
}

/// Text produced by a non-streaming generation or brainstorming call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    /// The generated text.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&GenerationMode::PlotTwist).unwrap(),
            "\"plot_twist\""
        );
        assert_eq!(
            serde_json::to_string(&GenerationMode::Continue).unwrap(),
            "\"continue\""
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "world_building".parse::<GenerationMode>().unwrap(),
            GenerationMode::WorldBuilding
        );
        assert!("haiku".parse::<GenerationMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trip() {
        let modes = [
            GenerationMode::Continue,
            GenerationMode::Rewrite,
            GenerationMode::Polish,
            GenerationMode::Outline,
            GenerationMode::Character,
            GenerationMode::PlotTwist,
            GenerationMode::StoryFragment,
            GenerationMode::WorldBuilding,
            GenerationMode::Mimic,
        ];
        for mode in modes {
            assert_eq!(mode.to_string().parse::<GenerationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_generate_request_builder() {
        let request = GenerateRequest::builder(GenerationMode::Continue)
            .previous_text("The lighthouse had been dark for years.")
            .style("gothic")
            .novel_id(3)
            .build();

        assert_eq!(request.mode, GenerationMode::Continue);
        assert_eq!(request.novel_id, Some(3));
        assert_eq!(request.context.style.as_deref(), Some("gothic"));
        assert!(request.context.target_text.is_none());
    }

    #[test]
    fn test_generate_request_skips_absent_fields() {
        let request = GenerateRequest::new(GenerationMode::Polish);
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains("\"mode\":\"polish\""));
        assert!(json.contains("\"context\":{}"));
        assert!(!json.contains("api_key"));
        assert!(!json.contains("stream"));
    }

    #[test]
    fn test_generate_request_serializes_stream_flag() {
        let request = GenerateRequest::builder(GenerationMode::Continue)
            .stream(false)
            .build();
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"stream\":false"));
    }

    #[test]
    fn test_brainstorm_request_uses_type_key() {
        let request = BrainstormRequest::new(GenerationMode::Outline, ["airship", "mutiny"]);
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains("\"type\":\"outline\""));
        assert!(json.contains("\"keywords\":[\"airship\",\"mutiny\"]"));
    }

    #[test]
    fn test_generation_deserialization() {
        let generation: Generation =
            serde_json::from_str(r#"{"content": "The door opened by itself."}"#).unwrap();
        assert_eq!(generation.content, "The door opened by itself.");
    }
}
