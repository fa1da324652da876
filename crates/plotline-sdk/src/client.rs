//! HTTP request gateway shared by every endpoint binding.

use crate::api::{AiApi, AuthApi, ChaptersApi, CharactersApi, IdeasApi, NovelsApi, VersionsApi};
use crate::config::ClientConfig;
use crate::error::{Error, FALLBACK_MESSAGE, Result};
use crate::streaming::GenerationStream;
use plotline_core::{Health, WritingStats};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// Client for the Plotline backend.
///
/// Every endpoint binding funnels through [`Client::send`], which issues
/// exactly one network call and normalizes the outcome: a decoded body on
/// success, an [`Error`] carrying a human-readable message otherwise.
/// Cloning is cheap; clones share one connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use plotline_sdk::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), plotline_sdk::Error> {
///     let client = Client::builder()
///         .base_url("http://127.0.0.1:5000")
///         .build()?;
///
///     let stats = client.stats().await?;
///     println!("{} novels, {} chapters", stats.novel_count, stats.chapter_count);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    /// HTTP client.
    http: reqwest::Client,
    /// Client configuration.
    config: Arc<ClientConfig>,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::config(format!("Invalid user agent: {}", e)))?,
        );

        for (name, value) in &config.default_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::config(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Account registration and login bindings.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// AI generation, brainstorming, and model discovery bindings.
    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    /// Novel bindings.
    pub fn novels(&self) -> NovelsApi<'_> {
        NovelsApi::new(self)
    }

    /// Chapter bindings.
    pub fn chapters(&self) -> ChaptersApi<'_> {
        ChaptersApi::new(self)
    }

    /// Character card bindings.
    pub fn characters(&self) -> CharactersApi<'_> {
        CharactersApi::new(self)
    }

    /// Inspiration note bindings.
    pub fn ideas(&self) -> IdeasApi<'_> {
        IdeasApi::new(self)
    }

    /// Chapter version history bindings.
    pub fn versions(&self) -> VersionsApi<'_> {
        VersionsApi::new(self)
    }

    /// Fetch aggregate writing statistics.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<WritingStats> {
        self.send_json(ApiRequest::get("/api/stats")).await
    }

    /// Check backend liveness.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<Health> {
        self.send_json(ApiRequest::get("/api/health")).await
    }

    /// Check whether the backend is reachable and reports itself healthy.
    pub async fn is_healthy(&self) -> bool {
        self.health().await.map(|h| h.is_ok()).unwrap_or(false)
    }

    /// Issue a request and return its decoded body.
    ///
    /// The response body is decoded as JSON when the response's content
    /// type contains `application/json`, and kept as text otherwise. A
    /// non-success status becomes [`Error::Api`] carrying a message derived
    /// from that body; no value is produced alongside it.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: ApiRequest) -> Result<ResponseBody> {
        let response = self.prepare(request)?.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        let body = Self::read_body(response).await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::api(status.as_u16(), body.error_message()))
        }
    }

    /// Issue a request and decode its JSON body into `T`.
    ///
    /// A text body only deserializes into string-shaped targets.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        match self.send(request).await? {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Text(text) => Ok(serde_json::from_value(Value::String(text))?),
        }
    }

    /// Issue a request and discard the success body.
    ///
    /// For acknowledgement-style operations (updates, deletes, restores).
    pub async fn execute(&self, request: ApiRequest) -> Result<()> {
        self.send(request).await.map(|_| ())
    }

    /// Issue a request and hand back the response as a generation stream.
    ///
    /// A non-success status is decoded and reported exactly like
    /// [`Client::send`]; streaming only begins on success.
    pub(crate) async fn send_stream(&self, request: ApiRequest) -> Result<GenerationStream> {
        let response = self.prepare(request)?.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = Self::read_body(response).await?;
            return Err(Error::api(status.as_u16(), body.error_message()));
        }

        Ok(GenerationStream::new(response.bytes_stream()))
    }

    /// Assemble the reqwest call for an endpoint descriptor.
    ///
    /// Caller headers are applied last so they replace the JSON defaults;
    /// headers the caller leaves untouched come from the client-wide set.
    fn prepare(&self, request: ApiRequest) -> Result<reqwest::RequestBuilder> {
        let url = self.url(&request.path)?;
        debug!("issuing request to {}", url);

        let mut builder = self.http.request(request.method, url);
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }
        if !request.headers.is_empty() {
            builder = builder.headers(request.headers);
        }
        Ok(builder)
    }

    /// Build a URL by appending the path to the configured base URL.
    fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.config.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| Error::config(format!("Invalid request path '{}': {}", path, e)))
    }

    /// Decode a response body according to its declared content type.
    async fn read_body(response: reqwest::Response) -> Result<ResponseBody> {
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let text = response.text().await?;
        if is_json {
            Ok(ResponseBody::Json(serde_json::from_str(&text)?))
        } else {
            Ok(ResponseBody::Text(text))
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

/// A single backend operation, ready to be issued by [`Client::send`].
///
/// Bindings construct one of these per call: method, interpolated path,
/// optional JSON payload, optional header overrides. Nothing is retained
/// after the call completes.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Create a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add a header, replacing any client-wide default of the same name.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::try_from(name)
            .map_err(|e| Error::config(format!("Invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::config(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

/// Decoded body of a backend response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body declared and parsed as JSON.
    Json(Value),
    /// Anything else, kept as raw text.
    Text(String),
}

impl ResponseBody {
    /// Extract a human-readable message from a failed response body.
    ///
    /// Text and bare JSON strings pass through verbatim. A JSON object
    /// yields its non-empty `message` field. Everything else falls back to
    /// a fixed message.
    pub(crate) fn error_message(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Json(Value::String(s)) => s.clone(),
            Self::Json(value) => match value.get("message").and_then(Value::as_str) {
                Some(message) if !message.is_empty() => message.to_string(),
                _ => FALLBACK_MESSAGE.to_string(),
            },
        }
    }
}

/// Builder for creating a [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl ClientBuilder {
    /// Create a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base URL or a default header is
    /// invalid.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(raw) => Url::parse(&raw)
                .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", raw, e)))?,
            None => Url::parse(ClientConfig::DEFAULT_BASE_URL).expect("valid default URL"),
        };

        let config = ClientConfig {
            base_url,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| ClientConfig::DEFAULT_USER_AGENT.to_string()),
            default_headers: self.default_headers,
        };

        Client::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .base_url("http://127.0.0.1:5000")
            .header("x-workspace", "default")
            .build()
            .unwrap();

        assert_eq!(client.config.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(client.config.default_headers.len(), 1);
    }

    #[test]
    fn test_client_default_url() {
        let client = Client::builder().build().unwrap();
        assert_eq!(client.config.base_url.as_str(), "http://127.0.0.1:5000/");
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = Client::builder().base_url("not a url").build();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_url_appends_path() {
        let client = Client::builder()
            .base_url("http://127.0.0.1:5000/")
            .build()
            .unwrap();

        let url = client.url("/api/novels/3/export?format=txt").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/novels/3/export?format=txt"
        );
    }

    #[test]
    fn test_error_message_from_text() {
        let body = ResponseBody::Text("backend exploded".to_string());
        assert_eq!(body.error_message(), "backend exploded");
    }

    #[test]
    fn test_error_message_from_json_string() {
        let body = ResponseBody::Json(json!("quota exceeded"));
        assert_eq!(body.error_message(), "quota exceeded");
    }

    #[test]
    fn test_error_message_from_message_field() {
        let body = ResponseBody::Json(json!({"code": "NOT_FOUND", "message": "not found"}));
        assert_eq!(body.error_message(), "not found");
    }

    #[test]
    fn test_error_message_fallback() {
        let body = ResponseBody::Json(json!({"code": "ERROR"}));
        assert_eq!(body.error_message(), "request failed");

        let empty_message = ResponseBody::Json(json!({"message": ""}));
        assert_eq!(empty_message.error_message(), "request failed");
    }

    #[test]
    fn test_api_request_constructors() {
        let request = ApiRequest::delete("/api/chapters/5");
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/api/chapters/5");
        assert!(request.body.is_none());
    }
}
