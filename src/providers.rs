//! Language-model registry and the chat-completion client.
//!
//! Every model the assistant talks to is addressed by a fixed [`ModelKey`].
//! The [`ProviderRegistry`] maps keys to upstream model ids once, at startup,
//! and is read-only afterwards. Completions go through the
//! [`CompletionClient`] trait so tools can run against any backend.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config;
use crate::error::{AssistantError, Result};

// ---------------------------------------------------------------------------
// ModelKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKey {
    ChatModel,
    ChatModelReasoning,
    SearchModel,
    SearchReasoningModel,
    TitleModel,
    SearchCardsModel,
}

impl ModelKey {
    pub const ALL: [ModelKey; 6] = [
        ModelKey::ChatModel,
        ModelKey::ChatModelReasoning,
        ModelKey::SearchModel,
        ModelKey::SearchReasoningModel,
        ModelKey::TitleModel,
        ModelKey::SearchCardsModel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKey::ChatModel => "chat-model",
            ModelKey::ChatModelReasoning => "chat-model-reasoning",
            ModelKey::SearchModel => "search-model",
            ModelKey::SearchReasoningModel => "search-reasoning-model",
            ModelKey::TitleModel => "title-model",
            ModelKey::SearchCardsModel => "search-cards-model",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == id)
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ModelSpec / ProviderRegistry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    /// Upstream model id, e.g. `"perplexity/sonar-pro"`.
    pub model_id: String,
    /// Tag delimiting reasoning that is stripped from the visible answer.
    pub reasoning_tag: Option<&'static str>,
    /// Whether the model searches the web (and so honours domain filters).
    pub web_search: bool,
}

impl ModelSpec {
    fn plain(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            reasoning_tag: None,
            web_search: false,
        }
    }
}

const FLASH_LITE: &str = "google/gemini-2.0-flash-lite-001";

/// Read-only mapping from [`ModelKey`] to the upstream model to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    models: HashMap<ModelKey, ModelSpec>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        let models = HashMap::from([
            (ModelKey::ChatModel, ModelSpec::plain(FLASH_LITE)),
            (
                ModelKey::ChatModelReasoning,
                ModelSpec {
                    model_id: "google/gemini-2.5-pro-preview-03-25".to_string(),
                    reasoning_tag: Some("think"),
                    web_search: false,
                },
            ),
            (
                ModelKey::SearchModel,
                ModelSpec {
                    model_id: "perplexity/sonar-pro".to_string(),
                    reasoning_tag: None,
                    web_search: true,
                },
            ),
            (
                ModelKey::SearchReasoningModel,
                ModelSpec {
                    model_id: "perplexity/sonar-reasoning-pro".to_string(),
                    reasoning_tag: Some("think"),
                    web_search: true,
                },
            ),
            (ModelKey::TitleModel, ModelSpec::plain(FLASH_LITE)),
            (ModelKey::SearchCardsModel, ModelSpec::plain(FLASH_LITE)),
        ]);
        Self { models }
    }
}

impl ProviderRegistry {
    /// Default registry with model ids replaced from `overrides`
    /// (keyed by model key id). Unknown keys are rejected.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self> {
        let mut registry = Self::default();
        for (key, model_id) in overrides {
            let key = ModelKey::from_id(key).ok_or_else(|| {
                AssistantError::Config(format!("Unknown model key: {}", key))
            })?;
            registry.set_model_id(key, model_id);
        }
        Ok(registry)
    }

    pub fn set_model_id(&mut self, key: ModelKey, model_id: &str) {
        if let Some(spec) = self.models.get_mut(&key) {
            spec.model_id = model_id.to_string();
        }
    }

    pub fn get(&self, key: ModelKey) -> &ModelSpec {
        // Every key is populated by `Default` and never removed.
        &self.models[&key]
    }
}

// ---------------------------------------------------------------------------
// Messages, requests, completions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: ModelKey,
    pub system: Option<String>,
    pub messages: Vec<ChatMessage>,
    /// Advisory allow-list for web-search models.
    pub search_domains: Vec<String>,
}

impl CompletionRequest {
    /// A single-prompt request with no system message.
    pub fn prompt(model: ModelKey, prompt: impl Into<String>) -> Self {
        Self {
            model,
            system: None,
            messages: vec![ChatMessage::user(prompt)],
            search_domains: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_search_domains(mut self, domains: &[&str]) -> Self {
        self.search_domains = config::domains(domains);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Completion {
    /// Visible answer, reasoning removed.
    pub text: String,
    pub reasoning: Option<String>,
}

/// Anything that can turn a [`CompletionRequest`] into text.
pub trait CompletionClient: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<Completion>;
}

// ---------------------------------------------------------------------------
// Reasoning extraction
// ---------------------------------------------------------------------------

/// Split `<tag>...</tag>` regions out of `text`.
///
/// Returns the remaining text (trimmed) and the joined reasoning, if any.
/// An unterminated opening tag swallows the rest of the text as reasoning.
pub fn extract_reasoning(text: &str, tag: &str) -> (String, Option<String>) {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let mut visible = String::with_capacity(text.len());
    let mut reasoning: Vec<&str> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(&open) {
        visible.push_str(&rest[..start]);
        let after_open = &rest[start + open.len()..];
        match after_open.find(&close) {
            Some(end) => {
                reasoning.push(after_open[..end].trim());
                rest = &after_open[end + close.len()..];
            }
            None => {
                reasoning.push(after_open.trim());
                rest = "";
            }
        }
    }
    visible.push_str(rest);

    let reasoning: Vec<&str> = reasoning.into_iter().filter(|r| !r.is_empty()).collect();
    let reasoning = if reasoning.is_empty() {
        None
    } else {
        Some(reasoning.join("\n"))
    };
    (visible.trim().to_string(), reasoning)
}

// ---------------------------------------------------------------------------
// OpenRouterClient
// ---------------------------------------------------------------------------

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint
/// (OpenRouter by default).
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    registry: ProviderRegistry,
}

impl OpenRouterClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        registry: ProviderRegistry,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            registry,
        })
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl CompletionClient for OpenRouterClient {
    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        let spec = self.registry.get(request.model);
        let body = build_request_body(spec, request);
        tracing::debug!(model = %request.model, model_id = %spec.model_id, "requesting completion");

        let mut req = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            return Err(AssistantError::Upstream(format!(
                "completion request for {} failed with {}: {}",
                spec.model_id, status, detail
            )));
        }
        let data: Value = resp.json()?;
        parse_completion_response(spec, &data)
    }
}

/// JSON body sent to `/chat/completions` for `request`.
pub fn build_request_body(spec: &ModelSpec, request: &CompletionRequest) -> Value {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    if let Some(system) = &request.system {
        messages.push(json!({ "role": "system", "content": system }));
    }
    for m in &request.messages {
        messages.push(json!({ "role": m.role, "content": m.content }));
    }

    let mut body = json!({
        "model": spec.model_id,
        "messages": messages,
    });
    if spec.web_search && !request.search_domains.is_empty() {
        body["search_domain_filter"] = json!(request.search_domains);
    }
    body
}

/// Pull the visible text and reasoning out of a `/chat/completions` response.
pub fn parse_completion_response(spec: &ModelSpec, data: &Value) -> Result<Completion> {
    let message = data
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .ok_or_else(|| {
            let detail = data
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("response has no choices");
            AssistantError::Upstream(detail.to_string())
        })?;

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .unwrap_or_default();
    let provider_reasoning = message
        .get("reasoning")
        .and_then(|r| r.as_str())
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    let (text, tagged_reasoning) = match spec.reasoning_tag {
        Some(tag) => extract_reasoning(content, tag),
        None => (content.trim().to_string(), None),
    };

    if text.is_empty() {
        return Err(AssistantError::Upstream(format!(
            "{} returned an empty completion",
            spec.model_id
        )));
    }

    Ok(Completion {
        text,
        reasoning: provider_reasoning.or(tagged_reasoning),
    })
}
