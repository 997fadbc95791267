//! Commander assistant tools for Rust.
//!
//! Answers Magic: The Gathering Commander questions by pairing hosted
//! language models (through an OpenAI-compatible completion API) with the
//! Scryfall card database. Each tool builds a prompt, makes one or two
//! network calls, and hands back either a structured result or a tagged
//! text fallback; tools never fail because of the network.
//!
//! # Quick start
//!
//! ```no_run
//! use commander_assistant::CommanderAssistant;
//! use commander_assistant::tools::SearchCardsInput;
//!
//! let assistant = CommanderAssistant::builder()
//!     .api_key("sk-or-...")
//!     .build()
//!     .unwrap();
//!
//! // Search for cards
//! let cards = assistant.cards().run(&SearchCardsInput::new("cheap blue card draw")).unwrap();
//!
//! // Or dispatch by tool name, as a tool-calling model would
//! let result = assistant
//!     .dispatch("searchRules", serde_json::json!({ "query": "commander damage" }))
//!     .unwrap();
//! println!("{}", result.to_markdown());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod providers;
pub mod render;
pub mod scryfall;
pub mod tools;
pub mod upstream;

#[cfg(feature = "async")]
pub use async_client::AsyncCommanderAssistant;
pub use config::Settings;
pub use error::{AssistantError, Result};
pub use prompts::Mode;
pub use providers::{CompletionClient, ModelKey, ProviderRegistry};
pub use scryfall::CardDatabase;
pub use tools::{ToolName, ToolResult};
pub use upstream::Upstream;

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use providers::OpenRouterClient;
use scryfall::ScryfallClient;

// ---------------------------------------------------------------------------
// CommanderAssistantBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CommanderAssistant`].
///
/// Use [`CommanderAssistant::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](CommanderAssistantBuilder::build).
pub struct CommanderAssistantBuilder {
    api_key: Option<String>,
    completion_base_url: String,
    card_database_base_url: String,
    timeout: Duration,
    model_overrides: HashMap<String, String>,
    completion_client: Option<Box<dyn CompletionClient>>,
    card_database: Option<Box<dyn CardDatabase>>,
}

impl Default for CommanderAssistantBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            completion_base_url: config::OPENROUTER_BASE.to_string(),
            card_database_base_url: config::SCRYFALL_BASE.to_string(),
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
            model_overrides: HashMap::new(),
            completion_client: None,
            card_database: None,
        }
    }
}

impl CommanderAssistantBuilder {
    /// Start from loaded [`Settings`]; anything unset keeps its default.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut builder = Self::default().timeout(settings.timeout());
        if let Some(key) = &settings.api_key {
            builder = builder.api_key(key.as_str());
        }
        if let Some(url) = &settings.completion_base_url {
            builder = builder.completion_base_url(url.as_str());
        }
        if let Some(url) = &settings.card_database_base_url {
            builder = builder.card_database_base_url(url.as_str());
        }
        builder.model_overrides = settings.models.clone();
        builder
    }

    /// API key sent as a bearer token to the completion endpoint.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Base URL of the OpenAI-compatible completion API.
    ///
    /// Defaults to OpenRouter.
    pub fn completion_base_url(mut self, url: impl Into<String>) -> Self {
        self.completion_base_url = url.into();
        self
    }

    /// Base URL of the card database. Defaults to Scryfall.
    pub fn card_database_base_url(mut self, url: impl Into<String>) -> Self {
        self.card_database_base_url = url.into();
        self
    }

    /// HTTP timeout for every upstream call. Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the upstream model used for `key`.
    pub fn model(mut self, key: ModelKey, model_id: impl Into<String>) -> Self {
        self.model_overrides
            .insert(key.as_str().to_string(), model_id.into());
        self
    }

    /// Use a custom completion backend instead of the HTTP client.
    pub fn completion_client(mut self, client: Box<dyn CompletionClient>) -> Self {
        self.completion_client = Some(client);
        self
    }

    /// Use a custom card database instead of Scryfall.
    pub fn card_database(mut self, database: Box<dyn CardDatabase>) -> Self {
        self.card_database = Some(database);
        self
    }

    /// Build the assistant. No network calls are made here.
    pub fn build(self) -> Result<CommanderAssistant> {
        let registry = ProviderRegistry::with_overrides(&self.model_overrides)?;
        let completion: Box<dyn CompletionClient> = match self.completion_client {
            Some(client) => client,
            None => Box::new(OpenRouterClient::new(
                self.completion_base_url.as_str(),
                self.api_key,
                registry.clone(),
                self.timeout,
            )?),
        };
        let cards: Box<dyn CardDatabase> = match self.card_database {
            Some(db) => db,
            None => Box::new(ScryfallClient::new(
                self.card_database_base_url.as_str(),
                self.timeout,
            )?),
        };
        Ok(CommanderAssistant {
            upstream: Upstream::new(completion, cards),
            registry,
        })
    }
}

// ---------------------------------------------------------------------------
// CommanderAssistant
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Owns the [`Upstream`] services and exposes each tool as a lightweight
/// borrowing wrapper. Shareable across threads; no call mutates it.
pub struct CommanderAssistant {
    upstream: Upstream,
    registry: ProviderRegistry,
}

impl CommanderAssistant {
    pub fn builder() -> CommanderAssistantBuilder {
        CommanderAssistantBuilder::default()
    }

    /// Build from [`Settings::load()`] (config file plus environment).
    pub fn from_env() -> Result<Self> {
        let settings = Settings::load()?;
        CommanderAssistantBuilder::from_settings(&settings).build()
    }

    // -- Tool accessors ----------------------------------------------------

    pub fn cards(&self) -> tools::SearchCardsTool<'_> {
        tools::SearchCardsTool::new(&self.upstream)
    }

    pub fn decklists(&self) -> tools::SearchDecklistTool<'_> {
        tools::SearchDecklistTool::new(&self.upstream)
    }

    pub fn cedh(&self) -> tools::SearchCedhTool<'_> {
        tools::SearchCedhTool::new(&self.upstream)
    }

    pub fn rules(&self) -> tools::SearchRulesTool<'_> {
        tools::SearchRulesTool::new(&self.upstream)
    }

    pub fn display(&self) -> tools::DisplayDecklistTool<'_> {
        tools::DisplayDecklistTool::new(&self.upstream)
    }

    pub fn suggestions(&self) -> tools::SuggestDecklistTool<'_> {
        tools::SuggestDecklistTool::new(&self.upstream)
    }

    /// Access conversational replies and title generation.
    pub fn chat(&self) -> chat::Chat<'_> {
        chat::Chat::new(&self.upstream)
    }

    // -- Dispatch and metadata --------------------------------------------

    /// Run a tool by name with JSON arguments.
    ///
    /// See [`tools::dispatch`].
    pub fn dispatch(&self, name: &str, arguments: serde_json::Value) -> Result<ToolResult> {
        tools::dispatch(&self.upstream, name, arguments)
    }

    /// Name, description and parameter schema of every tool.
    pub fn tool_definitions(&self) -> Vec<tools::ToolDefinition> {
        tools::tool_definitions()
    }

    /// The model table this assistant was built with.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn upstream(&self) -> &Upstream {
        &self.upstream
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CommanderAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let models: Vec<String> = ModelKey::ALL
            .iter()
            .map(|k| format!("{}={}", k, self.registry.get(*k).model_id))
            .collect();
        write!(f, "CommanderAssistant(models=[{}])", models.join(", "))
    }
}
