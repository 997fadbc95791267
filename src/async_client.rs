//! Async wrapper around [`CommanderAssistant`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every assistant operation on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP clients wait on upstream services.
//!
//! # Example
//!
//! ```no_run
//! use commander_assistant::AsyncCommanderAssistant;
//! use commander_assistant::tools::SearchRulesInput;
//!
//! #[tokio::main]
//! async fn main() {
//!     let assistant = AsyncCommanderAssistant::builder()
//!         .api_key("sk-or-...")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     // Run any sync assistant method via closure
//!     let rule = assistant.run(|a| {
//!         a.rules().run(&SearchRulesInput::new("partner"))
//!     }).await.unwrap();
//!
//!     // Convenience method for name-based dispatch
//!     let result = assistant
//!         .dispatch("searchCards", serde_json::json!({ "query": "Sol Ring" }))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{AssistantError, Result};
use crate::tools::ToolResult;
use crate::{CommanderAssistant, Settings};

// ---------------------------------------------------------------------------
// AsyncCommanderAssistantBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCommanderAssistant`].
#[derive(Default)]
pub struct AsyncCommanderAssistantBuilder {
    settings: Settings,
}

impl AsyncCommanderAssistantBuilder {
    /// Start from loaded [`Settings`].
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.settings.api_key = Some(key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Build the assistant on the blocking thread pool, since constructing
    /// the blocking HTTP clients must not happen on an async worker.
    pub async fn build(self) -> Result<AsyncCommanderAssistant> {
        tokio::task::spawn_blocking(move || {
            let assistant =
                crate::CommanderAssistantBuilder::from_settings(&self.settings).build()?;
            Ok(AsyncCommanderAssistant::new(assistant))
        })
        .await
        .map_err(|e| AssistantError::Upstream(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCommanderAssistant
// ---------------------------------------------------------------------------

/// Async wrapper around [`CommanderAssistant`].
///
/// The assistant holds no mutable state, so it is shared through an [`Arc`]
/// and operations from many tasks run concurrently.
#[derive(Clone)]
pub struct AsyncCommanderAssistant {
    inner: Arc<CommanderAssistant>,
}

impl AsyncCommanderAssistant {
    pub fn builder() -> AsyncCommanderAssistantBuilder {
        AsyncCommanderAssistantBuilder::default()
    }

    /// Wrap an already built assistant (e.g. one with custom backends).
    pub fn new(assistant: CommanderAssistant) -> Self {
        Self {
            inner: Arc::new(assistant),
        }
    }

    /// Run a sync assistant operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CommanderAssistant) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let assistant = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&assistant))
            .await
            .map_err(|e| AssistantError::Upstream(format!("Task join error: {e}")))?
    }

    /// Run a tool by name asynchronously.
    pub async fn dispatch(&self, name: &str, arguments: serde_json::Value) -> Result<ToolResult> {
        let name = name.to_string();
        self.run(move |a| a.dispatch(&name, arguments)).await
    }
}
