//! Conversational replies and chat titles.

use crate::error::Result;
use crate::prompts::{self, templates, Mode};
use crate::providers::{ChatMessage, CompletionRequest, ModelKey};
use crate::upstream::Upstream;

pub const DEFAULT_TITLE: &str = "New chat";
pub const MAX_TITLE_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    /// Reasoning emitted by reasoning models, kept out of `text`.
    pub reasoning: Option<String>,
}

pub struct Chat<'a> {
    upstream: &'a Upstream,
}

impl<'a> Chat<'a> {
    pub fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    /// Answer the latest turn of `history` in the given mode.
    pub fn reply(&self, mode: Mode, history: &[ChatMessage]) -> Result<ChatReply> {
        tracing::debug!(%mode, turns = history.len(), "chat reply");
        let request = CompletionRequest {
            model: mode.model_key(),
            system: Some(prompts::system_prompt(mode)),
            messages: history.to_vec(),
            search_domains: Vec::new(),
        };
        let completion = self.upstream.complete(&request)?;
        Ok(ChatReply {
            text: completion.text,
            reasoning: completion.reasoning,
        })
    }

    /// A short title for a conversation opened with `first_message`.
    ///
    /// Never fails: any upstream problem yields [`DEFAULT_TITLE`].
    pub fn generate_title(&self, first_message: &str) -> String {
        let request =
            CompletionRequest::prompt(ModelKey::TitleModel, templates::chat_title(first_message));
        match self.upstream.complete(&request) {
            Ok(completion) => clean_title(&completion.text),
            Err(e) => {
                tracing::warn!(error = %e, "title generation failed");
                DEFAULT_TITLE.to_string()
            }
        }
    }
}

fn clean_title(text: &str) -> String {
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or_default();
    let title: String = line
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .replace(':', "")
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect();
    let title = title.trim();
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}
