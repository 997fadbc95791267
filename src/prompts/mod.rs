//! Prompt assembly.
//!
//! System prompts are chosen by [`Mode`]; tool prompts are built by the
//! functions in [`templates`]. Everything here is deterministic string
//! assembly.

pub mod builder;
pub mod reference;
pub mod templates;

pub use builder::PromptBuilder;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::providers::ModelKey;

pub const MAIN_RULES_PROMPT: &str = r#"<tone>
You are a friendly assistant that helps users with their questions about Magic: The Gathering.
</tone>

<rules>
You are given a question and you need to answer it based on the information provided.

Always give the links for the URLs you find.

Don't answer questions that are not related to Magic: The Gathering.

Always answer with the truth. Don't make up information.
Don't allow the user to make up their own information.
</rules>"#;

pub const COMMANDER_PROMPT: &str = r#"You are a friendly assistant that helps users with their questions about Magic: The Gathering.

You are given a question and you need to answer it based on the information provided.

Reason through Commander deck construction, color identity and rules interactions step by step before answering."#;

/// Guidance on which tool answers which kind of request.
pub const TOOL_GUIDANCE_PROMPT: &str = r#"When to use tools:

## searchCards
- When the user asks to search for a card.
- Always use searchCards to look cards up rather than answering from memory.

## searchDecklist
- When the user asks for decklists for a commander, strategy, colors, budget or power level.

## searchCedh
- When the user asks for competitive (cEDH) decks.

## searchRules
- When the user asks how a rule, keyword or interaction works.

## displayDecklist
- When the user shares a decklist, a deck URL, or asks to see a specific deck.

## suggestDecklist
- When the user asks for deck recommendations or optimisation ideas."#;

pub const SEARCH_MODEL_PROMPT: &str = r#"You are a friendly assistant that helps users with their questions about Magic: The Gathering.

You are given a question and you need to answer it based on the information provided.

Always give the links for the URLs you find."#;

pub const SEARCH_REASONING_MODEL_PROMPT: &str = r#"<goals>
You are an optimizer that helps users with their questions about Magic: The Gathering.
</goals>

<rules>
Your main focus is to optimize decks based on the user's question and the decks you find.
Don't recommend cards that are banned or restricted in cEDH.
</rules>"#;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Conversation mode selected by the user; picks both the system prompt and
/// the chat model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Default,
    Reasoning,
    Search,
    SearchReasoning,
}

impl Mode {
    /// Map a selected chat model id to its mode. Unrecognised ids fall back
    /// to [`Mode::Default`].
    pub fn from_model_id(id: &str) -> Self {
        match ModelKey::from_id(id) {
            Some(ModelKey::ChatModelReasoning) => Mode::Reasoning,
            Some(ModelKey::SearchModel) => Mode::Search,
            Some(ModelKey::SearchReasoningModel) => Mode::SearchReasoning,
            _ => Mode::Default,
        }
    }

    pub fn model_key(&self) -> ModelKey {
        match self {
            Mode::Default => ModelKey::ChatModel,
            Mode::Reasoning => ModelKey::ChatModelReasoning,
            Mode::Search => ModelKey::SearchModel,
            Mode::SearchReasoning => ModelKey::SearchReasoningModel,
        }
    }

    fn preamble(&self) -> &'static str {
        match self {
            Mode::Default => TOOL_GUIDANCE_PROMPT,
            Mode::Reasoning => COMMANDER_PROMPT,
            Mode::Search => SEARCH_MODEL_PROMPT,
            Mode::SearchReasoning => SEARCH_REASONING_MODEL_PROMPT,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_key().as_str())
    }
}

/// System prompt for a conversation in `mode`.
pub fn system_prompt(mode: Mode) -> String {
    format!("{}\n\n{}", MAIN_RULES_PROMPT, mode.preamble())
}
