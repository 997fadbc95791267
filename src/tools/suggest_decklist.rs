use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{complete_and_parse, require_query, ToolName};
use crate::error::Result;
use crate::models::{DeckSummary, ToolOutput};
use crate::prompts::templates;
use crate::providers::{CompletionRequest, ModelKey};
use crate::upstream::Upstream;

const SUGGESTION_FAILED: &str =
    "Sorry, I could not generate deck suggestions. Please try again with different preferences.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestDecklistInput {
    /// What the player is looking for: colors, themes, budget, power level.
    pub query: String,
}

impl SuggestDecklistInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

pub struct SuggestDecklistTool<'a> {
    upstream: &'a Upstream,
}

impl<'a> SuggestDecklistTool<'a> {
    pub fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    /// Suggest 3-5 decks, avoiding cards banned in Commander.
    pub fn run(&self, input: &SuggestDecklistInput) -> Result<ToolOutput<Vec<DeckSummary>>> {
        require_query(ToolName::SuggestDecklist, &input.query)?;
        tracing::info!(tool = %ToolName::SuggestDecklist, query = %input.query, "tool called");

        let request = CompletionRequest::prompt(
            ModelKey::SearchReasoningModel,
            templates::deck_suggestion(&input.query),
        );
        Ok(complete_and_parse(
            self.upstream,
            ToolName::SuggestDecklist,
            &request,
            SUGGESTION_FAILED,
        ))
    }
}
