use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{complete_and_parse, ToolName};
use crate::config::DECKLIST_SEARCH_DOMAINS;
use crate::error::Result;
use crate::models::{DeckSummary, ToolOutput};
use crate::prompts::templates;
use crate::providers::{CompletionRequest, ModelKey};
use crate::upstream::Upstream;

const SEARCH_FAILED: &str = "Error searching for decklists. Please try again later.";

/// Decklist search criteria. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDecklistInput {
    /// Commander the deck is built around.
    #[serde(default)]
    pub commander_name: Option<String>,
    #[serde(default)]
    pub deck_name: Option<String>,
    /// Strategy or archetype, e.g. "aristocrats".
    #[serde(default)]
    pub strategy: Option<String>,
    /// Color identity, e.g. "WUB" or "esper".
    #[serde(default)]
    pub colors: Option<String>,
    /// Budget category: budget, mid-range or expensive.
    #[serde(default)]
    pub budget: Option<String>,
    /// Power level, conventionally 1-10.
    #[serde(default)]
    pub power_level: Option<String>,
}

pub struct SearchDecklistTool<'a> {
    upstream: &'a Upstream,
}

impl<'a> SearchDecklistTool<'a> {
    pub fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    pub fn run(&self, input: &SearchDecklistInput) -> Result<ToolOutput<Vec<DeckSummary>>> {
        let criteria = templates::decklist_search_query(input);
        tracing::info!(tool = %ToolName::SearchDecklist, %criteria, "tool called");

        let request =
            CompletionRequest::prompt(ModelKey::SearchModel, templates::decklist_search(&criteria))
                .with_search_domains(DECKLIST_SEARCH_DOMAINS);
        Ok(complete_and_parse(
            self.upstream,
            ToolName::SearchDecklist,
            &request,
            SEARCH_FAILED,
        ))
    }
}
