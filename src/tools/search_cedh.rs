use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{complete_and_parse, require_query, ToolName};
use crate::config::CEDH_SEARCH_DOMAINS;
use crate::error::Result;
use crate::models::{DeckSummary, ToolOutput};
use crate::prompts::templates;
use crate::providers::{CompletionRequest, ModelKey};
use crate::upstream::Upstream;

const SEARCH_FAILED: &str = "Error searching for cEDH decks. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchCedhInput {
    /// Commander, archetype or tournament to look for.
    pub query: String,
}

impl SearchCedhInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

pub struct SearchCedhTool<'a> {
    upstream: &'a Upstream,
}

impl<'a> SearchCedhTool<'a> {
    pub fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    pub fn run(&self, input: &SearchCedhInput) -> Result<ToolOutput<Vec<DeckSummary>>> {
        require_query(ToolName::SearchCedh, &input.query)?;
        tracing::info!(tool = %ToolName::SearchCedh, query = %input.query, "tool called");

        let request =
            CompletionRequest::prompt(ModelKey::SearchModel, templates::cedh_search(&input.query))
                .with_search_domains(CEDH_SEARCH_DOMAINS);
        Ok(complete_and_parse(
            self.upstream,
            ToolName::SearchCedh,
            &request,
            SEARCH_FAILED,
        ))
    }
}
