use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{complete_and_parse, require_query, ToolName};
use crate::config::RULES_SEARCH_DOMAINS;
use crate::error::Result;
use crate::models::{RuleSummary, ToolOutput};
use crate::prompts::templates;
use crate::providers::{CompletionRequest, ModelKey};
use crate::upstream::Upstream;

const SEARCH_FAILED: &str = "Error searching official MTG rules. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchRulesInput {
    /// Rule name or topic to search in official MTG rules.
    pub query: String,
}

impl SearchRulesInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

pub struct SearchRulesTool<'a> {
    upstream: &'a Upstream,
}

impl<'a> SearchRulesTool<'a> {
    pub fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    pub fn run(&self, input: &SearchRulesInput) -> Result<ToolOutput<RuleSummary>> {
        require_query(ToolName::SearchRules, &input.query)?;
        tracing::info!(tool = %ToolName::SearchRules, query = %input.query, "tool called");

        let request =
            CompletionRequest::prompt(ModelKey::SearchModel, templates::rules_search(&input.query))
                .with_search_domains(RULES_SEARCH_DOMAINS);
        Ok(complete_and_parse(
            self.upstream,
            ToolName::SearchRules,
            &request,
            SEARCH_FAILED,
        ))
    }
}
