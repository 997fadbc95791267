//! Card search: a small model turns the request into a Scryfall query, the
//! card database answers it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{require_query, ToolName};
use crate::config::CARD_SEARCH_LIMIT;
use crate::error::Result;
use crate::models::{CardSummary, ToolOutput};
use crate::prompts::templates;
use crate::providers::{CompletionRequest, ModelKey};
use crate::upstream::Upstream;

const QUERY_FAILED: &str = "Error building a card search. Please try again later.";
const SEARCH_FAILED: &str =
    "Error searching for cards. Please try again with a different description.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchCardsInput {
    /// Description of the card(s) to find, in any language.
    pub query: String,
}

impl SearchCardsInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

pub struct SearchCardsTool<'a> {
    upstream: &'a Upstream,
}

impl<'a> SearchCardsTool<'a> {
    pub fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    /// Find up to [`CARD_SEARCH_LIMIT`] cards matching the description.
    pub fn run(&self, input: &SearchCardsInput) -> Result<ToolOutput<Vec<CardSummary>>> {
        require_query(ToolName::SearchCards, &input.query)?;
        tracing::info!(tool = %ToolName::SearchCards, query = %input.query, "tool called");

        let request = CompletionRequest::prompt(
            ModelKey::SearchCardsModel,
            templates::card_search_query(&input.query),
        );
        let search_query = match self.upstream.complete(&request) {
            Ok(completion) => clean_query(&completion.text),
            Err(e) => {
                tracing::warn!(error = %e, "card search query generation failed");
                return Ok(ToolOutput::text(QUERY_FAILED));
            }
        };
        if search_query.is_empty() {
            return Ok(ToolOutput::text(QUERY_FAILED));
        }

        tracing::debug!(%search_query, "generated card search query");
        match self.upstream.search_cards(&search_query, CARD_SEARCH_LIMIT) {
            Ok(mut cards) => {
                cards.truncate(CARD_SEARCH_LIMIT);
                Ok(ToolOutput::Structured(cards))
            }
            Err(e) => {
                tracing::warn!(error = %e, %search_query, "card database search failed");
                Ok(ToolOutput::text(SEARCH_FAILED))
            }
        }
    }
}

/// Strip whitespace and stray backticks the model may wrap the query in.
fn clean_query(text: &str) -> String {
    text.trim().trim_matches('`').trim().to_string()
}
