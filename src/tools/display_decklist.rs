//! Deck display: organise a deck into categories with statistics.
//!
//! With a card list or URL the deck is analysed directly; with only a name or
//! commander it is looked up on deck sites first.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{complete_and_parse, ToolName};
use crate::config::DECK_LOOKUP_DOMAINS;
use crate::error::Result;
use crate::models::sub::string_list;
use crate::models::{OrderedMap, OrganizedDeck, ToolOutput};
use crate::prompts::templates;
use crate::providers::{CompletionRequest, ModelKey};
use crate::upstream::Upstream;

const ANALYSIS_FAILED: &str = "Error analyzing deck. Please try again with more information.";
const LOOKUP_FAILED: &str = "Error finding deck information. Please provide more details.";
const NOTHING_TO_SHOW: &str =
    "Please provide at least a deck name, commander name, deck URL, or list of cards.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDecklistInput {
    #[serde(default)]
    pub deck_name: Option<String>,
    /// Link to the deck on a deck-building site.
    #[serde(default)]
    pub deck_url: Option<String>,
    #[serde(default)]
    pub commander: Option<String>,
    /// Card names in the deck.
    #[serde(default)]
    pub cards: Option<Vec<String>>,
    /// Previously organised deck JSON; its categories replace `cards`.
    #[serde(default)]
    pub raw_deck_data: Option<String>,
}

/// Whatever can be salvaged from `rawDeckData`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawDeck {
    deck_name: Option<String>,
    commander: Option<String>,
    categories: Option<OrderedMap<Value>>,
}

impl RawDeck {
    /// String entries of every array-valued category, in order.
    fn cards(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.values())
            .filter_map(string_list)
            .flatten()
            .collect()
    }
}

pub struct DisplayDecklistTool<'a> {
    upstream: &'a Upstream,
}

impl<'a> DisplayDecklistTool<'a> {
    pub fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    pub fn run(&self, input: &DisplayDecklistInput) -> Result<ToolOutput<OrganizedDeck>> {
        tracing::info!(
            tool = %ToolName::DisplayDecklist,
            deck_name = ?input.deck_name,
            deck_url = ?input.deck_url,
            commander = ?input.commander,
            "tool called"
        );

        let mut deck_name = non_blank(&input.deck_name);
        let mut commander = non_blank(&input.commander);
        let deck_url = non_blank(&input.deck_url);
        let mut cards: Vec<String> = input
            .cards
            .iter()
            .flatten()
            .filter(|c| !c.trim().is_empty())
            .cloned()
            .collect();

        if let Some(raw) = input.raw_deck_data.as_deref() {
            match serde_json::from_str::<RawDeck>(raw) {
                Ok(parsed) => {
                    let raw_cards = parsed.cards();
                    if !raw_cards.is_empty() {
                        cards = raw_cards;
                    }
                    deck_name = deck_name.or(parsed.deck_name.filter(|n| !n.trim().is_empty()));
                    commander = commander.or(parsed.commander.filter(|c| !c.trim().is_empty()));
                }
                Err(e) => tracing::warn!(error = %e, "ignoring unparseable rawDeckData"),
            }
        }

        if !cards.is_empty() || deck_url.is_some() {
            let prompt = templates::deck_analysis(
                deck_name.as_deref(),
                commander.as_deref(),
                deck_url.as_deref(),
                &cards,
            );
            let request = CompletionRequest::prompt(ModelKey::SearchCardsModel, prompt);
            return Ok(complete_and_parse(
                self.upstream,
                ToolName::DisplayDecklist,
                &request,
                ANALYSIS_FAILED,
            ));
        }

        if let Some(search) = deck_name.as_deref().or(commander.as_deref()) {
            let request =
                CompletionRequest::prompt(ModelKey::SearchModel, templates::deck_lookup(search))
                    .with_search_domains(DECK_LOOKUP_DOMAINS);
            return Ok(complete_and_parse(
                self.upstream,
                ToolName::DisplayDecklist,
                &request,
                LOOKUP_FAILED,
            ));
        }

        Ok(ToolOutput::text(NOTHING_TO_SHOW))
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
