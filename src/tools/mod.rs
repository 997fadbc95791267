//! The assistant's tools.
//!
//! Each tool module provides an input type (validated before any network
//! call) and a tool struct that borrows an [`Upstream`] and returns a
//! [`ToolOutput`]. Upstream failures never escape a tool: they become text
//! fallbacks. Only rejected input is reported as an error.

pub mod display_decklist;
pub mod search_cards;
pub mod search_cedh;
pub mod search_decklist;
pub mod search_rules;
pub mod suggest_decklist;

pub use display_decklist::{DisplayDecklistInput, DisplayDecklistTool};
pub use search_cards::{SearchCardsInput, SearchCardsTool};
pub use search_cedh::{SearchCedhInput, SearchCedhTool};
pub use search_decklist::{SearchDecklistInput, SearchDecklistTool};
pub use search_rules::{SearchRulesInput, SearchRulesTool};
pub use suggest_decklist::{SuggestDecklistInput, SuggestDecklistTool};

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AssistantError, Result};
use crate::models::{CardSummary, DeckSummary, OrganizedDeck, RuleSummary, ToolOutput};
use crate::providers::CompletionRequest;
use crate::render::{self, DeckView, DisplayBlock};
use crate::upstream::Upstream;

// ---------------------------------------------------------------------------
// ToolName
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolName {
    SearchCards,
    SearchDecklist,
    SearchCedh,
    SearchRules,
    DisplayDecklist,
    SuggestDecklist,
}

impl ToolName {
    pub const ALL: [ToolName; 6] = [
        ToolName::SearchCards,
        ToolName::SearchDecklist,
        ToolName::SearchCedh,
        ToolName::SearchRules,
        ToolName::DisplayDecklist,
        ToolName::SuggestDecklist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SearchCards => "searchCards",
            ToolName::SearchDecklist => "searchDecklist",
            ToolName::SearchCedh => "searchCedh",
            ToolName::SearchRules => "searchRules",
            ToolName::DisplayDecklist => "displayDecklist",
            ToolName::SuggestDecklist => "suggestDecklist",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolName::SearchCards => "Search for cards in the card database",
            ToolName::SearchDecklist => "Search for commander decklists based on various criteria",
            ToolName::SearchCedh => "Search competitive Commander (cEDH) decks on tournament sites",
            ToolName::SearchRules => {
                "Search official Magic: The Gathering rules and rulings on Wizards sites"
            }
            ToolName::DisplayDecklist => {
                "Display a decklist in a visually appealing format with card categories and statistics"
            }
            ToolName::SuggestDecklist => {
                "Suggest commander decks based on user preferences using reasoning model"
            }
        }
    }

    /// JSON schema of the tool's input.
    pub fn parameters(&self) -> Value {
        match self {
            ToolName::SearchCards => schemars::schema_for!(SearchCardsInput).into(),
            ToolName::SearchDecklist => schemars::schema_for!(SearchDecklistInput).into(),
            ToolName::SearchCedh => schemars::schema_for!(SearchCedhInput).into(),
            ToolName::SearchRules => schemars::schema_for!(SearchRulesInput).into(),
            ToolName::DisplayDecklist => schemars::schema_for!(DisplayDecklistInput).into(),
            ToolName::SuggestDecklist => schemars::schema_for!(SuggestDecklistInput).into(),
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.as_str(),
            description: self.description(),
            parameters: self.parameters(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a host registers with a tool-calling model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

pub fn tool_definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.iter().map(ToolName::definition).collect()
}

// ---------------------------------------------------------------------------
// ToolResult
// ---------------------------------------------------------------------------

/// Output of any tool, tagged by the shape of its structured payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResult {
    Cards(ToolOutput<Vec<CardSummary>>),
    Decklists(ToolOutput<Vec<DeckSummary>>),
    Rule(ToolOutput<RuleSummary>),
    Deck(ToolOutput<OrganizedDeck>),
}

impl ToolResult {
    pub fn is_structured(&self) -> bool {
        match self {
            ToolResult::Cards(o) => o.is_structured(),
            ToolResult::Decklists(o) => o.is_structured(),
            ToolResult::Rule(o) => o.is_structured(),
            ToolResult::Deck(o) => o.is_structured(),
        }
    }

    pub fn render(&self) -> Vec<DisplayBlock> {
        match self {
            ToolResult::Cards(o) => render_output(o, |c| render::render_cards(c)),
            ToolResult::Decklists(o) => render_output(o, |d| render::render_decklists(d)),
            ToolResult::Rule(o) => render_output(o, render::render_rule),
            ToolResult::Deck(o) => render_output(o, |d| render::render_deck(d, DeckView::Full)),
        }
    }

    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.render())
    }
}

fn render_output<T>(
    output: &ToolOutput<T>,
    structured: impl Fn(&T) -> Vec<DisplayBlock>,
) -> Vec<DisplayBlock> {
    match output {
        ToolOutput::Structured(value) => structured(value),
        ToolOutput::Text(fallback) => render::render_fallback(fallback),
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run the tool called `name` with JSON `arguments`.
///
/// Unknown names and arguments that do not match the tool's input schema are
/// rejected before anything is sent upstream.
pub fn dispatch(upstream: &Upstream, name: &str, arguments: Value) -> Result<ToolResult> {
    let tool = ToolName::from_name(name)
        .ok_or_else(|| AssistantError::UnknownTool(name.to_string()))?;

    let result = match tool {
        ToolName::SearchCards => {
            ToolResult::Cards(SearchCardsTool::new(upstream).run(&parse_input(tool, arguments)?)?)
        }
        ToolName::SearchDecklist => ToolResult::Decklists(
            SearchDecklistTool::new(upstream).run(&parse_input(tool, arguments)?)?,
        ),
        ToolName::SearchCedh => {
            let input = parse_input(tool, arguments)?;
            ToolResult::Decklists(SearchCedhTool::new(upstream).run(&input)?)
        }
        ToolName::SearchRules => {
            ToolResult::Rule(SearchRulesTool::new(upstream).run(&parse_input(tool, arguments)?)?)
        }
        ToolName::DisplayDecklist => ToolResult::Deck(
            DisplayDecklistTool::new(upstream).run(&parse_input(tool, arguments)?)?,
        ),
        ToolName::SuggestDecklist => ToolResult::Decklists(
            SuggestDecklistTool::new(upstream).run(&parse_input(tool, arguments)?)?,
        ),
    };
    Ok(result)
}

fn parse_input<T: DeserializeOwned>(tool: ToolName, arguments: Value) -> Result<T> {
    // A tool with only optional fields may be called with no arguments at all.
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| AssistantError::InputRejected(format!("{}: {}", tool, e)))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Reject blank free-text queries.
pub(crate) fn require_query(tool: ToolName, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(AssistantError::InputRejected(format!(
            "{}: query must not be empty",
            tool
        )));
    }
    Ok(())
}

/// Send `request` and parse the answer as `T`, falling back to the raw text
/// when it is not valid JSON and to `failure_message` when the call fails.
pub(crate) fn complete_and_parse<T: DeserializeOwned>(
    upstream: &Upstream,
    tool: ToolName,
    request: &CompletionRequest,
    failure_message: &str,
) -> ToolOutput<T> {
    match upstream.complete(request) {
        Ok(completion) => ToolOutput::parse_or_text(&completion.text),
        Err(e) => {
            tracing::warn!(%tool, model = %request.model, error = %e, "completion failed");
            ToolOutput::text(failure_message)
        }
    }
}
