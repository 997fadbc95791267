use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::sub::{object_entries, string_list, OrderedMap, Scalar};

// ---------------------------------------------------------------------------
// DeckSummary — One decklist search / suggestion result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub deck_name: String,
    pub commander: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub power_level: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,
}

impl DeckSummary {
    pub fn new(deck_name: impl Into<String>, commander: impl Into<String>) -> Self {
        Self {
            deck_name: deck_name.into(),
            commander: commander.into(),
            url: None,
            strategy: None,
            power_level: None,
            budget: None,
            colors: None,
        }
    }
}

// ---------------------------------------------------------------------------
// DeckStats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    #[serde(
        default,
        deserialize_with = "lenient_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_cmc: Option<Scalar>,
    #[serde(
        default,
        deserialize_with = "lenient_distribution",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_distribution: Option<OrderedMap<Scalar>>,
    #[serde(
        default,
        deserialize_with = "lenient_distribution",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_type_distribution: Option<OrderedMap<Scalar>>,
}

impl DeckStats {
    /// `true` when at least one statistic would be displayed.
    pub fn has_content(&self) -> bool {
        self.avg_cmc.as_ref().is_some_and(|v| !v.is_blank())
            || self.color_distribution.as_ref().is_some_and(|d| !d.is_empty())
            || self.card_type_distribution.as_ref().is_some_and(|d| !d.is_empty())
    }
}

// ---------------------------------------------------------------------------
// OrganizedDeck — A deck broken down into categories for display
// ---------------------------------------------------------------------------

/// Category keys a deck analysis is asked to fill, in display order.
pub const CATEGORY_ORDER: [&str; 10] = [
    "commander",
    "ramp",
    "cardDraw",
    "removal",
    "boardWipes",
    "protection",
    "winConditions",
    "synergy",
    "lands",
    "other",
];

pub const DEFAULT_DECK_NAME: &str = "Commander Deck";

fn default_deck_name() -> String {
    DEFAULT_DECK_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizedDeck {
    #[serde(default = "default_deck_name")]
    pub deck_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commander: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub power_level: Option<Scalar>,
    #[serde(
        default,
        deserialize_with = "lenient_key_cards",
        skip_serializing_if = "Option::is_none"
    )]
    pub key_cards: Option<Vec<String>>,
    /// Array-valued categories only; any other value is dropped on read.
    #[serde(
        default,
        deserialize_with = "lenient_categories",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<OrderedMap<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<DeckStats>,
}

impl OrganizedDeck {
    pub fn new(deck_name: impl Into<String>) -> Self {
        Self {
            deck_name: deck_name.into(),
            commander: None,
            strategy: None,
            power_level: None,
            key_cards: None,
            categories: None,
            stats: None,
        }
    }

    /// Every card named in any category, in category order.
    pub fn all_cards(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.values())
            .flatten()
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Lenient field readers
// ---------------------------------------------------------------------------

// Decks are written by a language model, so a badly shaped field is dropped
// instead of failing the whole deck.

fn lenient_scalar<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Scalar>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(Scalar::from_value))
}

fn lenient_distribution<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<OrderedMap<Scalar>>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value
        .as_ref()
        .and_then(|v| object_entries(v, Scalar::from_value)))
}

/// A list of names, or a single name given as a plain string.
fn lenient_key_cards<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(vec![s]),
        Some(v) => string_list(&v),
        None => None,
    })
}

fn lenient_categories<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<OrderedMap<Vec<String>>>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(|v| object_entries(v, string_list)))
}
