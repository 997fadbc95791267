//! Presentation of tool results as display blocks and Markdown.
//!
//! Rendering is a pure function of the value being shown. Every optional
//! field is skipped when absent, so partial results render cleanly.

use serde::Serialize;

use crate::models::{
    color_name, render_mana_cost, CardSummary, DeckStats, DeckSummary, OrderedMap, OrganizedDeck,
    RuleSummary, TextFallback, CATEGORY_ORDER, DEFAULT_DECK_NAME,
};

/// Entries shown per category in the summary view.
pub const SUMMARY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DisplayBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Field { label: String, value: String },
    List { title: Option<String>, items: Vec<String> },
    Link { label: String, url: String },
    Image { alt: String, url: String },
    Notice { text: String },
}

impl DisplayBlock {
    fn heading(level: u8, text: impl Into<String>) -> Self {
        DisplayBlock::Heading {
            level,
            text: text.into(),
        }
    }

    fn paragraph(text: impl Into<String>) -> Self {
        DisplayBlock::Paragraph { text: text.into() }
    }

    fn field(label: &str, value: impl Into<String>) -> Self {
        DisplayBlock::Field {
            label: label.to_string(),
            value: value.into(),
        }
    }

    fn list(title: impl Into<String>, items: Vec<String>) -> Self {
        DisplayBlock::List {
            title: Some(title.into()),
            items,
        }
    }

    fn link(label: &str, url: &str) -> Self {
        DisplayBlock::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    fn notice(text: &str) -> Self {
        DisplayBlock::Notice {
            text: text.to_string(),
        }
    }

    pub fn to_markdown(&self) -> String {
        match self {
            DisplayBlock::Heading { level, text } => {
                format!("{} {}", "#".repeat(usize::from((*level).clamp(1, 6))), text)
            }
            DisplayBlock::Paragraph { text } => text.clone(),
            DisplayBlock::Field { label, value } => format!("**{}:** {}", label, value),
            DisplayBlock::List { title, items } => {
                let body = items
                    .iter()
                    .map(|i| format!("- {}", i))
                    .collect::<Vec<_>>()
                    .join("\n");
                match title {
                    Some(t) => format!("### {}\n{}", t, body),
                    None => body,
                }
            }
            DisplayBlock::Link { label, url } => format!("[{}]({})", label, url),
            DisplayBlock::Image { alt, url } => format!("![{}]({})", alt, url),
            DisplayBlock::Notice { text } => format!("_{}_", text),
        }
    }
}

pub fn to_markdown(blocks: &[DisplayBlock]) -> String {
    blocks
        .iter()
        .map(DisplayBlock::to_markdown)
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub fn category_label(key: &str) -> &str {
    match key {
        "commander" => "Commander",
        "ramp" => "Ramp",
        "cardDraw" => "Card Draw",
        "removal" => "Removal",
        "boardWipes" => "Board Wipes",
        "protection" => "Protection",
        "winConditions" => "Win Conditions",
        "synergy" => "Synergy Pieces",
        "lands" => "Lands",
        "other" => "Other",
        other => other,
    }
}

/// Non-empty categories, known keys first in their fixed order, then any
/// other keys in the order they appear.
pub fn ordered_categories(categories: &OrderedMap<Vec<String>>) -> Vec<(&str, &[String])> {
    let known = CATEGORY_ORDER
        .iter()
        .filter_map(|key| categories.get(key).map(|cards| (*key, cards.as_slice())));
    let extra = categories
        .iter()
        .filter(|(key, _)| !CATEGORY_ORDER.contains(key))
        .map(|(key, cards)| (key, cards.as_slice()));

    known
        .chain(extra)
        .filter(|(_, cards)| !cards.is_empty())
        .collect()
}

/// The first `limit` cards, plus a `+N more...` marker when some were cut.
pub fn summarize(cards: &[String], limit: usize) -> (Vec<&str>, Option<String>) {
    let shown = cards.iter().take(limit).map(String::as_str).collect();
    let hidden = cards.len().saturating_sub(limit);
    let marker = (hidden > 0).then(|| format!("+{} more...", hidden));
    (shown, marker)
}

// ---------------------------------------------------------------------------
// Decks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckView {
    /// Every card of every category.
    #[default]
    Full,
    /// At most [`SUMMARY_LIMIT`] cards per category.
    Summary,
}

pub fn render_deck(deck: &OrganizedDeck, view: DeckView) -> Vec<DisplayBlock> {
    let mut blocks = Vec::new();

    let name = if deck.deck_name.trim().is_empty() {
        DEFAULT_DECK_NAME
    } else {
        deck.deck_name.as_str()
    };
    blocks.push(DisplayBlock::heading(1, name));

    if let Some(commander) = non_empty(&deck.commander) {
        blocks.push(DisplayBlock::field("Commander", commander));
    }
    if let Some(power) = deck.power_level.as_ref().filter(|p| !p.is_blank()) {
        blocks.push(DisplayBlock::field("Power Level", format!("{}/10", power)));
    }
    if let Some(strategy) = non_empty(&deck.strategy) {
        blocks.push(DisplayBlock::heading(3, "Strategy"));
        blocks.push(DisplayBlock::paragraph(strategy));
    }
    if let Some(key_cards) = deck.key_cards.as_ref().filter(|k| !k.is_empty()) {
        blocks.push(DisplayBlock::list("Key Cards", key_cards.clone()));
    }

    if let Some(categories) = &deck.categories {
        let ordered = ordered_categories(categories);
        if !ordered.is_empty() {
            blocks.push(DisplayBlock::heading(2, "Card Categories"));
        }
        for (key, cards) in ordered {
            let title = format!("{} ({})", category_label(key), cards.len());
            let items = match view {
                DeckView::Full => cards.to_vec(),
                DeckView::Summary => {
                    let (shown, marker) = summarize(cards, SUMMARY_LIMIT);
                    shown
                        .into_iter()
                        .map(str::to_string)
                        .chain(marker)
                        .collect()
                }
            };
            blocks.push(DisplayBlock::list(title, items));
        }
    }

    if let Some(stats) = deck.stats.as_ref().filter(|s| s.has_content()) {
        blocks.extend(render_stats(stats));
    }

    blocks
}

fn render_stats(stats: &DeckStats) -> Vec<DisplayBlock> {
    let mut blocks = vec![DisplayBlock::heading(2, "Deck Statistics")];

    if let Some(avg) = stats.avg_cmc.as_ref().filter(|a| !a.is_blank()) {
        blocks.push(DisplayBlock::field("Average CMC", avg.to_string()));
    }
    if let Some(colors) = stats.color_distribution.as_ref().filter(|d| !d.is_empty()) {
        let items = colors
            .iter()
            .map(|(code, count)| format!("{}: {} cards", color_name(code).unwrap_or(code), count))
            .collect();
        blocks.push(DisplayBlock::list("Color Distribution", items));
    }
    if let Some(types) = stats.card_type_distribution.as_ref().filter(|d| !d.is_empty()) {
        let items = types
            .iter()
            .map(|(label, count)| format!("{}: {} cards", label, count))
            .collect();
        blocks.push(DisplayBlock::list("Card Type Distribution", items));
    }

    blocks
}

pub fn render_decklists(decks: &[DeckSummary]) -> Vec<DisplayBlock> {
    if decks.is_empty() {
        return vec![DisplayBlock::notice("No decks found.")];
    }

    let mut blocks = Vec::new();
    for deck in decks {
        blocks.push(DisplayBlock::heading(3, deck.deck_name.as_str()));
        blocks.push(DisplayBlock::field("Commander", deck.commander.as_str()));
        if let Some(strategy) = non_empty(&deck.strategy) {
            blocks.push(DisplayBlock::field("Strategy", strategy));
        }
        if let Some(colors) = non_empty(&deck.colors) {
            blocks.push(DisplayBlock::field("Colors", colors));
        }
        if let Some(power) = deck.power_level.as_ref().filter(|p| !p.is_blank()) {
            blocks.push(DisplayBlock::field("Power Level", format!("{}/10", power)));
        }
        if let Some(budget) = non_empty(&deck.budget) {
            blocks.push(DisplayBlock::field("Budget", budget));
        }
        if let Some(url) = non_empty(&deck.url) {
            blocks.push(DisplayBlock::link("View Full Deck", url));
        }
    }
    blocks
}

// ---------------------------------------------------------------------------
// Cards, rules, fallbacks
// ---------------------------------------------------------------------------

pub fn render_cards(cards: &[CardSummary]) -> Vec<DisplayBlock> {
    if cards.is_empty() {
        return vec![DisplayBlock::notice("No cards found")];
    }

    let mut blocks = Vec::new();
    for card in cards {
        blocks.push(DisplayBlock::heading(3, card.name.as_str()));
        if let Some(cost) = render_mana_cost(card.effective_mana_cost()) {
            blocks.push(DisplayBlock::field("Mana Cost", cost));
        }
        if let Some(type_line) = non_empty(&card.type_line) {
            blocks.push(DisplayBlock::paragraph(type_line));
        }
        if let Some(text) = non_empty(&card.oracle_text) {
            blocks.push(DisplayBlock::paragraph(text));
        }
        for url in card.image_urls() {
            blocks.push(DisplayBlock::Image {
                alt: card.name.clone(),
                url: url.to_string(),
            });
        }
        if let Some(uri) = non_empty(&card.scryfall_uri) {
            blocks.push(DisplayBlock::link("View on Scryfall", uri));
        }
    }
    blocks
}

pub fn render_rule(rule: &RuleSummary) -> Vec<DisplayBlock> {
    let mut blocks = vec![DisplayBlock::heading(3, rule.query.as_str())];
    if let Some(summary) = non_empty(&rule.summary) {
        blocks.push(DisplayBlock::paragraph(summary));
    }
    if let Some(url) = non_empty(&rule.url) {
        blocks.push(DisplayBlock::link("Source", url));
    }
    blocks
}

pub fn render_fallback(fallback: &TextFallback) -> Vec<DisplayBlock> {
    vec![DisplayBlock::paragraph(fallback.text.as_str())]
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
