//! Per-tool prompt templates.

use chrono::Datelike;
use serde_json::json;

use super::builder::PromptBuilder;
use super::reference;
use crate::tools::search_decklist::SearchDecklistInput;

/// Prompt asking the card-search model for a Scryfall query.
pub fn card_search_query(query: &str) -> String {
    PromptBuilder::new()
        .line(&format!(
            "Generate a search query for the card {}, following the Scryfall search syntax.",
            query
        ))
        .blank()
        .line(reference::SEARCH_SYNTAX_GUIDE)
        .blank()
        .line("If the user wants a color, try to be only that color.")
        .line("Return the query only, no other text, no markdown, no code block.")
        .line("Write the query in English.")
        .build()
}

/// Free-text search criteria for a decklist search.
///
/// Each supplied criterion contributes a fragment; with none supplied the
/// search falls back to popular decks of the current year. The result always
/// ends with `edh commander deck primer`.
pub fn decklist_search_query(input: &SearchDecklistInput) -> String {
    let mut query = String::new();

    if let Some(c) = non_blank(&input.commander_name) {
        query.push_str(&format!("commander \"{}\" ", c));
    }
    if let Some(d) = non_blank(&input.deck_name) {
        query.push_str(&format!("\"{}\" deck ", d));
    }
    if let Some(s) = non_blank(&input.strategy) {
        query.push_str(&format!("{} strategy ", s));
    }
    if let Some(c) = non_blank(&input.colors) {
        query.push_str(&format!("{} colors ", c));
    }
    if let Some(b) = non_blank(&input.budget) {
        query.push_str(&format!("{} budget ", b));
    }
    if let Some(p) = non_blank(&input.power_level) {
        query.push_str(&format!("power level {} ", p));
    }

    if query.trim().is_empty() {
        query = format!("popular commander decks {}", chrono::Utc::now().year());
    }

    query.push_str(" edh commander deck primer");
    query
}

fn deck_summary_shape() -> serde_json::Value {
    json!([{
        "deckName": "Name of the deck",
        "commander": "Commander name",
        "url": "URL to decklist",
        "strategy": "Brief description of strategy",
        "powerLevel": "Estimated power level (1-10)",
        "budget": "Budget category",
        "colors": "Color identity (WUBRG format)"
    }])
}

pub fn decklist_search(criteria: &str) -> String {
    PromptBuilder::new()
        .line(&format!(
            "Search for Commander/EDH decklists matching the following criteria: {}",
            criteria
        ))
        .blank()
        .line("Find at least 3-5 relevant decklists from sites like moxfield.com, mtgtop8.com, edhrec.com, or archidekt.com.")
        .blank()
        .line("For each decklist, provide the following information:")
        .numbered(&[
            "Deck name",
            "Commander name",
            "URL to the decklist",
            "Brief description of the deck's strategy",
            "Estimated power level (1-10)",
            "Budget category (budget, mid-range, expensive)",
            "Color identity",
        ])
        .blank()
        .line("Format the response as a JSON array with the following structure:")
        .json_shape(&deck_summary_shape())
        .blank()
        .line("Return only the JSON array, no other text.")
        .build()
}

pub fn cedh_search(query: &str) -> String {
    PromptBuilder::new()
        .line(&format!(
            "Search for competitive Commander (cEDH) decks for: {}",
            query
        ))
        .line("Prefer recent tournament results from mtgtop8.com and edhtop16.com.")
        .blank()
        .line("Format the response as a JSON array with the following structure:")
        .json_shape(&deck_summary_shape())
        .blank()
        .line("Return only the JSON array, no other text.")
        .build()
}

pub fn rules_search(query: &str) -> String {
    PromptBuilder::new()
        .line(&format!(
            "Search for the official Magic: The Gathering comprehensive rules or rulings regarding \"{}\".",
            query
        ))
        .line("Only search official Wizards of the Coast sources (e.g., magic.wizards.com, gatherer.wizards.com).")
        .blank()
        .line("Provide a concise summary and include the URL to the source.")
        .blank()
        .line("Return the result as JSON:")
        .json_shape(&json!({
            "query": query,
            "summary": "concise summary of the rule or ruling",
            "url": "official source URL"
        }))
        .line("Return only valid JSON.")
        .build()
}

/// Prompt asking for a categorised breakdown of a deck from its cards and/or
/// URL.
pub fn deck_analysis(
    deck_name: Option<&str>,
    commander: Option<&str>,
    deck_url: Option<&str>,
    cards: &[String],
) -> String {
    let mut subject = String::from("Analyze this Commander deck");
    if let Some(name) = deck_name {
        subject.push_str(&format!(" named \"{}\"", name));
    }
    if let Some(c) = commander {
        subject.push_str(&format!(" with commander \"{}\"", c));
    }
    if let Some(url) = deck_url {
        subject.push_str(&format!(" from URL: {}", url));
    }
    subject.push('.');

    let card_line = if cards.is_empty() {
        None
    } else {
        Some(format!("Cards in deck: {}", cards.join(", ")))
    };

    PromptBuilder::new()
        .line(&subject)
        .line_if(card_line.as_deref())
        .blank()
        .line("Organize the deck into the following categories:")
        .numbered(&[
            "Commander(s)",
            "Ramp",
            "Card Draw",
            "Removal",
            "Board Wipes",
            "Protection",
            "Win Conditions",
            "Synergy Pieces",
            "Lands",
            "Other",
        ])
        .blank()
        .line("For each category, list the cards that belong there. If a card fits multiple categories, place it in the most relevant one.")
        .line("Also provide a brief deck strategy summary and power level assessment.")
        .blank()
        .line("Format the response as a JSON object with the following structure:")
        .json_shape(&json!({
            "deckName": "Name of the deck",
            "commander": "Commander name",
            "strategy": "Brief description of the deck strategy",
            "powerLevel": "Estimated power level (1-10)",
            "categories": {
                "commander": ["Commander cards"],
                "ramp": ["Ramp cards"],
                "cardDraw": ["Card draw cards"],
                "removal": ["Removal cards"],
                "boardWipes": ["Board wipe cards"],
                "protection": ["Protection cards"],
                "winConditions": ["Win condition cards"],
                "synergy": ["Synergy pieces"],
                "lands": ["Land cards"],
                "other": ["Other cards"]
            },
            "stats": {
                "avgCmc": "Average converted mana cost",
                "colorDistribution": {"W": 10, "U": 15, "B": 20, "R": 5, "G": 25},
                "cardTypeDistribution": {"Creatures": 30, "Instants": 15, "Sorceries": 10, "Artifacts": 10, "Enchantments": 5, "Lands": 30}
            }
        }))
        .blank()
        .line("Return only the JSON object, no other text.")
        .build()
}

/// Prompt asking a web-search model to look a deck up by name or commander.
pub fn deck_lookup(search: &str) -> String {
    PromptBuilder::new()
        .line(&format!("Find information about the Commander deck {}.", search))
        .line("Return a JSON object with deck information in the following format:")
        .json_shape(&json!({
            "deckName": "Name of the deck",
            "commander": "Commander name",
            "strategy": "Brief description of the deck strategy",
            "powerLevel": "Estimated power level (1-10)",
            "keyCards": ["Important card 1", "Important card 2", "..."]
        }))
        .blank()
        .line("Return only the JSON object, no other text.")
        .build()
}

pub fn deck_suggestion(query: &str) -> String {
    PromptBuilder::new()
        .line("You are an optimizer that helps users with their questions about Magic: The Gathering Commander format.")
        .line(&format!(
            "Optimize deck suggestions based on the user's query: \"{}\".",
            query
        ))
        .line(&format!(
            "Do not recommend cards that are banned or restricted in cEDH: {}.",
            reference::banned_list()
        ))
        .line("Provide 3-5 diverse commander deck suggestions, each with:")
        .numbered(&[
            "deckName",
            "commander",
            "url",
            "brief strategy description",
            "estimated power level (1-10)",
            "budget category (budget, mid-range, expensive)",
            "color identity (WUBRG format)",
        ])
        .blank()
        .line("Return the response as a JSON array of objects of the form:")
        .json_shape(&json!([{
            "deckName": "...",
            "commander": "...",
            "url": "...",
            "strategy": "...",
            "powerLevel": 7,
            "budget": "mid-range",
            "colors": "UG"
        }]))
        .build()
}

pub fn chat_title(first_message: &str) -> String {
    PromptBuilder::new()
        .line("Generate a short title based on the first message a user begins a conversation with.")
        .line("The title must be at most 80 characters long.")
        .line("The title should summarise the user's message.")
        .line("Do not use quotes or colons.")
        .blank()
        .line(&format!("Message: {}", first_message))
        .build()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
