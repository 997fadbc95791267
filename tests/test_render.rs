//! Presentation tests: category ordering, summary truncation, block layout.

use commander_assistant::models::{
    CardSummary, DeckStats, DeckSummary, OrderedMap, OrganizedDeck, RuleSummary, Scalar,
    TextFallback,
};
use commander_assistant::render::{
    category_label, ordered_categories, render_cards, render_deck, render_decklists,
    render_fallback, render_rule, summarize, to_markdown, DeckView, DisplayBlock,
};

fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Card {}", i)).collect()
}

fn sample_deck() -> OrganizedDeck {
    let mut deck = OrganizedDeck::new("Simic Ramp");
    deck.commander = Some("Tatyova, Benthic Druid".to_string());
    deck.strategy = Some("Play lands, draw cards, win.".to_string());
    deck.power_level = Some(Scalar::from(6_i64));
    deck.categories = Some(OrderedMap::from_iter([
        ("lands", names(5)),
        ("ramp", names(2)),
        ("foo", names(1)),
    ]));
    deck
}

// ---------------------------------------------------------------------------
// ordered_categories
// ---------------------------------------------------------------------------

#[test]
fn known_categories_first_then_unknown_in_input_order() {
    let categories = OrderedMap::from_iter([
        ("lands", names(1)),
        ("zeta", names(1)),
        ("ramp", names(1)),
        ("foo", names(1)),
    ]);
    let order: Vec<&str> = ordered_categories(&categories)
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(order, vec!["ramp", "lands", "zeta", "foo"]);
}

#[test]
fn ordered_categories_skips_empty_lists() {
    let categories = OrderedMap::from_iter([
        ("ramp", Vec::new()),
        ("lands", names(2)),
        ("extra", Vec::new()),
    ]);
    let ordered = ordered_categories(&categories);
    assert_eq!(ordered.len(), 1);
    assert_eq!(ordered[0].0, "lands");
    assert_eq!(ordered[0].1.len(), 2);
}

#[test]
fn category_labels() {
    assert_eq!(category_label("cardDraw"), "Card Draw");
    assert_eq!(category_label("synergy"), "Synergy Pieces");
    assert_eq!(category_label("tribal"), "tribal");
}

// ---------------------------------------------------------------------------
// summarize
// ---------------------------------------------------------------------------

#[test]
fn summarize_five_cards_shows_three_and_marker() {
    let cards = names(5);
    let (shown, marker) = summarize(&cards, 3);
    assert_eq!(shown, vec!["Card 1", "Card 2", "Card 3"]);
    assert_eq!(marker.as_deref(), Some("+2 more..."));
}

#[test]
fn summarize_three_or_fewer_has_no_marker() {
    let cards = names(3);
    let (shown, marker) = summarize(&cards, 3);
    assert_eq!(shown.len(), 3);
    assert!(marker.is_none());

    let cards = names(1);
    let (shown, marker) = summarize(&cards, 3);
    assert_eq!(shown, vec!["Card 1"]);
    assert!(marker.is_none());
}

// ---------------------------------------------------------------------------
// render_deck
// ---------------------------------------------------------------------------

#[test]
fn full_view_lists_every_card_in_category_order() {
    let blocks = render_deck(&sample_deck(), DeckView::Full);
    let lists: Vec<(&str, usize)> = blocks
        .iter()
        .filter_map(|b| match b {
            DisplayBlock::List {
                title: Some(t),
                items,
            } => Some((t.as_str(), items.len())),
            _ => None,
        })
        .collect();
    assert_eq!(lists, vec![("Ramp (2)", 2), ("Lands (5)", 5), ("foo (1)", 1)]);
}

#[test]
fn summary_view_truncates_each_category() {
    let blocks = render_deck(&sample_deck(), DeckView::Summary);
    let lands = blocks
        .iter()
        .find_map(|b| match b {
            DisplayBlock::List {
                title: Some(t),
                items,
            } if t == "Lands (5)" => Some(items.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(lands, vec!["Card 1", "Card 2", "Card 3", "+2 more..."]);
}

#[test]
fn deck_headline_then_commander_power_and_strategy() {
    let blocks = render_deck(&sample_deck(), DeckView::Full);
    assert_eq!(
        blocks[0],
        DisplayBlock::Heading {
            level: 1,
            text: "Simic Ramp".to_string()
        }
    );
    let md = to_markdown(&blocks);
    assert!(md.starts_with("# Simic Ramp"));
    assert!(md.contains("**Commander:** Tatyova, Benthic Druid"));
    assert!(md.contains("**Power Level:** 6/10"));
    assert!(md.contains("### Strategy\n\nPlay lands, draw cards, win."));
    assert!(md.contains("## Card Categories"));
}

#[test]
fn minimal_deck_renders_only_headline() {
    let deck = OrganizedDeck::new("");
    let blocks = render_deck(&deck, DeckView::Full);
    assert_eq!(blocks.len(), 1);
    assert_eq!(to_markdown(&blocks), "# Commander Deck");
}

#[test]
fn stats_block_uses_color_names() {
    let mut deck = OrganizedDeck::new("Stats");
    deck.stats = Some(DeckStats {
        avg_cmc: Some(Scalar::from("2.9")),
        color_distribution: Some(OrderedMap::from_iter([
            ("G", Scalar::from(25_i64)),
            ("U", Scalar::from(15_i64)),
            ("P", Scalar::from(1_i64)),
        ])),
        card_type_distribution: Some(OrderedMap::from_iter([("Creatures", Scalar::from(30_i64))])),
    });
    let md = to_markdown(&render_deck(&deck, DeckView::Full));
    assert!(md.contains("## Deck Statistics"));
    assert!(md.contains("**Average CMC:** 2.9"));
    assert!(md.contains(
        "### Color Distribution\n- Green: 25 cards\n- Blue: 15 cards\n- P: 1 cards"
    ));
    assert!(md.contains("### Card Type Distribution\n- Creatures: 30 cards"));
}

#[test]
fn empty_stats_are_not_rendered() {
    let mut deck = OrganizedDeck::new("No stats");
    deck.stats = Some(DeckStats::default());
    let md = to_markdown(&render_deck(&deck, DeckView::Full));
    assert!(!md.contains("Deck Statistics"));
}

#[test]
fn key_cards_are_listed() {
    let mut deck = OrganizedDeck::new("Keys");
    deck.key_cards = Some(vec!["Sol Ring".to_string(), "Rhystic Study".to_string()]);
    let md = to_markdown(&render_deck(&deck, DeckView::Full));
    assert!(md.contains("### Key Cards\n- Sol Ring\n- Rhystic Study"));
}

// ---------------------------------------------------------------------------
// Decklists, cards, rules, fallback
// ---------------------------------------------------------------------------

#[test]
fn empty_decklists_show_notice() {
    assert_eq!(to_markdown(&render_decklists(&[])), "_No decks found._");
}

#[test]
fn decklist_fields_are_optional() {
    let mut full = DeckSummary::new("Yuriko Ninjas", "Yuriko, the Tiger's Shadow");
    full.url = Some("https://moxfield.com/decks/abc".to_string());
    full.power_level = Some(Scalar::from("8"));
    full.colors = Some("UB".to_string());
    let bare = DeckSummary::new("Bare", "Somebody");

    let md = to_markdown(&render_decklists(&[full, bare]));
    assert!(md.contains("### Yuriko Ninjas"));
    assert!(md.contains("**Power Level:** 8/10"));
    assert!(md.contains("**Colors:** UB"));
    assert!(md.contains("[View Full Deck](https://moxfield.com/decks/abc)"));
    assert!(md.contains("### Bare\n\n**Commander:** Somebody"));
    assert!(!md.contains("Budget"));
}

#[test]
fn empty_cards_show_notice() {
    assert_eq!(to_markdown(&render_cards(&[])), "_No cards found_");
}

#[test]
fn card_without_mana_cost_renders_without_cost_field() {
    let mut land = CardSummary::new("id-1", "Command Tower");
    land.type_line = Some("Land".to_string());
    land.mana_cost = Some(String::new());
    let md = to_markdown(&render_cards(&[land]));
    assert!(md.contains("### Command Tower"));
    assert!(!md.contains("Mana Cost"));
}

#[test]
fn card_renders_cost_and_image() {
    let mut card = CardSummary::new("id-2", "Counterspell");
    card.mana_cost = Some("{U}{U}".to_string());
    card.image_uris = Some(commander_assistant::models::ImageUris {
        normal: Some("https://cards.scryfall.io/normal/cs.jpg".to_string()),
        ..Default::default()
    });
    let md = to_markdown(&render_cards(&[card]));
    assert!(md.contains("**Mana Cost:** {U}{U}"));
    assert!(md.contains("![Counterspell](https://cards.scryfall.io/normal/cs.jpg)"));
}

#[test]
fn rule_and_fallback_render() {
    let rule = RuleSummary {
        query: "commander damage".to_string(),
        summary: Some("21 combat damage from one commander loses the game.".to_string()),
        url: Some("https://magic.wizards.com/en/rules".to_string()),
    };
    let md = to_markdown(&render_rule(&rule));
    assert!(md.starts_with("### commander damage"));
    assert!(md.contains("[Source](https://magic.wizards.com/en/rules)"));

    let fallback = TextFallback::new("plain words");
    assert_eq!(to_markdown(&render_fallback(&fallback)), "plain words");
}
