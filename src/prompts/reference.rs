//! Reference documents inlined verbatim into tool prompts.

/// Condensed guide to Scryfall's full-text search syntax, given to the model
/// that turns a user request into a card search query.
pub const SEARCH_SYNTAX_GUIDE: &str = r#"Scryfall search syntax reference.

Colors and color identity
- c: or color: matches card colors; id: or identity: matches color identity.
- Accepts full names (blue) or letters (w, u, b, r, g), guild/shard/wedge
  nicknames (azorius, bant, abzan) and four-color names (chaos, aggression,
  altruism, growth, artifice). c:c is colorless, c:m is multicolor.
- Comparisons work on colors: c>=uw, id<=esper, c!=r.
- For Commander, restrict to a deck's colors with id<=<colors>.

Card types
- t: or type: matches any part of the type line: t:legendary t:creature,
  t:merfolk, t:equipment, t:"planeswalker".

Card text
- o: or oracle: searches rules text; quote phrases: o:"draw a card".
- ~ stands for the card's own name inside o: searches.
- fo: searches full oracle text including reminder text.
- kw: or keyword: matches keyword abilities: kw:flying.

Mana costs
- m: or mana: matches mana symbols in the cost: m:{G}{U}, m:2WW.
- mv: or manavalue: compares mana value: mv=3, mv<=2, mv>=6.
- is:hybrid, is:phyrexian find hybrid or Phyrexian symbols.
- devotion: finds permanents contributing devotion: devotion:{u/b}{u/b}.
- produces: finds cards that add mana of a color: produces=wu.

Power, toughness, loyalty
- pow:, tou:, loy: compare stats: pow>=5, tou<pow, loy=3.

Multi-faced cards
- is:split, is:flip, is:transform, is:meld, is:leveler, is:dfc, is:mdfc.

Spells, permanents, effects
- is:spell, is:permanent, is:historic, is:vanilla, is:frenchvanilla.
- is:bear (2/2 for 2), is:modal.

Rarity, sets, cubes
- r: or rarity: common, uncommon, rare, mythic; comparisons allowed: r>=rare.
- s:, e:, set: or edition: filter by set code; b: or block: by block.
- cube: filters cube lists: cube:vintage.

Format legality
- f: or format: legal in a format: f:commander, f:modern, f:pauper.
- banned: and restricted: find banned or restricted cards: banned:commander.
- is:commander finds cards that can be commanders; is:companion likewise.
- is:reserved finds Reserved List cards.

Prices
- usd, eur, tix compare prices: usd<1, tix>=5.

Artist, flavor, watermark
- a: or artist:, ft: or flavor:, wm: or watermark:.

Borders, frames, finishes
- border:black, frame:2015, is:foil, is:nonfoil, is:full, is:hires.

Games and promos
- game:paper, game:arena, game:mtgo, is:promo, is:digital.

Year and reprints
- year= and date> compare release dates: year<=1994, date>=2020-01-01.
- is:reprint, not:reprint, is:firstprint.

Languages
- lang: filters by language: lang:ja, lang:any.

Negation, regular expressions, exact names
- Prefix any keyword with - to negate it: -t:creature.
- Use /regex/ with name:, o:, t:, ft: and similar: o:/^{T}: add/.
- !"Card Name" matches an exact card name.

Combining conditions
- Terms are combined with AND by default.
- OR (or "or") joins alternatives: t:fish or t:bird.
- Parentheses nest conditions: t:legendary (t:goblin or t:elf).

Display keywords
- order: sorts results: order:cmc, order:edhrec, order:usd, order:rarity.
- direction:asc or direction:desc changes sort direction.
- unique:cards, unique:art, unique:prints control duplicates.

Examples
- t:legendary t:creature id<=bg o:sacrifice  Golgari sacrifice commanders
- o:"draw a card" id<=u mv<=2 f:commander   Cheap blue draw for Commander
- t:instant o:counter c:u usd<1              Budget blue counterspells
"#;

/// Cards banned in Commander (and therefore never suggested for cEDH).
pub const COMMANDER_BANNED_CARDS: &[&str] = &[
    "Ancestral Recall",
    "Balance",
    "Biorhythm",
    "Black Lotus",
    "Braids, Cabal Minion",
    "Channel",
    "Chaos Orb",
    "Coalition Victory",
    "Dockside Extortionist",
    "Emrakul, the Aeons Torn",
    "Erayo, Soratami Ascendant",
    "Falling Star",
    "Fastbond",
    "Flash",
    "Gifts Ungiven",
    "Golos, Tireless Pilgrim",
    "Griselbrand",
    "Hullbreacher",
    "Iona, Shield of Emeria",
    "Jeweled Lotus",
    "Karakas",
    "Leovold, Emissary of Trest",
    "Library of Alexandria",
    "Limited Resources",
    "Lutri, the Spellchaser",
    "Mana Crypt",
    "Mox Emerald",
    "Mox Jet",
    "Mox Pearl",
    "Mox Ruby",
    "Mox Sapphire",
    "Nadu, Winged Wisdom",
    "Panoptic Mirror",
    "Paradox Engine",
    "Primeval Titan",
    "Prophet of Kruphix",
    "Recurring Nightmare",
    "Rofellos, Llanowar Emissary",
    "Shahrazad",
    "Sundering Titan",
    "Sway of the Stars",
    "Sylvan Primordial",
    "Time Vault",
    "Time Walk",
    "Tinker",
    "Tolarian Academy",
    "Trade Secrets",
    "Upheaval",
    "Worldfire",
    "Yawgmoth's Bargain",
];

/// Banned-card list as a single comma-separated line, plus the card classes
/// banned wholesale.
pub fn banned_list() -> String {
    format!(
        "{}; also every ante card and every Conspiracy card",
        COMMANDER_BANNED_CARDS.join(", ")
    )
}
