//! Mana cost notation (`{2}{U}{U}`) parsing.
//!
//! Costs are split into bracketed tokens; tokens outside the known symbol set
//! are dropped rather than treated as errors.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("valid mana symbol pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManaSymbol {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
    /// Generic mana, `{0}` through `{20}`.
    Generic(u8),
    X,
    Y,
    Z,
    Snow,
    Phyrexian,
    Energy,
    Tap,
    Untap,
}

impl ManaSymbol {
    /// Parse a single bracketed token such as `{U}` or `{12}`.
    pub fn from_token(token: &str) -> Option<Self> {
        let inner = token.strip_prefix('{')?.strip_suffix('}')?;
        let symbol = match inner {
            "W" => Self::White,
            "U" => Self::Blue,
            "B" => Self::Black,
            "R" => Self::Red,
            "G" => Self::Green,
            "C" => Self::Colorless,
            "X" => Self::X,
            "Y" => Self::Y,
            "Z" => Self::Z,
            "S" => Self::Snow,
            "P" => Self::Phyrexian,
            "E" => Self::Energy,
            "T" => Self::Tap,
            "Q" => Self::Untap,
            n => match n.parse::<u8>() {
                Ok(v) if v <= 20 && !n.starts_with('+') => Self::Generic(v),
                _ => return None,
            },
        };
        Some(symbol)
    }

    /// Short code shown for the symbol (`"U"`, `"12"`, ...).
    pub fn code(&self) -> String {
        match self {
            Self::White => "W".into(),
            Self::Blue => "U".into(),
            Self::Black => "B".into(),
            Self::Red => "R".into(),
            Self::Green => "G".into(),
            Self::Colorless => "C".into(),
            Self::Generic(n) => n.to_string(),
            Self::X => "X".into(),
            Self::Y => "Y".into(),
            Self::Z => "Z".into(),
            Self::Snow => "S".into(),
            Self::Phyrexian => "P".into(),
            Self::Energy => "E".into(),
            Self::Tap => "T".into(),
            Self::Untap => "Q".into(),
        }
    }

    pub fn is_colored(&self) -> bool {
        matches!(
            self,
            Self::White | Self::Blue | Self::Black | Self::Red | Self::Green
        )
    }

    /// Contribution of this symbol to converted mana cost.
    pub fn mana_value(&self) -> u32 {
        match self {
            Self::Generic(n) => u32::from(*n),
            Self::White
            | Self::Blue
            | Self::Black
            | Self::Red
            | Self::Green
            | Self::Colorless
            | Self::Snow
            | Self::Phyrexian => 1,
            Self::X | Self::Y | Self::Z | Self::Energy | Self::Tap | Self::Untap => 0,
        }
    }
}

impl fmt::Display for ManaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.code())
    }
}

/// Every `{...}` token in `cost`, in order, recognised or not.
pub fn extract_symbols(cost: &str) -> Vec<&str> {
    SYMBOL_RE.find_iter(cost).map(|m| m.as_str()).collect()
}

/// Recognised symbols of a mana cost. Absent or empty input yields nothing.
pub fn parse_mana_cost(cost: Option<&str>) -> Vec<ManaSymbol> {
    match cost {
        Some(c) if !c.is_empty() => extract_symbols(c)
            .into_iter()
            .filter_map(ManaSymbol::from_token)
            .collect(),
        _ => Vec::new(),
    }
}

pub fn converted_mana_cost(cost: Option<&str>) -> u32 {
    parse_mana_cost(cost).iter().map(ManaSymbol::mana_value).sum()
}

/// Render the recognised symbols of a cost, or `None` when there is nothing
/// to show.
pub fn render_mana_cost(cost: Option<&str>) -> Option<String> {
    let symbols = parse_mana_cost(cost);
    if symbols.is_empty() {
        return None;
    }
    Some(symbols.iter().map(ToString::to_string).collect())
}

pub fn color_name(code: &str) -> Option<&'static str> {
    match code {
        "W" => Some("White"),
        "U" => Some("Blue"),
        "B" => Some("Black"),
        "R" => Some("Red"),
        "G" => Some("Green"),
        "C" => Some("Colorless"),
        _ => None,
    }
}
