pub mod card;
pub mod deck;
pub mod mana;
pub mod output;
pub mod rules;
pub mod sub;

pub use card::*;
pub use deck::*;
pub use mana::{
    color_name, converted_mana_cost, extract_symbols, parse_mana_cost, render_mana_cost, ManaSymbol,
};
pub use output::*;
pub use rules::*;
pub use sub::*;
