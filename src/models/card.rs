use serde::{Deserialize, Serialize};

use super::mana;

// ---------------------------------------------------------------------------
// ImageUris — Scryfall image set for a card or card face
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
}

// ---------------------------------------------------------------------------
// CardFace — One face of a multi-faced card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub image_uris: Option<ImageUris>,
}

// ---------------------------------------------------------------------------
// CardSummary — The card shape returned by the card search tool
// ---------------------------------------------------------------------------

/// A card as returned by the card database, trimmed to what gets displayed.
///
/// Field names follow Scryfall's card object so search results deserialize
/// directly; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub scryfall_uri: Option<String>,
    pub image_uris: Option<ImageUris>,
    pub card_faces: Option<Vec<CardFace>>,
}

impl CardSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mana_cost: None,
            type_line: None,
            oracle_text: None,
            scryfall_uri: None,
            image_uris: None,
            card_faces: None,
        }
    }

    /// Normal-size image URLs: the card's own image, otherwise one per face
    /// for at most the first two faces.
    pub fn image_urls(&self) -> Vec<&str> {
        if let Some(url) = self.image_uris.as_ref().and_then(|i| i.normal.as_deref()) {
            return vec![url];
        }
        self.card_faces
            .iter()
            .flatten()
            .take(2)
            .filter_map(|face| face.image_uris.as_ref().and_then(|i| i.normal.as_deref()))
            .collect()
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls().into_iter().next()
    }

    /// Mana cost of the card, falling back to the front face for cards whose
    /// cost only lives on the faces.
    pub fn effective_mana_cost(&self) -> Option<&str> {
        self.mana_cost
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| {
                self.card_faces
                    .as_ref()
                    .and_then(|faces| faces.first())
                    .and_then(|f| f.mana_cost.as_deref())
                    .filter(|c| !c.is_empty())
            })
    }

    pub fn converted_mana_cost(&self) -> u32 {
        mana::converted_mana_cost(self.effective_mana_cost())
    }
}
