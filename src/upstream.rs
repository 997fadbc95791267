//! The two external services every tool talks to.
//!
//! [`Upstream`] owns the completion client and the card database behind
//! their traits. It holds no mutable state, so one instance is shared by
//! reference across any number of concurrent tool calls.

use crate::error::Result;
use crate::providers::{Completion, CompletionClient, CompletionRequest};
use crate::scryfall::CardDatabase;

pub struct Upstream {
    completion: Box<dyn CompletionClient>,
    cards: Box<dyn CardDatabase>,
}

impl Upstream {
    pub fn new(completion: Box<dyn CompletionClient>, cards: Box<dyn CardDatabase>) -> Self {
        Self { completion, cards }
    }

    pub fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        self.completion.complete(request)
    }

    pub fn search_cards(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<crate::models::CardSummary>> {
        self.cards.search(query, limit)
    }
}
