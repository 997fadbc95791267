//! Shared test fixtures for the commander assistant integration tests.
//!
//! Provides scripted stand-ins for both upstream services: a completion
//! client that replays queued answers and records every request, and a card
//! database that returns a fixed result set and records every query.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use commander_assistant::error::{AssistantError, Result};
use commander_assistant::models::{CardSummary, ImageUris};
use commander_assistant::providers::{Completion, CompletionClient, CompletionRequest};
use commander_assistant::scryfall::CardDatabase;
use commander_assistant::CommanderAssistant;

// ---------------------------------------------------------------------------
// ScriptedCompletion
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct ScriptedCompletion {
    replies: Arc<Mutex<VecDeque<Result<Completion>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion with `text`.
    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(Completion {
            text: text.to_string(),
            reasoning: None,
        }));
        self
    }

    /// Queue a failed completion.
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(AssistantError::Upstream(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> String {
        let requests = self.requests();
        let last = requests.last().expect("no completion was requested");
        last.messages.last().unwrap().content.clone()
    }
}

impl CompletionClient for ScriptedCompletion {
    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AssistantError::Upstream("no scripted reply".to_string())))
    }
}

// ---------------------------------------------------------------------------
// StaticCardDatabase
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct StaticCardDatabase {
    cards: Arc<Vec<CardSummary>>,
    failure: Option<String>,
    queries: Arc<Mutex<Vec<(String, usize)>>>,
}

impl StaticCardDatabase {
    pub fn with_cards(cards: Vec<CardSummary>) -> Self {
        Self {
            cards: Arc::new(cards),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

impl CardDatabase for StaticCardDatabase {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<CardSummary>> {
        self.queries.lock().unwrap().push((query.to_string(), limit));
        match &self.failure {
            Some(message) => Err(AssistantError::Upstream(message.clone())),
            // Returns the whole first page, like the real API.
            None => Ok(self.cards.as_ref().clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn assistant(
    completion: &ScriptedCompletion,
    cards: &StaticCardDatabase,
) -> CommanderAssistant {
    CommanderAssistant::builder()
        .completion_client(Box::new(completion.clone()))
        .card_database(Box::new(cards.clone()))
        .build()
        .unwrap()
}

pub fn assistant_with_replies(replies: &[&str]) -> (CommanderAssistant, ScriptedCompletion) {
    let completion = replies
        .iter()
        .fold(ScriptedCompletion::new(), |c, r| c.reply(r));
    let a = assistant(&completion, &StaticCardDatabase::default());
    (a, completion)
}

pub fn sample_card(n: usize) -> CardSummary {
    let mut card = CardSummary::new(format!("card-{:03}", n), format!("Card {}", n));
    card.mana_cost = Some("{1}{U}".to_string());
    card.type_line = Some("Instant".to_string());
    card.oracle_text = Some("Draw a card.".to_string());
    card.image_uris = Some(ImageUris {
        normal: Some(format!("https://cards.scryfall.io/normal/{}.jpg", n)),
        ..Default::default()
    });
    card
}

pub fn sample_cards(count: usize) -> Vec<CardSummary> {
    (1..=count).map(sample_card).collect()
}
