//! Read-only access to the Scryfall card database.
//!
//! Only the full-text search endpoint is used. Results come from the first
//! page; the client never paginates.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config;
use crate::error::{AssistantError, Result};
use crate::models::CardSummary;

/// Anything that can answer a card search query.
pub trait CardDatabase: Send + Sync {
    /// Search for cards matching `query` (Scryfall search syntax).
    fn search(&self, query: &str, limit: usize) -> Result<Vec<CardSummary>>;
}

pub struct ScryfallClient {
    client: Client,
    base_url: String,
}

impl ScryfallClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/cards/search", self.base_url)
    }
}

impl CardDatabase for ScryfallClient {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<CardSummary>> {
        let limit = limit.to_string();
        tracing::debug!(query, "searching Scryfall");
        let resp = self
            .client
            .get(self.search_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()?;
        let status = resp.status();
        let data: Value = resp.json()?;
        parse_search_response(status, &data)
    }
}

/// Interpret a `/cards/search` response body.
///
/// A `404` carrying Scryfall's `not_found` error means the query matched no
/// cards and is reported as an empty list.
pub fn parse_search_response(status: StatusCode, data: &Value) -> Result<Vec<CardSummary>> {
    let is_error_object = data.get("object").and_then(|o| o.as_str()) == Some("error");

    if status == StatusCode::NOT_FOUND
        && data.get("code").and_then(|c| c.as_str()) == Some("not_found")
    {
        return Ok(Vec::new());
    }

    if !status.is_success() || is_error_object {
        let details = data
            .get("details")
            .and_then(|d| d.as_str())
            .unwrap_or("card search failed");
        return Err(AssistantError::Upstream(format!(
            "Scryfall returned {}: {}",
            status, details
        )));
    }

    match data.get("data") {
        Some(Value::Array(cards)) => cards
            .iter()
            .map(|c| serde_json::from_value(c.clone()).map_err(AssistantError::from))
            .collect(),
        _ => Err(AssistantError::Upstream(
            "Scryfall response has no data array".to_string(),
        )),
    }
}
