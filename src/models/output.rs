use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TextFallback — Unstructured payload handed back instead of a parsed result
// ---------------------------------------------------------------------------

/// Serialized as `{"type": "text", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "text")]
pub struct TextFallback {
    pub text: String,
}

impl TextFallback {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// ToolOutput — Structured result or tagged text fallback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutput<T> {
    Text(TextFallback),
    Structured(T),
}

impl<T> ToolOutput<T> {
    pub fn text(text: impl Into<String>) -> Self {
        ToolOutput::Text(TextFallback::new(text))
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ToolOutput::Structured(_))
    }

    pub fn structured(&self) -> Option<&T> {
        match self {
            ToolOutput::Structured(v) => Some(v),
            ToolOutput::Text(_) => None,
        }
    }

    pub fn fallback(&self) -> Option<&TextFallback> {
        match self {
            ToolOutput::Text(t) => Some(t),
            ToolOutput::Structured(_) => None,
        }
    }

    pub fn into_structured(self) -> Option<T> {
        match self {
            ToolOutput::Structured(v) => Some(v),
            ToolOutput::Text(_) => None,
        }
    }
}

impl<T: DeserializeOwned> ToolOutput<T> {
    /// Parse `text` as `T` once; anything that does not parse is handed back
    /// verbatim as a text fallback.
    pub fn parse_or_text(text: &str) -> Self {
        match serde_json::from_str::<T>(text) {
            Ok(value) => ToolOutput::Structured(value),
            Err(e) => {
                tracing::warn!(error = %e, "completion was not valid JSON; returning raw text");
                ToolOutput::Text(TextFallback::new(text))
            }
        }
    }
}
