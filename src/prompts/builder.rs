//! Line-oriented prompt builder.
//!
//! Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use commander_assistant::prompts::PromptBuilder;
//! let prompt = PromptBuilder::new()
//!     .line("Organize the deck into the following categories:")
//!     .numbered(&["Ramp", "Card Draw"])
//!     .blank()
//!     .line("Return only the JSON object, no other text.")
//!     .build();
//! assert!(prompt.contains("2. Card Draw"));
//! ```

/// Builds prompts from lines, numbered lists and JSON shape examples.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    lines: Vec<String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line of text. Embedded newlines are kept.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.lines.push(text.to_string());
        self
    }

    /// Append a line only when `text` is `Some` and non-empty.
    pub fn line_if(&mut self, text: Option<&str>) -> &mut Self {
        if let Some(t) = text.filter(|t| !t.trim().is_empty()) {
            self.lines.push(t.to_string());
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Append `items` as a `1.`-based numbered list.
    pub fn numbered(&mut self, items: &[&str]) -> &mut Self {
        for (i, item) in items.iter().enumerate() {
            self.lines.push(format!("{}. {}", i + 1, item));
        }
        self
    }

    /// Append a pretty-printed JSON value the model should mirror.
    pub fn json_shape(&mut self, shape: &serde_json::Value) -> &mut Self {
        let rendered = serde_json::to_string_pretty(shape).unwrap_or_else(|_| shape.to_string());
        self.lines.push(rendered);
        self
    }

    /// Join all lines. Leading and trailing blank lines are dropped.
    pub fn build(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}
