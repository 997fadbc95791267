#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input rejected: {0}")]
    InputRejected(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl AssistantError {
    /// `true` for errors raised before any network call was made.
    pub fn is_input_rejected(&self) -> bool {
        matches!(
            self,
            AssistantError::InputRejected(_) | AssistantError::UnknownTool(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
