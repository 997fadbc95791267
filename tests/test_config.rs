use std::io::Write;
use std::time::Duration;

use commander_assistant::config::{default_config_path, Settings, DEFAULT_TIMEOUT_SECS};
use commander_assistant::{AssistantError, CommanderAssistantBuilder, ModelKey};

#[test]
fn settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "apiKey": "sk-test",
            "timeoutSecs": 5,
            "models": {{ "search-model": "perplexity/sonar" }}
        }}"#
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.api_key.as_deref(), Some("sk-test"));
    assert_eq!(settings.timeout(), Duration::from_secs(5));
    assert_eq!(settings.completion_base_url, None);
    assert_eq!(
        settings.models.get("search-model").map(String::as_str),
        Some("perplexity/sonar")
    );
}

#[test]
fn malformed_settings_file_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, AssistantError::Config(_)));
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, AssistantError::Io(_)));
}

#[test]
fn default_timeout() {
    assert_eq!(
        Settings::default().timeout(),
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
}

#[test]
fn default_config_path_is_namespaced() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("commander-assistant/config.json"));
    }
}

#[test]
fn builder_applies_model_overrides_from_settings() {
    let mut settings = Settings::default();
    settings
        .models
        .insert("title-model".to_string(), "meta/llama-3".to_string());
    let assistant = CommanderAssistantBuilder::from_settings(&settings)
        .build()
        .unwrap();
    assert_eq!(
        assistant.registry().get(ModelKey::TitleModel).model_id,
        "meta/llama-3"
    );
    assert!(assistant.to_string().contains("title-model=meta/llama-3"));
}

#[test]
fn builder_rejects_unknown_model_keys() {
    let mut settings = Settings::default();
    settings.models.insert("nope".to_string(), "x".to_string());
    let err = CommanderAssistantBuilder::from_settings(&settings)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, AssistantError::Config(_)));
}
