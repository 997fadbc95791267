use std::collections::HashMap;

use commander_assistant::prompts::{self, Mode};
use commander_assistant::providers::{
    build_request_body, extract_reasoning, parse_completion_response, ChatMessage,
    CompletionRequest, ModelKey, ProviderRegistry,
};
use commander_assistant::AssistantError;
use serde_json::json;

// ---------------------------------------------------------------------------
// extract_reasoning
// ---------------------------------------------------------------------------

#[test]
fn reasoning_is_split_from_visible_text() {
    let (text, reasoning) =
        extract_reasoning("<think>count lands</think>\nPlay 37 lands.", "think");
    assert_eq!(text, "Play 37 lands.");
    assert_eq!(reasoning.as_deref(), Some("count lands"));
}

#[test]
fn multiple_reasoning_regions_are_joined() {
    let (text, reasoning) =
        extract_reasoning("<think>a</think>One. <think>b</think>Two.", "think");
    assert_eq!(text, "One. Two.");
    assert_eq!(reasoning.as_deref(), Some("a\nb"));
}

#[test]
fn unterminated_reasoning_swallows_the_rest() {
    let (text, reasoning) = extract_reasoning("Answer <think>still thinking", "think");
    assert_eq!(text, "Answer");
    assert_eq!(reasoning.as_deref(), Some("still thinking"));
}

#[test]
fn text_without_tags_is_untouched() {
    let (text, reasoning) = extract_reasoning("  Just an answer. ", "think");
    assert_eq!(text, "Just an answer.");
    assert_eq!(reasoning, None);
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn default_registry_covers_every_key() {
    let registry = ProviderRegistry::default();
    for key in ModelKey::ALL {
        assert!(!registry.get(key).model_id.is_empty(), "{} missing", key);
    }
    assert!(registry.get(ModelKey::SearchModel).web_search);
    assert!(registry.get(ModelKey::SearchReasoningModel).web_search);
    assert!(!registry.get(ModelKey::TitleModel).web_search);
    assert_eq!(registry.get(ModelKey::ChatModelReasoning).reasoning_tag, Some("think"));
}

#[test]
fn overrides_replace_model_ids() {
    let overrides = HashMap::from([("title-model".to_string(), "openai/gpt-4o-mini".to_string())]);
    let registry = ProviderRegistry::with_overrides(&overrides).unwrap();
    assert_eq!(registry.get(ModelKey::TitleModel).model_id, "openai/gpt-4o-mini");
    assert_eq!(
        registry.get(ModelKey::ChatModel),
        ProviderRegistry::default().get(ModelKey::ChatModel)
    );
}

#[test]
fn unknown_override_key_is_a_config_error() {
    let overrides = HashMap::from([("fast-model".to_string(), "x".to_string())]);
    let err = ProviderRegistry::with_overrides(&overrides).unwrap_err();
    assert!(matches!(err, AssistantError::Config(_)));
}

#[test]
fn model_keys_round_trip() {
    for key in ModelKey::ALL {
        assert_eq!(ModelKey::from_id(key.as_str()), Some(key));
        assert_eq!(
            serde_json::to_value(key).unwrap(),
            json!(key.as_str())
        );
    }
}

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[test]
fn request_body_includes_system_and_messages() {
    let registry = ProviderRegistry::default();
    let request = CompletionRequest {
        model: ModelKey::ChatModel,
        system: Some("be brief".to_string()),
        messages: vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")],
        search_domains: Vec::new(),
    };
    let body = build_request_body(registry.get(ModelKey::ChatModel), &request);
    assert_eq!(body["model"], registry.get(ModelKey::ChatModel).model_id.as_str());
    assert_eq!(
        body["messages"],
        json!([
            { "role": "system", "content": "be brief" },
            { "role": "user", "content": "hi" },
            { "role": "assistant", "content": "hello" }
        ])
    );
    assert!(body.get("search_domain_filter").is_none());
}

#[test]
fn domain_filter_only_sent_to_web_search_models() {
    let registry = ProviderRegistry::default();
    let request = CompletionRequest::prompt(ModelKey::SearchModel, "find decks")
        .with_search_domains(&["moxfield.com"]);

    let body = build_request_body(registry.get(ModelKey::SearchModel), &request);
    assert_eq!(body["search_domain_filter"], json!(["moxfield.com"]));

    let body = build_request_body(registry.get(ModelKey::TitleModel), &request);
    assert!(body.get("search_domain_filter").is_none());
}

#[test]
fn response_text_and_tagged_reasoning() {
    let registry = ProviderRegistry::default();
    let data = json!({
        "choices": [{ "message": { "content": "<think>hmm</think>Use Cyclonic Rift." } }]
    });
    let completion =
        parse_completion_response(registry.get(ModelKey::ChatModelReasoning), &data).unwrap();
    assert_eq!(completion.text, "Use Cyclonic Rift.");
    assert_eq!(completion.reasoning.as_deref(), Some("hmm"));
}

#[test]
fn provider_reasoning_field_is_preferred() {
    let registry = ProviderRegistry::default();
    let data = json!({
        "choices": [{ "message": { "content": "Answer", "reasoning": "provider thoughts" } }]
    });
    let completion = parse_completion_response(registry.get(ModelKey::ChatModel), &data).unwrap();
    assert_eq!(completion.text, "Answer");
    assert_eq!(completion.reasoning.as_deref(), Some("provider thoughts"));
}

#[test]
fn error_and_empty_responses_fail() {
    let registry = ProviderRegistry::default();
    let spec = registry.get(ModelKey::ChatModel);

    let err = parse_completion_response(spec, &json!({ "error": { "message": "quota" } }))
        .unwrap_err();
    assert!(matches!(err, AssistantError::Upstream(ref m) if m == "quota"));

    let empty = json!({ "choices": [{ "message": { "content": "   " } }] });
    assert!(parse_completion_response(spec, &empty).is_err());
}

// ---------------------------------------------------------------------------
// Modes and system prompts
// ---------------------------------------------------------------------------

#[test]
fn modes_map_from_model_ids() {
    assert_eq!(Mode::from_model_id("chat-model"), Mode::Default);
    assert_eq!(Mode::from_model_id("chat-model-reasoning"), Mode::Reasoning);
    assert_eq!(Mode::from_model_id("search-model"), Mode::Search);
    assert_eq!(Mode::from_model_id("search-reasoning-model"), Mode::SearchReasoning);
    assert_eq!(Mode::from_model_id("something-else"), Mode::Default);
    assert_eq!(Mode::from_model_id("title-model"), Mode::Default);
}

#[test]
fn system_prompt_starts_with_main_rules() {
    for mode in [Mode::Default, Mode::Reasoning, Mode::Search, Mode::SearchReasoning] {
        let prompt = prompts::system_prompt(mode);
        assert!(prompt.starts_with(prompts::MAIN_RULES_PROMPT));
    }
    assert!(prompts::system_prompt(Mode::Default).ends_with(prompts::TOOL_GUIDANCE_PROMPT));
    assert!(prompts::system_prompt(Mode::Search).ends_with(prompts::SEARCH_MODEL_PROMPT));
}
