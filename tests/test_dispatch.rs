mod common;

use commander_assistant::tools::{tool_definitions, ToolName, ToolResult};
use commander_assistant::AssistantError;
use common::{
    assistant, assistant_with_replies, sample_cards, ScriptedCompletion, StaticCardDatabase,
};
use serde_json::json;

#[test]
fn unknown_tool_is_rejected() {
    let (a, completion) = assistant_with_replies(&["unused"]);
    let err = a.dispatch("searchPlaneswalkers", json!({})).unwrap_err();
    assert!(matches!(err, AssistantError::UnknownTool(ref n) if n == "searchPlaneswalkers"));
    assert!(err.is_input_rejected());
    assert!(completion.requests().is_empty());
}

#[test]
fn malformed_arguments_are_rejected_before_any_call() {
    let (a, completion) = assistant_with_replies(&["unused"]);

    let err = a.dispatch("searchCards", json!({ "query": 42 })).unwrap_err();
    assert!(matches!(err, AssistantError::InputRejected(_)));

    let err = a.dispatch("searchRules", json!({})).unwrap_err();
    assert!(err.is_input_rejected());

    let err = a.dispatch("displayDecklist", json!({ "cards": "Sol Ring" })).unwrap_err();
    assert!(err.is_input_rejected());

    assert!(completion.requests().is_empty());
}

#[test]
fn null_arguments_work_for_all_optional_tools() {
    let (a, completion) = assistant_with_replies(&["[]"]);
    let result = a.dispatch("searchDecklist", serde_json::Value::Null).unwrap();
    assert!(matches!(result, ToolResult::Decklists(_)));
    assert!(result.is_structured());
    assert_eq!(completion.requests().len(), 1);
}

#[test]
fn dispatch_routes_to_card_search() {
    let completion = ScriptedCompletion::new().reply("t:artifact");
    let db = StaticCardDatabase::with_cards(sample_cards(12));
    let a = assistant(&completion, &db);

    let result = a.dispatch("searchCards", json!({ "query": "artifacts" })).unwrap();
    match &result {
        ToolResult::Cards(output) => assert_eq!(output.structured().unwrap().len(), 10),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(result.to_markdown().contains("### Card 10"));
}

#[test]
fn fallback_results_serialize_as_tagged_text() {
    let (a, _) = assistant_with_replies(&["no json here"]);
    let result = a.dispatch("searchCedh", json!({ "query": "Thrasios" })).unwrap();
    assert!(!result.is_structured());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "type": "text", "text": "no json here" })
    );
    assert_eq!(result.to_markdown(), "no json here");
}

#[test]
fn structured_results_serialize_as_payload() {
    let reply = r#"{"query": "cascade", "summary": "Exile until you hit a cheaper spell."}"#;
    let (a, _) = assistant_with_replies(&[reply]);
    let result = a.dispatch("searchRules", json!({ "query": "cascade" })).unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "query": "cascade", "summary": "Exile until you hit a cheaper spell." })
    );
}

#[test]
fn deck_results_render_full_view() {
    let reply = r#"{"deckName": "Lands", "categories": {"lands": ["A", "B", "C", "D", "E"]}}"#;
    let (a, _) = assistant_with_replies(&[reply]);
    let result = a
        .dispatch("displayDecklist", json!({ "cards": ["A", "B", "C", "D", "E"] }))
        .unwrap();
    let md = result.to_markdown();
    assert!(md.contains("### Lands (5)\n- A\n- B\n- C\n- D\n- E"));
    assert!(!md.contains("more..."));
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

#[test]
fn every_tool_has_a_definition() {
    let definitions = tool_definitions();
    let names: Vec<&str> = definitions.iter().map(|d| d.name).collect();
    assert_eq!(
        names,
        vec![
            "searchCards",
            "searchDecklist",
            "searchCedh",
            "searchRules",
            "displayDecklist",
            "suggestDecklist"
        ]
    );
    for d in &definitions {
        assert!(!d.description.is_empty());
        assert!(d.parameters.is_object(), "{} has no schema", d.name);
    }
}

#[test]
fn query_tools_require_query_in_schema() {
    let schema = ToolName::SearchCards.parameters();
    assert_eq!(schema["properties"]["query"]["type"], "string");
    let required = schema["required"].as_array().unwrap();
    assert!(required.contains(&json!("query")));
}

#[test]
fn decklist_schema_uses_camel_case_optional_fields() {
    let schema = ToolName::SearchDecklist.parameters();
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("commanderName"));
    assert!(properties.contains_key("powerLevel"));
    assert!(schema
        .get("required")
        .and_then(|r| r.as_array())
        .map_or(true, |r| r.is_empty()));
}

#[test]
fn tool_names_round_trip() {
    for tool in ToolName::ALL {
        assert_eq!(ToolName::from_name(tool.as_str()), Some(tool));
        assert_eq!(tool.to_string(), tool.as_str());
    }
    assert_eq!(ToolName::from_name("SearchCards"), None);
}
