use super::*;

// =============================================================
// Deserialization from server payloads
// =============================================================

#[test]
fn model_deserializes_with_underscored_metadata_key() {
    let raw = serde_json::json!({
        "id": "m1",
        "name": "Local Llama",
        "model_name": "llama-3.1-8b",
        "endpoint_url": "http://localhost:8080/v1",
        "is_active": true,
        "metadata_": { "region": "eu" },
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-02T10:00:00Z"
    });
    let model: Model = serde_json::from_value(raw).unwrap();
    assert_eq!(model.metadata, Some(serde_json::json!({ "region": "eu" })));
}

#[test]
fn model_metadata_defaults_to_none_when_absent() {
    let raw = serde_json::json!({
        "id": "m1",
        "name": "Local Llama",
        "model_name": null,
        "endpoint_url": "http://localhost:8080/v1",
        "is_active": false,
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-02T10:00:00Z"
    });
    let model: Model = serde_json::from_value(raw).unwrap();
    assert!(model.metadata.is_none());
    assert!(model.model_name.is_none());
}

#[test]
fn prompt_tags_default_to_empty() {
    let raw = serde_json::json!({
        "id": "p1",
        "name": "Summarizer",
        "description": null,
        "content": "Summarize the input.",
        "is_favorite": false,
        "current_version": 3,
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-02T10:00:00Z"
    });
    let prompt: Prompt = serde_json::from_value(raw).unwrap();
    assert!(prompt.tags.is_empty());
    assert_eq!(prompt.current_version, 3);
}

#[test]
fn test_run_results_default_to_empty() {
    let raw = serde_json::json!({
        "id": "t1",
        "user_id": "u1",
        "prompt_template_id": null,
        "user_message": "hello",
        "system_prompt": null,
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-01T10:00:05Z"
    });
    let run: TestRun = serde_json::from_value(raw).unwrap();
    assert!(run.results.is_empty());
}

// =============================================================
// Serialization of request bodies
// =============================================================

#[test]
fn model_update_omits_unset_fields() {
    let update = ModelUpdate {
        is_active: Some(false),
        ..ModelUpdate::default()
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, serde_json::json!({ "is_active": false }));
}

#[test]
fn model_create_serializes_metadata_with_wire_name() {
    let create = ModelCreate {
        name: "GPT proxy".to_owned(),
        model_name: None,
        endpoint_url: "https://proxy.example.com/v1".to_owned(),
        api_key: Some("sk-test".to_owned()),
        metadata: Some(serde_json::json!({ "tier": "dev" })),
    };
    let value = serde_json::to_value(&create).unwrap();
    assert!(value.get("metadata_").is_some());
    assert!(value.get("metadata").is_none());
    assert!(value.get("model_name").is_none());
}

#[test]
fn rollback_request_serializes_version_number() {
    let body = RollbackRequest { version_number: 4 };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "version_number": 4 })
    );
}

#[test]
fn test_run_create_omits_unset_optionals() {
    let body = TestRunCreate {
        user_message: "compare this".to_owned(),
        system_prompt: None,
        prompt_template_id: None,
        models: vec![ModelTestConfig {
            model_id: "m1".to_owned(),
            temperature: Some(0.7),
            max_tokens: Some(1024),
            top_p: Some(1.0),
        }],
    };
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("system_prompt").is_none());
    assert!(value.get("prompt_template_id").is_none());
    assert_eq!(value["models"].as_array().unwrap().len(), 1);
}
