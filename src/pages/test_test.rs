use super::*;

fn two_models() -> Vec<(String, SamplingForm)> {
    vec![
        ("m1".to_owned(), SamplingForm::default()),
        (
            "m2".to_owned(),
            SamplingForm {
                temperature: 0.2,
                max_tokens: 256,
                top_p: 0.9,
            },
        ),
    ]
}

// =============================================================
// Payload assembly
// =============================================================

#[test]
fn build_test_run_carries_one_config_per_selected_model() {
    let create = build_test_run("Compare these", "", None, &two_models()).unwrap();
    assert_eq!(create.models.len(), 2);
    assert_eq!(create.models[0].model_id, "m1");
    assert_eq!(create.models[0].temperature, Some(DEFAULT_TEMPERATURE));
    assert_eq!(create.models[1].max_tokens, Some(256));
    assert_eq!(create.models[1].top_p, Some(0.9));
}

#[test]
fn build_test_run_omits_unset_optionals_from_wire_body() {
    let create = build_test_run("Compare these", "  ", None, &two_models()).unwrap();
    assert!(create.system_prompt.is_none());
    assert!(create.prompt_template_id.is_none());
    let value = serde_json::to_value(&create).unwrap();
    assert!(value.get("system_prompt").is_none());
    assert!(value.get("prompt_template_id").is_none());
}

#[test]
fn build_test_run_keeps_template_and_system_prompt_when_set() {
    let create = build_test_run(
        " Summarize this ",
        "You are terse.",
        Some("tpl-1"),
        &two_models(),
    )
    .unwrap();
    assert_eq!(create.user_message, "Summarize this");
    assert_eq!(create.system_prompt.as_deref(), Some("You are terse."));
    assert_eq!(create.prompt_template_id.as_deref(), Some("tpl-1"));
}

#[test]
fn build_test_run_rejects_blank_message_and_empty_selection() {
    assert!(build_test_run("   ", "", None, &two_models()).is_err());
    assert!(build_test_run("hi", "", None, &[]).is_err());
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn sampling_defaults_match_composer_initial_state() {
    let form = SamplingForm::default();
    assert!((form.temperature - 0.7).abs() < f64::EPSILON);
    assert_eq!(form.max_tokens, 1024);
    assert!((form.top_p - 1.0).abs() < f64::EPSILON);
}
