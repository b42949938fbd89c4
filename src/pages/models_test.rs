use super::*;

fn filled_form() -> ModelForm {
    ModelForm {
        id: None,
        name: "  Local Llama  ".to_owned(),
        model_name: "llama-3.1-8b".to_owned(),
        endpoint_url: " http://localhost:8080/v1 ".to_owned(),
        api_key: String::new(),
        metadata: String::new(),
        is_active: true,
    }
}

// =============================================================
// Create payloads
// =============================================================

#[test]
fn build_model_create_trims_and_drops_empty_optionals() {
    let create = build_model_create(&filled_form()).unwrap();
    assert_eq!(create.name, "Local Llama");
    assert_eq!(create.endpoint_url, "http://localhost:8080/v1");
    assert_eq!(create.model_name.as_deref(), Some("llama-3.1-8b"));
    assert!(create.api_key.is_none());
    assert!(create.metadata.is_none());
}

#[test]
fn build_model_create_requires_name_and_endpoint() {
    let mut form = filled_form();
    form.name = "   ".to_owned();
    assert!(build_model_create(&form).is_err());

    let mut form = filled_form();
    form.endpoint_url = String::new();
    assert!(build_model_create(&form).is_err());
}

#[test]
fn build_model_create_rejects_malformed_metadata() {
    let mut form = filled_form();
    form.metadata = "{not json".to_owned();
    let err = build_model_create(&form).unwrap_err();
    assert!(err.starts_with("Invalid metadata JSON"));
}

// =============================================================
// Update payloads
// =============================================================

#[test]
fn build_model_update_omits_blank_api_key() {
    let mut form = filled_form();
    form.id = Some("m1".to_owned());
    form.is_active = false;
    let update = build_model_update(&form).unwrap();
    // Blank key means "keep the stored key", so the field must be absent.
    assert!(update.api_key.is_none());
    assert_eq!(update.is_active, Some(false));
    let value = serde_json::to_value(&update).unwrap();
    assert!(value.get("api_key").is_none());
}

#[test]
fn build_model_update_sends_replacement_api_key() {
    let mut form = filled_form();
    form.id = Some("m1".to_owned());
    form.api_key = "sk-new".to_owned();
    let update = build_model_update(&form).unwrap();
    assert_eq!(update.api_key.as_deref(), Some("sk-new"));
}

// =============================================================
// Metadata parsing
// =============================================================

#[test]
fn parse_metadata_empty_input_means_none() {
    assert_eq!(parse_metadata(""), Ok(None));
    assert_eq!(parse_metadata("   \n"), Ok(None));
}

#[test]
fn parse_metadata_accepts_json_objects() {
    let parsed = parse_metadata(r#"{ "region": "eu" }"#).unwrap();
    assert_eq!(parsed, Some(serde_json::json!({ "region": "eu" })));
}

// =============================================================
// Paging
// =============================================================

#[test]
fn page_count_rounds_up_partial_pages() {
    assert_eq!(page_count(0, 20), 1);
    assert_eq!(page_count(20, 20), 1);
    assert_eq!(page_count(21, 20), 2);
    assert_eq!(page_count(59, 20), 3);
}

// =============================================================
// Form seeding
// =============================================================

#[test]
fn form_from_model_blanks_the_api_key() {
    let model = Model {
        id: "m1".to_owned(),
        name: "Local Llama".to_owned(),
        model_name: None,
        endpoint_url: "http://localhost:8080/v1".to_owned(),
        is_active: false,
        metadata: Some(serde_json::json!({ "tier": "dev" })),
        created_at: "2026-08-01T10:00:00Z".to_owned(),
        updated_at: "2026-08-02T10:00:00Z".to_owned(),
    };
    let form = ModelForm::from_model(&model);
    assert_eq!(form.id.as_deref(), Some("m1"));
    // The server never echoes keys back; the form must not pretend otherwise.
    assert!(form.api_key.is_empty());
    assert!(form.metadata.contains("tier"));
    assert!(!form.is_active);
}
