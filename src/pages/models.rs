//! Models page: list, register, edit, health-check, and delete endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Models paginate with `page`/`size`. A failed list fetch logs and renders
//! an empty table; it never navigates or keeps stale rows.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use leptos::prelude::*;
use std::collections::HashMap;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Model, ModelCreate, ModelHealthCheck, ModelUpdate};
#[cfg(feature = "hydrate")]
use crate::util::lifecycle::AliveFlag;

const PAGE_SIZE: u32 = 20;

/// Form state seeding the add/edit dialog. `id` is `None` for a new model.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ModelForm {
    pub id: Option<String>,
    pub name: String,
    pub model_name: String,
    pub endpoint_url: String,
    pub api_key: String,
    /// Raw JSON text; parsed on submit.
    pub metadata: String,
    pub is_active: bool,
}

impl ModelForm {
    fn new() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    fn from_model(model: &Model) -> Self {
        Self {
            id: Some(model.id.clone()),
            name: model.name.clone(),
            model_name: model.model_name.clone().unwrap_or_default(),
            endpoint_url: model.endpoint_url.clone(),
            api_key: String::new(),
            metadata: model
                .metadata
                .as_ref()
                .and_then(|value| serde_json::to_string_pretty(value).ok())
                .unwrap_or_default(),
            is_active: model.is_active,
        }
    }
}

fn none_if_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Parse the metadata textarea: empty means no metadata, anything else must
/// be valid JSON.
pub(crate) fn parse_metadata(input: &str) -> Result<Option<serde_json::Value>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| format!("Invalid metadata JSON: {e}"))
}

/// Validate the form into a registration payload.
pub(crate) fn build_model_create(form: &ModelForm) -> Result<ModelCreate, String> {
    if form.name.trim().is_empty() {
        return Err("Name is required".to_owned());
    }
    if form.endpoint_url.trim().is_empty() {
        return Err("Endpoint URL is required".to_owned());
    }
    Ok(ModelCreate {
        name: form.name.trim().to_owned(),
        model_name: none_if_empty(&form.model_name),
        endpoint_url: form.endpoint_url.trim().to_owned(),
        api_key: none_if_empty(&form.api_key),
        metadata: parse_metadata(&form.metadata)?,
    })
}

/// Validate the form into a partial update. A blank API key means "keep the
/// stored key", so it is omitted rather than overwritten.
pub(crate) fn build_model_update(form: &ModelForm) -> Result<ModelUpdate, String> {
    if form.name.trim().is_empty() {
        return Err("Name is required".to_owned());
    }
    if form.endpoint_url.trim().is_empty() {
        return Err("Endpoint URL is required".to_owned());
    }
    Ok(ModelUpdate {
        name: Some(form.name.trim().to_owned()),
        model_name: none_if_empty(&form.model_name),
        endpoint_url: Some(form.endpoint_url.trim().to_owned()),
        api_key: none_if_empty(&form.api_key),
        is_active: Some(form.is_active),
        metadata: parse_metadata(&form.metadata)?,
    })
}

/// Number of pages for a `page`/`size` paginated total (at least one).
pub(crate) fn page_count(total: u64, size: u32) -> u32 {
    if total == 0 {
        return 1;
    }
    let size = u64::from(size.max(1));
    u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX)
}

/// Models page — paged table with add/edit dialog, health probe, delete.
#[component]
pub fn ModelsPage() -> impl IntoView {
    let models = RwSignal::new(Vec::<Model>::new());
    let total = RwSignal::new(0_u64);
    let page = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let editor = RwSignal::new(None::<ModelForm>);
    let pending_delete = RwSignal::new(None::<Model>);
    let health = RwSignal::new(HashMap::<String, ModelHealthCheck>::new());

    #[cfg(feature = "hydrate")]
    let alive = AliveFlag::new();

    let load = Callback::new(move |page_number: u32| {
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::list_models(page_number, PAGE_SIZE, false).await {
                    Ok(resp) => {
                        if alive.is_alive() {
                            models.set(resp.items);
                            total.set(resp.total);
                            page.set(resp.page);
                        }
                    }
                    Err(err) => {
                        leptos::logging::error!("model list fetch failed: {err}");
                        if alive.is_alive() {
                            models.set(Vec::new());
                            total.set(0);
                        }
                    }
                }
                if alive.is_alive() {
                    loading.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page_number;
        }
    });

    load.run(1);
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.kill());
    }

    let on_health = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::check_model_health(&id).await {
                    Ok(check) => {
                        health.update(|map| {
                            map.insert(check.model_id.clone(), check);
                        });
                    }
                    Err(err) => leptos::logging::error!("health check failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(model) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_model(&model.id).await {
                    Ok(()) => load.run(page.get_untracked()),
                    Err(err) => leptos::logging::error!("model delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = model;
        }
    });

    let on_saved = Callback::new(move |()| {
        editor.set(None);
        load.run(page.get_untracked());
    });

    view! {
        <div class="models-page">
            <header class="page-header">
                <h2>"Models"</h2>
                <p class="page-header__subtitle">"Manage your LLM model endpoints"</p>
                <button class="btn btn--primary" on:click=move |_| editor.set(Some(ModelForm::new()))>
                    "+ Add Model"
                </button>
            </header>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading models..."</p> }
            >
                <Show
                    when=move || !models.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="card empty-state">
                                <h3>"No models yet"</h3>
                                <p>"Add your first LLM model endpoint to get started."</p>
                            </div>
                        }
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Model"</th>
                                <th>"Endpoint"</th>
                                <th>"Status"</th>
                                <th>"Updated"</th>
                                <th>"Health"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                models
                                    .get()
                                    .into_iter()
                                    .map(|model| {
                                        view! {
                                            <ModelRow
                                                model=model
                                                health=health
                                                on_health=on_health
                                                editor=editor
                                                pending_delete=pending_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <div class="pager">
                <button
                    class="btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| load.run(page.get_untracked().saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pager__label">
                    {move || format!("Page {} of {}", page.get(), page_count(total.get(), PAGE_SIZE))}
                </span>
                <button
                    class="btn"
                    disabled=move || page.get() >= page_count(total.get(), PAGE_SIZE)
                    on:click=move |_| load.run(page.get_untracked() + 1)
                >
                    "Next"
                </button>
            </div>

            <Show when=move || editor.get().is_some()>
                <ModelDialog
                    seed=editor.get_untracked().unwrap_or_default()
                    on_cancel=Callback::new(move |()| editor.set(None))
                    on_saved=on_saved
                />
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Model"
                    message=format!(
                        "This will permanently delete \"{}\".",
                        pending_delete.get_untracked().map(|m| m.name).unwrap_or_default()
                    )
                    on_confirm=on_delete_confirm
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}

/// One table row with inline health status.
#[component]
fn ModelRow(
    model: Model,
    health: RwSignal<HashMap<String, ModelHealthCheck>>,
    on_health: Callback<String>,
    editor: RwSignal<Option<ModelForm>>,
    pending_delete: RwSignal<Option<Model>>,
) -> impl IntoView {
    let id = model.id.clone();
    let health_id = model.id.clone();
    let edit_model = model.clone();
    let delete_model = model.clone();
    let health_view = move || {
        health.get().get(&health_id).map(|check| {
            if check.is_healthy {
                let latency = check
                    .latency_ms
                    .map_or_else(String::new, |ms| format!(" ({ms:.0} ms)"));
                view! { <span class="health health--ok">{format!("healthy{latency}")}</span> }
                    .into_any()
            } else {
                let error = check.error.clone().unwrap_or_else(|| "unreachable".to_owned());
                view! { <span class="health health--bad">{error}</span> }.into_any()
            }
        })
    };

    view! {
        <tr class="data-table__row">
            <td>{model.name.clone()}</td>
            <td>{model.model_name.clone().unwrap_or_else(|| "-".to_owned())}</td>
            <td class="data-table__mono">{model.endpoint_url.clone()}</td>
            <td>
                <span class="badge" class:badge--inactive=!model.is_active>
                    {if model.is_active { "active" } else { "inactive" }}
                </span>
            </td>
            <td class="data-table__date">{model.updated_at.clone()}</td>
            <td>
                <button class="btn btn--small" on:click=move |_| on_health.run(id.clone())>
                    "Check"
                </button>
                {health_view}
            </td>
            <td class="data-table__actions">
                <button
                    class="btn btn--small"
                    on:click=move |_| editor.set(Some(ModelForm::from_model(&edit_model)))
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| pending_delete.set(Some(delete_model.clone()))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Add/edit dialog. The seed is copied into local signals once on mount so
/// typing never re-renders the page behind the dialog.
#[component]
fn ModelDialog(seed: ModelForm, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let is_edit = seed.id.is_some();
    let id = seed.id.clone();
    let name = RwSignal::new(seed.name.clone());
    let model_name = RwSignal::new(seed.model_name.clone());
    let endpoint_url = RwSignal::new(seed.endpoint_url.clone());
    let api_key = RwSignal::new(seed.api_key.clone());
    let metadata = RwSignal::new(seed.metadata.clone());
    let is_active = RwSignal::new(seed.is_active);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let form = ModelForm {
            id: id.clone(),
            name: name.get_untracked(),
            model_name: model_name.get_untracked(),
            endpoint_url: endpoint_url.get_untracked(),
            api_key: api_key.get_untracked(),
            metadata: metadata.get_untracked(),
            is_active: is_active.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                let saved = match &form.id {
                    Some(model_id) => match build_model_update(&form) {
                        Ok(update) => crate::net::api::update_model(model_id, &update)
                            .await
                            .map(|_| ())
                            .map_err(|e| e.to_string()),
                        Err(msg) => Err(msg),
                    },
                    None => match build_model_create(&form) {
                        Ok(create) => crate::net::api::create_model(&create)
                            .await
                            .map(|_| ())
                            .map_err(|e| e.to_string()),
                        Err(msg) => Err(msg),
                    },
                };
                busy.set(false);
                match saved {
                    Ok(()) => on_saved.run(()),
                    Err(msg) => error.set(msg),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, on_saved);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Model" } else { "Add Model" }}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Model name (sent to the endpoint)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. llama-3.1-8b"
                        prop:value=move || model_name.get()
                        on:input=move |ev| model_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Endpoint URL"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="https://host/v1"
                        prop:value=move || endpoint_url.get()
                        on:input=move |ev| endpoint_url.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    {if is_edit { "API key (blank keeps the stored key)" } else { "API key (optional)" }}
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || api_key.get()
                        on:input=move |ev| api_key.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Metadata (JSON, optional)"
                    <textarea
                        class="dialog__input dialog__textarea"
                        prop:value=move || metadata.get()
                        on:input=move |ev| metadata.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || is_edit>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |_| is_active.update(|v| *v = !*v)
                        />
                        "Active"
                    </label>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {if is_edit { "Save" } else { "Add" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
