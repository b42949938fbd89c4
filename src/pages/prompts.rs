//! Prompts page: versioned template CRUD, favorites, history, rollback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Prompts paginate with `skip`/`limit`. Version numbers are server-owned:
//! edits bump them remotely and a rollback posts the chosen number back, then
//! refreshes the list to pick up the server's new state.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Prompt, PromptCreate, PromptUpdate, PromptVersion};
#[cfg(feature = "hydrate")]
use crate::util::lifecycle::AliveFlag;

const PAGE_LIMIT: u64 = 20;

/// Form state seeding the create/edit dialog. `id` is `None` for a new prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PromptForm {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub content: String,
    /// Comma-separated in the form; split on submit.
    pub tags: String,
}

impl PromptForm {
    fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            id: Some(prompt.id.clone()),
            name: prompt.name.clone(),
            description: prompt.description.clone().unwrap_or_default(),
            content: prompt.content.clone(),
            tags: prompt.tags.join(", "),
        }
    }
}

/// Split a comma-separated tag field, trimming and dropping empties.
pub(crate) fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn none_if_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Validate the form into a creation payload.
pub(crate) fn build_prompt_create(form: &PromptForm) -> Result<PromptCreate, String> {
    if form.name.trim().is_empty() {
        return Err("Name is required".to_owned());
    }
    if form.content.trim().is_empty() {
        return Err("Content is required".to_owned());
    }
    let tags = parse_tags(&form.tags);
    Ok(PromptCreate {
        name: form.name.trim().to_owned(),
        description: none_if_empty(&form.description),
        content: form.content.clone(),
        tags: if tags.is_empty() { None } else { Some(tags) },
    })
}

/// Validate the form into an update payload. Tags always travel (an empty
/// list clears them); content travels so the server can version it.
pub(crate) fn build_prompt_update(form: &PromptForm) -> Result<PromptUpdate, String> {
    if form.name.trim().is_empty() {
        return Err("Name is required".to_owned());
    }
    if form.content.trim().is_empty() {
        return Err("Content is required".to_owned());
    }
    Ok(PromptUpdate {
        name: Some(form.name.trim().to_owned()),
        description: none_if_empty(&form.description),
        content: Some(form.content.clone()),
        tags: Some(parse_tags(&form.tags)),
    })
}

/// Prompts page — filterable list, editor dialog, version history, delete.
#[component]
pub fn PromptsPage() -> impl IntoView {
    let prompts = RwSignal::new(Vec::<Prompt>::new());
    let total = RwSignal::new(0_u64);
    let skip = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);
    let tag_filter = RwSignal::new(String::new());
    let favorites_only = RwSignal::new(false);
    let editor = RwSignal::new(None::<PromptForm>);
    let versions_of = RwSignal::new(None::<(Prompt, Vec<PromptVersion>)>);
    let pending_delete = RwSignal::new(None::<Prompt>);

    #[cfg(feature = "hydrate")]
    let alive = AliveFlag::new();

    let load = Callback::new(move |from: u64| {
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let tag = tag_filter.get_untracked();
                let tag = none_if_empty(&tag);
                let result = crate::net::api::list_prompts(
                    from,
                    PAGE_LIMIT,
                    favorites_only.get_untracked(),
                    tag.as_deref(),
                )
                .await;
                match result {
                    Ok(resp) => {
                        if alive.is_alive() {
                            prompts.set(resp.items);
                            total.set(resp.total);
                            skip.set(resp.skip);
                        }
                    }
                    Err(err) => {
                        leptos::logging::error!("prompt list fetch failed: {err}");
                        if alive.is_alive() {
                            prompts.set(Vec::new());
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
            let _ = from;
        }
    });

    load.run(0);
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.kill());
    }

    let on_favorite = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::toggle_prompt_favorite(&id).await {
                    Ok(updated) => {
                        prompts.update(|items| {
                            if let Some(slot) = items.iter_mut().find(|p| p.id == updated.id) {
                                *slot = updated;
                            }
                        });
                    }
                    Err(err) => leptos::logging::error!("favorite toggle failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_versions = Callback::new(move |prompt: Prompt| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::list_prompt_versions(&prompt.id).await {
                    Ok(versions) => versions_of.set(Some((prompt, versions))),
                    Err(err) => leptos::logging::error!("version list fetch failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = prompt;
        }
    });

    let on_rollback = Callback::new(move |(id, version_number): (String, u32)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::rollback_prompt(&id, version_number).await {
                    Ok(_) => {
                        versions_of.set(None);
                        load.run(skip.get_untracked());
                    }
                    Err(err) => leptos::logging::error!("rollback failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, version_number);
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(prompt) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_prompt(&prompt.id).await {
                    Ok(()) => load.run(skip.get_untracked()),
                    Err(err) => leptos::logging::error!("prompt delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = prompt;
        }
    });

    let on_saved = Callback::new(move |()| {
        editor.set(None);
        load.run(skip.get_untracked());
    });

    view! {
        <div class="prompts-page">
            <header class="page-header">
                <h2>"Prompts"</h2>
                <p class="page-header__subtitle">"Versioned system prompt templates"</p>
                <button class="btn btn--primary" on:click=move |_| editor.set(Some(PromptForm::default()))>
                    "+ New Prompt"
                </button>
            </header>

            <div class="filter-bar">
                <input
                    class="filter-bar__input"
                    type="text"
                    placeholder="Filter by tag"
                    prop:value=move || tag_filter.get()
                    on:input=move |ev| tag_filter.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            load.run(0);
                        }
                    }
                />
                <label class="filter-bar__check">
                    <input
                        type="checkbox"
                        prop:checked=move || favorites_only.get()
                        on:change=move |_| {
                            favorites_only.update(|v| *v = !*v);
                            load.run(0);
                        }
                    />
                    "Favorites only"
                </label>
                <button class="btn" on:click=move |_| load.run(0)>
                    "Apply"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading prompts..."</p> }
            >
                <Show
                    when=move || !prompts.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="card empty-state">
                                <h3>"No prompts"</h3>
                                <p>"Create a template to reuse across test runs."</p>
                            </div>
                        }
                    }
                >
                    <div class="prompt-list">
                        {move || {
                            prompts
                                .get()
                                .into_iter()
                                .map(|prompt| {
                                    view! {
                                        <PromptCard
                                            prompt=prompt
                                            on_favorite=on_favorite
                                            on_versions=on_versions
                                            editor=editor
                                            pending_delete=pending_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <div class="pager">
                <button
                    class="btn"
                    disabled=move || skip.get() == 0
                    on:click=move |_| load.run(skip.get_untracked().saturating_sub(PAGE_LIMIT))
                >
                    "Previous"
                </button>
                <button
                    class="btn"
                    disabled=move || skip.get() + PAGE_LIMIT >= total.get()
                    on:click=move |_| load.run(skip.get_untracked() + PAGE_LIMIT)
                >
                    "Next"
                </button>
            </div>

            <Show when=move || editor.get().is_some()>
                <PromptDialog
                    seed=editor.get_untracked().unwrap_or_default()
                    on_cancel=Callback::new(move |()| editor.set(None))
                    on_saved=on_saved
                />
            </Show>

            <Show when=move || versions_of.get().is_some()>
                <VersionsDialog
                    versions_of=versions_of
                    on_rollback=on_rollback
                />
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Prompt"
                    message=format!(
                        "This will permanently delete \"{}\" and its version history.",
                        pending_delete.get_untracked().map(|p| p.name).unwrap_or_default()
                    )
                    on_confirm=on_delete_confirm
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}

/// One prompt list card with favorite, versions, edit, and delete actions.
#[component]
fn PromptCard(
    prompt: Prompt,
    on_favorite: Callback<String>,
    on_versions: Callback<Prompt>,
    editor: RwSignal<Option<PromptForm>>,
    pending_delete: RwSignal<Option<Prompt>>,
) -> impl IntoView {
    let favorite_id = prompt.id.clone();
    let versions_prompt = prompt.clone();
    let edit_prompt = prompt.clone();
    let delete_prompt = prompt.clone();
    let is_favorite = prompt.is_favorite;
    let tags = prompt.tags.clone();

    view! {
        <div class="card prompt-card">
            <header class="prompt-card__header">
                <button
                    class="prompt-card__star"
                    class:prompt-card__star--on=is_favorite
                    title="Toggle favorite"
                    on:click=move |_| on_favorite.run(favorite_id.clone())
                >
                    {if is_favorite { "★" } else { "☆" }}
                </button>
                <span class="prompt-card__name">{prompt.name.clone()}</span>
                <span class="prompt-card__version">{format!("v{}", prompt.current_version)}</span>
            </header>
            <p class="prompt-card__description">
                {prompt.description.clone().unwrap_or_default()}
            </p>
            <div class="prompt-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="prompt-card__actions">
                <button class="btn btn--small" on:click=move |_| on_versions.run(versions_prompt.clone())>
                    "Versions"
                </button>
                <button
                    class="btn btn--small"
                    on:click=move |_| editor.set(Some(PromptForm::from_prompt(&edit_prompt)))
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| pending_delete.set(Some(delete_prompt.clone()))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Create/edit dialog; content edits create a new version server-side.
#[component]
fn PromptDialog(seed: PromptForm, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let is_edit = seed.id.is_some();
    let id = seed.id.clone();
    let name = RwSignal::new(seed.name.clone());
    let description = RwSignal::new(seed.description.clone());
    let content = RwSignal::new(seed.content.clone());
    let tags = RwSignal::new(seed.tags.clone());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let form = PromptForm {
            id: id.clone(),
            name: name.get_untracked(),
            description: description.get_untracked(),
            content: content.get_untracked(),
            tags: tags.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                let saved = match &form.id {
                    Some(prompt_id) => match build_prompt_update(&form) {
                        Ok(update) => crate::net::api::update_prompt(prompt_id, &update)
                            .await
                            .map(|_| ())
                            .map_err(|e| e.to_string()),
                        Err(msg) => Err(msg),
                    },
                    None => match build_prompt_create(&form) {
                        Ok(create) => crate::net::api::create_prompt(&create)
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
                <h2>{if is_edit { "Edit Prompt" } else { "New Prompt" }}</h2>
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
                    "Description (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__input dialog__textarea dialog__textarea--tall"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Tags (comma separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="summarization, production"
                        prop:value=move || tags.get()
                        on:input=move |ev| tags.set(event_target_value(&ev))
                    />
                </label>
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
                        {if is_edit { "Save" } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Version history dialog with per-version rollback.
#[component]
fn VersionsDialog(
    versions_of: RwSignal<Option<(Prompt, Vec<PromptVersion>)>>,
    on_rollback: Callback<(String, u32)>,
) -> impl IntoView {
    let close = Callback::new(move |()| versions_of.set(None));
    let Some((prompt, versions)) = versions_of.get_untracked() else {
        return view! { <div class="dialog-backdrop"></div> }.into_any();
    };
    let current_version = prompt.current_version;
    let prompt_id = prompt.id.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Versions of {}", prompt.name)}</h2>
                <div class="version-list">
                    {versions
                        .into_iter()
                        .map(|version| {
                            let id = prompt_id.clone();
                            let number = version.version_number;
                            let is_current = number == current_version;
                            view! {
                                <div class="version-list__row" class:version-list__row--current=is_current>
                                    <span class="version-list__number">{format!("v{number}")}</span>
                                    <pre class="version-list__content">{version.content.clone()}</pre>
                                    <span class="version-list__date">{version.created_at.clone()}</span>
                                    <Show when=move || !is_current>
                                        <button
                                            class="btn btn--small"
                                            on:click={
                                                let id = id.clone();
                                                move |_| on_rollback.run((id.clone(), number))
                                            }
                                        >
                                            "Rollback"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
    .into_any()
}
