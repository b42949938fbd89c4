//! History page: paged past test runs with on-demand detail expansion.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::result_card::ResultCard;
use crate::net::types::{TestRun, TestRunSummary};
#[cfg(feature = "hydrate")]
use crate::util::lifecycle::AliveFlag;

const PAGE_LIMIT: u64 = 20;
const PREVIEW_CHARS: usize = 120;

/// Single-line preview of a user message, truncated on a char boundary.
pub(crate) fn message_preview(message: &str, max_chars: usize) -> String {
    let flattened: String = message
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let truncated: String = flattened.chars().take(max_chars).collect();
    format!("{}…", truncated.trim_end())
}

/// History page — summary rows, expandable detail, delete behind confirm.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let runs = RwSignal::new(Vec::<TestRunSummary>::new());
    let total = RwSignal::new(0_u64);
    let skip = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);
    let expanded = RwSignal::new(None::<TestRun>);
    let pending_delete = RwSignal::new(None::<TestRunSummary>);

    #[cfg(feature = "hydrate")]
    let alive = AliveFlag::new();

    let load = Callback::new(move |from: u64| {
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::list_test_runs(from, PAGE_LIMIT).await {
                    Ok(resp) => {
                        if alive.is_alive() {
                            runs.set(resp.items);
                            total.set(resp.total);
                            skip.set(resp.skip);
                        }
                    }
                    Err(err) => {
                        leptos::logging::error!("test run list fetch failed: {err}");
                        if alive.is_alive() {
                            runs.set(Vec::new());
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

    let on_expand = Callback::new(move |id: String| {
        if expanded.get_untracked().is_some_and(|run| run.id == id) {
            expanded.set(None);
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_test_run(&id).await {
                    Ok(run) => expanded.set(Some(run)),
                    Err(err) => leptos::logging::error!("test run fetch failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(summary) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_test_run(&summary.id).await {
                    Ok(()) => {
                        if expanded.get_untracked().is_some_and(|run| run.id == summary.id) {
                            expanded.set(None);
                        }
                        load.run(skip.get_untracked());
                    }
                    Err(err) => leptos::logging::error!("test run delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = summary;
        }
    });

    view! {
        <div class="history-page">
            <header class="page-header">
                <h2>"History"</h2>
                <p class="page-header__subtitle">"Past test runs"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading history..."</p> }
            >
                <Show
                    when=move || !runs.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="card empty-state">
                                <h3>"No test runs yet"</h3>
                                <p>"Run a test to see it here."</p>
                            </div>
                        }
                    }
                >
                    <div class="history-list">
                        {move || {
                            runs.get()
                                .into_iter()
                                .map(|summary| {
                                    view! {
                                        <HistoryRow
                                            summary=summary
                                            expanded=expanded
                                            on_expand=on_expand
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

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Test Run"
                    message="This will permanently delete the run and its results."
                    on_confirm=on_delete_confirm
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}

/// One history row; expanding fetches the full run and renders its results.
#[component]
fn HistoryRow(
    summary: TestRunSummary,
    expanded: RwSignal<Option<TestRun>>,
    on_expand: Callback<String>,
    pending_delete: RwSignal<Option<TestRunSummary>>,
) -> impl IntoView {
    let expand_id = summary.id.clone();
    let row_id = summary.id.clone();
    let delete_summary = summary.clone();
    let is_expanded = Signal::derive(move || {
        expanded.get().is_some_and(|run| run.id == row_id)
    });

    view! {
        <div class="card history-row">
            <div class="history-row__summary" on:click=move |_| on_expand.run(expand_id.clone())>
                <span class="history-row__message">
                    {message_preview(&summary.user_message, PREVIEW_CHARS)}
                </span>
                <span class="history-row__meta">
                    {format!("{} models", summary.result_count)}
                </span>
                <span class="history-row__date">{summary.created_at.clone()}</span>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        pending_delete.set(Some(delete_summary.clone()));
                    }
                >
                    "Delete"
                </button>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="history-row__detail">
                    {move || {
                        expanded
                            .get()
                            .map(|run| {
                                let system = run.system_prompt.unwrap_or_default();
                                let system_line = (!system.is_empty()).then(|| {
                                    view! {
                                        <p class="history-row__system">
                                            {format!("System: {system}")}
                                        </p>
                                    }
                                });
                                view! {
                                    {system_line}
                                    <div class="results__grid">
                                        {run
                                            .results
                                            .into_iter()
                                            .map(|result| view! { <ResultCard result=result /> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>
        </div>
    }
}
