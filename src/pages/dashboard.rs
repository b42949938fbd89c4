//! Dashboard page with aggregate counts across the three resources.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It issues the three list requests
//! concurrently, joins on all of them, and renders aggregate counts; a failed
//! fetch logs and leaves the zeros in place.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{ModelListResponse, PromptListResponse, TestRunListResponse};
#[cfg(feature = "hydrate")]
use crate::util::lifecycle::AliveFlag;

/// Aggregate counts shown on the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DashboardCounts {
    pub active_models: u64,
    pub prompt_count: u64,
    pub tests_today: u64,
    pub total_tests: u64,
}

/// Combine the three joined list responses into card counts. `today` is the
/// local calendar date as a `YYYY-MM-DD` prefix.
pub(crate) fn aggregate_counts(
    models: &ModelListResponse,
    prompts: &PromptListResponse,
    runs: &TestRunListResponse,
    today: &str,
) -> DashboardCounts {
    let tests_today = runs
        .items
        .iter()
        .filter(|run| date_prefix(&run.created_at) == today)
        .count() as u64;
    DashboardCounts {
        active_models: models.total,
        prompt_count: prompts.total,
        tests_today,
        total_tests: runs.total,
    }
}

/// `YYYY-MM-DD` prefix of an ISO 8601 timestamp.
pub(crate) fn date_prefix(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

#[cfg(feature = "hydrate")]
fn today_local() -> String {
    let iso = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();
    date_prefix(&iso).to_owned()
}

/// Dashboard page — four count cards plus a quick-start checklist.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let counts = RwSignal::new(DashboardCounts::default());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let alive = AliveFlag::new();
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            // Models are listed active-only, so the echoed total is the
            // active endpoint count.
            let (models, prompts, runs) = futures::join!(
                crate::net::api::list_models(1, 1, true),
                crate::net::api::list_prompts(0, 1, false, None),
                crate::net::api::list_test_runs(0, 50),
            );
            if !alive_task.is_alive() {
                return;
            }
            match (models, prompts, runs) {
                (Ok(models), Ok(prompts), Ok(runs)) => {
                    counts.set(aggregate_counts(&models, &prompts, &runs, &today_local()));
                }
                (models, prompts, runs) => {
                    for err in [models.err(), prompts.err(), runs.err()].into_iter().flatten() {
                        leptos::logging::error!("dashboard fetch failed: {err}");
                    }
                }
            }
            loading.set(false);
        });
        on_cleanup(move || alive.kill());
    }

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h2>"Dashboard"</h2>
                <p class="page-header__subtitle">"Welcome to Modelarena"</p>
            </header>

            <div class="stat-grid" class:stat-grid--loading=move || loading.get()>
                <StatCard
                    label="Active Models"
                    hint="Registered LLM endpoints"
                    value=Signal::derive(move || counts.get().active_models)
                />
                <StatCard
                    label="Prompt Templates"
                    hint="Saved prompts"
                    value=Signal::derive(move || counts.get().prompt_count)
                />
                <StatCard
                    label="Tests Today"
                    hint="Executed today"
                    value=Signal::derive(move || counts.get().tests_today)
                />
                <StatCard
                    label="Total Tests"
                    hint="All time"
                    value=Signal::derive(move || counts.get().total_tests)
                />
            </div>

            <section class="card quick-start">
                <h3>"Quick Start"</h3>
                <ol class="quick-start__steps">
                    <li>"Add your LLM model endpoints in the Models section"</li>
                    <li>"Create or select a system prompt template"</li>
                    <li>"Run a test to compare model responses"</li>
                    <li>"View test history and analyze results"</li>
                </ol>
            </section>
        </div>
    }
}

/// One aggregate count card.
#[component]
fn StatCard(
    label: &'static str,
    hint: &'static str,
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__hint">{hint}</span>
        </div>
    }
}
