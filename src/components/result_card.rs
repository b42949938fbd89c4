//! Per-model result card shared by the test page and history detail.
//!
//! DESIGN
//! ======
//! Latency and token counts are server-measured and rendered verbatim; the
//! card never derives or corrects them.

#[cfg(test)]
#[path = "result_card_test.rs"]
mod result_card_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::types::TestResult;

/// One model's outcome within a test run.
#[component]
pub fn ResultCard(result: TestResult) -> impl IntoView {
    let is_error = result.error.is_some();
    let params = params_summary(&result.parameters);
    let meta = result_meta(result.latency_ms, result.token_count);
    let body = match (result.error.clone(), result.response.clone()) {
        (Some(error), _) => view! { <p class="result-card__error">{error}</p> }.into_any(),
        (None, Some(response)) => {
            view! { <pre class="result-card__response">{response}</pre> }.into_any()
        }
        (None, None) => view! { <p class="result-card__empty">"No response"</p> }.into_any(),
    };

    view! {
        <div class="result-card" class:result-card--error=is_error>
            <header class="result-card__header">
                <span class="result-card__model">{result.model_name.clone()}</span>
                <span class="result-card__params">{params}</span>
            </header>
            {body}
            <footer class="result-card__meta">{meta}</footer>
        </div>
    }
}

/// Render the echoed sampling parameters, in a stable order.
pub(crate) fn params_summary(parameters: &Value) -> String {
    let mut parts = Vec::new();
    for key in ["temperature", "max_tokens", "top_p"] {
        if let Some(value) = parameters.get(key) {
            parts.push(format!("{key} {value}"));
        }
    }
    if parts.is_empty() {
        "default parameters".to_owned()
    } else {
        parts.join(", ")
    }
}

/// Footer line with server-measured latency and token usage.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn result_meta(latency_ms: Option<f64>, token_count: Option<i64>) -> String {
    let latency = latency_ms.map_or_else(|| "latency n/a".to_owned(), |ms| {
        format!("{} ms", ms.round() as i64)
    });
    let tokens = token_count.map_or_else(|| "tokens n/a".to_owned(), |count| {
        format!("{count} tokens")
    });
    format!("{latency}, {tokens}")
}
