//! Blocking confirmation dialog for destructive actions.
//!
//! DESIGN
//! ======
//! Every delete in the console goes through this dialog before any request is
//! issued; there is no optimistic removal to roll back.

use leptos::prelude::*;

/// Modal confirm prompt. `on_confirm` fires only from the explicit confirm
/// button; clicking the backdrop or Cancel runs `on_cancel`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(default = "Delete")] confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
