//! Modal Shell
//!
//! Backdrop + dialog frame shared by every modal. Clicking the backdrop closes it.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ModalShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="modal" on:click=move |_| ctx.close()>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="close-btn" on:click=move |_| ctx.close()>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Validation or save error line under a form
#[component]
pub fn FormErrorLine(error: ReadSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })
}
