//! Settings Modal
//!
//! Accent color and background image.

use leptos::prelude::*;

use crate::components::ModalShell;
use crate::context::use_app_context;
use crate::preferences::{self, BrowserStore, Theme, DEFAULT_ACCENT};

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ctx = use_app_context();

    let stored = Theme::load(&BrowserStore);
    let (accent, set_accent) = signal(stored.accent_color.unwrap_or_else(|| DEFAULT_ACCENT.to_string()));
    let (background, set_background) = signal(stored.background_image.unwrap_or_default());

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let theme = Theme::new(&accent.get_untracked(), &background.get_untracked());
        theme.apply();
        theme.save(&BrowserStore);
        tracing::info!(accent = ?theme.accent_color, "theme saved");
        ctx.close();
    };

    let reset = move |_| {
        if gloo::dialogs::confirm("Restore the default theme? The page will reload.") {
            preferences::reset_and_reload(&BrowserStore);
        }
    };

    view! {
        <ModalShell title="Settings">
            <form class="modal-form" on:submit=save>
                <label>
                    "Accent color"
                    <input
                        type="color"
                        prop:value=move || accent.get()
                        on:input=move |ev| set_accent.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Background image URL"
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || background.get()
                        on:input=move |ev| set_background.set(event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="button" class="btn-danger" on:click=reset>"Reset theme"</button>
                    <button type="submit" class="btn-primary">"Save"</button>
                </div>
            </form>
        </ModalShell>
    }
}
