//! Dark Mode Toggle
//!
//! Flips the `dark-mode` class on `<body>`; styling does the rest.

use leptos::prelude::*;

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let toggle = move |_| {
        if let Some(body) = document().body() {
            if let Err(err) = body.class_list().toggle("dark-mode") {
                tracing::warn!(error = ?err, "failed to toggle dark mode");
            }
        }
    };

    view! {
        <label class="dark-mode-toggle">
            <input type="checkbox" id="toggle-dark-mode" on:click=toggle />
            "Dark Mode"
        </label>
    }
}
