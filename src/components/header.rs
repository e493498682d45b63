//! Top bar displaying the brand mark, navigation, and the dark-mode toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component surfaces primary navigation controls that remain visible
//! across dashboard workflows.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Top header region of the dashboard shell.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <a href="/" class="header__brand">"Onboard"</a>
            <span class="header__divider" aria-hidden="true"></span>

            <nav class="header__nav">
                <a href="/" class="header__link">"Dashboard"</a>
                <a href="/signup" class="header__link">"Sign Up"</a>
            </nav>

            <span class="header__spacer"></span>

            <button
                class="btn header__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
