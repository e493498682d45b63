//! Main content region of the dashboard shell.

use leptos::prelude::*;

/// Placeholder content region shown until real dashboard content exists.
#[component]
pub fn ContentPanel() -> impl IntoView {
    view! {
        <main class="content-panel">
            <div class="content-panel__empty">
                <h2 class="content-panel__title">"Nothing here yet"</h2>
                <p class="content-panel__copy">
                    "Create an account to start posting."
                </p>
                <a class="btn btn--primary btn--md" href="/signup">
                    "Get Started"
                </a>
            </div>
        </main>
    }
}
