//! Application root: meta context, global UI state, and the router.
//!
//! ARCHITECTURE
//! ============
//! The app mounts client-side only. Dark mode is resolved once at startup
//! (stored preference, falling back to the OS setting), applied to the
//! document, and then shared through context so the header toggle and any
//! future consumer read the same signal.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::pages::signup::SignupPage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);
    provide_context(RwSignal::new(UiState { dark_mode: dark }));

    view! {
        <Title text="Onboard"/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
    }
}
