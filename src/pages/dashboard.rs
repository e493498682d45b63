//! Dashboard page: static shell of header, sidebar, and content regions.

use leptos::prelude::*;

use crate::components::content_panel::ContentPanel;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <Header/>
            <Sidebar/>
            <ContentPanel/>
        </div>
    }
}
