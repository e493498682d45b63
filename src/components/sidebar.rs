//! Vertical navigation rail for the dashboard shell.
//!
//! DESIGN
//! ======
//! Navigation entries live in a const table so the rail stays a stateless
//! render of data, not a collection of hand-wired links.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy)]
struct NavDef {
    label: &'static str,
    href: &'static str,
    disabled: bool,
}

const NAV_ITEMS: &[NavDef] = &[
    NavDef { label: "Home", href: "/", disabled: false },
    NavDef { label: "Sign Up", href: "/signup", disabled: false },
    NavDef { label: "Posts", href: "#", disabled: true },
    NavDef { label: "Settings", href: "#", disabled: true },
];

fn nav_title(label: &str, disabled: bool) -> String {
    if disabled {
        format!("{label} (coming soon)")
    } else {
        label.to_owned()
    }
}

/// Left sidebar region of the dashboard shell.
#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    let entries = NAV_ITEMS
        .iter()
        .map(|def| {
            let def = *def;
            let title = nav_title(def.label, def.disabled);
            let is_active = move || pathname.get() == def.href;

            view! {
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=is_active
                    class:sidebar__link--disabled=move || def.disabled
                    href=def.href
                    title=title
                >
                    {render_icon(def.label)}
                    <span class="sidebar__label">{def.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="sidebar">
            <nav class="sidebar__nav">{entries}</nav>
        </aside>
    }
}

fn render_icon(label: &'static str) -> impl IntoView {
    match label {
        "Home" => view! {
            <svg class="sidebar__icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 9.5 L10 3 L17 9.5" />
                <path d="M5.5 8.5 V16 H14.5 V8.5" />
            </svg>
        }
        .into_any(),
        "Sign Up" => view! {
            <svg class="sidebar__icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="8" cy="7" r="3" />
                <path d="M3 17 C3 13.5 5.2 12 8 12 C10.8 12 13 13.5 13 17" />
                <line x1="15" y1="8" x2="15" y2="14" />
                <line x1="12" y1="11" x2="18" y2="11" />
            </svg>
        }
        .into_any(),
        "Posts" => view! {
            <svg class="sidebar__icon" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="3" y="3" width="14" height="14" />
                <line x1="6" y1="7" x2="14" y2="7" />
                <line x1="6" y1="10" x2="14" y2="10" />
                <line x1="6" y1="13" x2="11" y2="13" />
            </svg>
        }
        .into_any(),
        _ => view! {
            <svg class="sidebar__icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="3" />
                <path d="M10 3 V5 M10 15 V17 M3 10 H5 M15 10 H17 M5 5 L6.5 6.5 M13.5 13.5 L15 15 M15 5 L13.5 6.5 M6.5 13.5 L5 15" />
            </svg>
        }
        .into_any(),
    }
}
