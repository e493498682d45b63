//! Password rule checklist shown beneath the password field.
//!
//! SYSTEM CONTEXT
//! ==============
//! Weak passwords are communicated through this checklist rather than error
//! text; the page toggles its visibility via `Checklist::trigger`.

#[cfg(test)]
#[path = "password_checklist_test.rs"]
mod password_checklist_test;

use leptos::prelude::*;

use crate::state::signup::{Checklist, PasswordChecks};

const RULE_LABELS: [&str; 3] = [
    "At least 8 characters long",
    "Contains 1 uppercase character",
    "Contains 1 number or symbol",
];

/// Rule outcomes paired with their display labels, in render order.
pub fn checklist_rows(checks: PasswordChecks) -> [(bool, &'static str); 3] {
    [
        (checks.min_length, RULE_LABELS[0]),
        (checks.has_uppercase, RULE_LABELS[1]),
        (checks.has_number_or_symbol, RULE_LABELS[2]),
    ]
}

/// Read-only checkbox rows reflecting the current rule outcomes.
#[component]
pub fn PasswordChecklist(checklist: RwSignal<Checklist>) -> impl IntoView {
    view! {
        <div class="password-checklist">
            {move || {
                checklist_rows(checklist.get().checks)
                    .into_iter()
                    .map(|(passed, label)| {
                        view! {
                            <label class="password-checklist__row">
                                <input
                                    class="password-checklist__box"
                                    type="checkbox"
                                    prop:checked=passed
                                    disabled=true
                                />
                                <span class="password-checklist__label">{label}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
