//! Shared button wrapper with size and color variants.
//!
//! DESIGN
//! ======
//! Centralizes button class assembly so call sites declare intent (primary,
//! large, submit) instead of repeating class strings.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

/// The HTML `type` rendered on the underlying `<button>` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
}

impl ButtonKind {
    pub fn type_attr(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
        }
    }
}

/// Visual size variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn modifier(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Visual color variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonColor {
    #[default]
    Primary,
    Neutral,
    Danger,
}

impl ButtonColor {
    fn modifier(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Neutral => "neutral",
            Self::Danger => "danger",
        }
    }
}

/// Assemble the BEM class list for a button variant.
pub fn button_class(size: ButtonSize, color: ButtonColor) -> String {
    format!("btn btn--{} btn--{}", color.modifier(), size.modifier())
}

/// A styled button. `disabled` accepts a reactive signal so callers can gate
/// submission on derived state.
#[component]
pub fn Button(
    #[prop(optional)] kind: ButtonKind,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(size, color);
    view! {
        <button
            class=class
            type=kind.type_attr()
            disabled=move || disabled.is_some_and(|d| d.get())
        >
            {children()}
        </button>
    }
}
