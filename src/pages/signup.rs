//! Signup page with inline email validation and a password rule checklist.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every keystroke updates local state and recomputes derived validation
//! flags synchronously; the page performs no I/O. Submit clears the form and
//! suppresses the browser's default navigation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonColor, ButtonKind, ButtonSize};
use crate::components::password_checklist::PasswordChecklist;
use crate::state::signup::{Checklist, SignupForm, submit_disabled};
use crate::util::validation;

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let checklist = RwSignal::new(Checklist::default());
    let error = RwSignal::new(String::new());

    let on_email_input = move |ev| {
        let value = event_target_value(&ev);
        error.set(validation::email_error(&value).to_owned());
        form.update(|f| f.email = value);
    };

    let on_password_input = move |ev| {
        let value = event_target_value(&ev);
        checklist.update(|c| c.on_password_input(&value));
        form.update(|f| f.password = value);
    };

    let on_password_focus = move |_| {
        checklist.update(Checklist::on_password_focus);
    };

    let on_password_blur = move |_| {
        let password = form.get().password;
        checklist.update(|c| c.on_password_blur(&password));
    };

    let block_spaces = move |ev: leptos::ev::KeyboardEvent| {
        if is_blocked_key(&ev.key()) {
            ev.prevent_default();
        }
    };

    let submit_blocked =
        Signal::derive(move || submit_disabled(&form.get(), &checklist.get(), &error.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        log::debug!("signup form submitted; clearing state");
        form.update(SignupForm::clear);
        checklist.update(Checklist::reset);
    };

    view! {
        <div class="signup-page">
            <form class="signup-form" on:submit=on_submit>
                <h1 class="signup-form__title">"Let's get your account set up"</h1>

                <div class="signup-form__fields">
                    <div class="signup-form__field">
                        <label class="signup-form__label" for="email">
                            "Email"
                        </label>
                        <input
                            class="signup-form__input"
                            type="email"
                            id="email"
                            name="email"
                            placeholder="john.doe@company.com"
                            prop:value=move || form.get().email
                            on:keydown=block_spaces
                            on:input=on_email_input
                            required=true
                        />
                        <p class="signup-form__error">{move || error.get()}</p>
                    </div>

                    <div class="signup-form__field">
                        <label class="signup-form__label" for="password">
                            "Create a Password"
                        </label>
                        <input
                            class="signup-form__input"
                            type="password"
                            id="password"
                            name="password"
                            placeholder="•••••••••"
                            prop:value=move || form.get().password
                            on:keydown=block_spaces
                            on:input=on_password_input
                            on:focus=on_password_focus
                            on:blur=on_password_blur
                            required=true
                        />
                    </div>

                    <Show when=move || checklist.get().trigger>
                        <PasswordChecklist checklist=checklist/>
                    </Show>

                    <Button
                        kind=ButtonKind::Submit
                        size=ButtonSize::Lg
                        color=ButtonColor::Primary
                        disabled=submit_blocked
                    >
                        "Sign Up"
                    </Button>
                </div>

                <div class="signup-form__footer">
                    <p class="signup-form__terms">
                        "By proceeding, you agree to "
                        <a class="signup-form__terms-link">"Our Terms of Service"</a>
                    </p>
                    <hr class="signup-form__rule"/>
                    <p class="signup-form__login">
                        "Already have an account? "
                        <a class="signup-form__login-link">"Log in instead"</a>
                    </p>
                </div>
            </form>
        </div>
    }
}

/// Keys suppressed in both signup inputs before they reach the value.
fn is_blocked_key(key: &str) -> bool {
    key == " "
}
