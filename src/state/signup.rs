//! Signup form state and the transitions driven by input events.
//!
//! DESIGN
//! ======
//! The page owns these values in `RwSignal`s; everything here is a plain
//! struct with synchronous transitions so the whole controller is testable
//! without a DOM. Field edits recompute checklist state immediately; nothing
//! validates asynchronously.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::util::validation;

/// Raw field values for the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Both fields hold at least one character.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    /// Clear both fields, as on submit.
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

/// Outcome of the three password rules for the current password value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_number_or_symbol: bool,
}

impl PasswordChecks {
    /// Evaluate every rule against `password`.
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: validation::meets_min_length(password),
            has_uppercase: validation::has_uppercase(password),
            has_number_or_symbol: validation::has_number_or_symbol(password),
        }
    }

    pub fn all_pass(self) -> bool {
        self.min_length && self.has_uppercase && self.has_number_or_symbol
    }

    pub fn any_pass(self) -> bool {
        self.min_length || self.has_uppercase || self.has_number_or_symbol
    }
}

/// Checklist visibility plus the rule outcomes it displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checklist {
    /// Whether the checklist is rendered at all.
    pub trigger: bool,
    pub checks: PasswordChecks,
}

impl Checklist {
    /// Recompute the rules for an edited password; the checklist shows
    /// whenever the field is non-empty.
    pub fn on_password_input(&mut self, password: &str) {
        self.checks = PasswordChecks::evaluate(password);
        self.trigger = !password.is_empty();
    }

    /// Focusing the password field always reveals the checklist.
    pub fn on_password_focus(&mut self) {
        self.trigger = true;
    }

    /// Leaving an emptied password field keeps the checklist visible only
    /// while at least one rule outcome still reads true; leaving a non-empty
    /// field changes nothing.
    pub fn on_password_blur(&mut self, password: &str) {
        if !password.is_empty() {
            return;
        }
        self.trigger = self.checks.any_pass();
    }

    /// Hide the checklist and clear every rule outcome, as on submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submit stays blocked until every rule passes, the email error line is
/// clear, and both fields are filled.
pub fn submit_disabled(form: &SignupForm, checklist: &Checklist, email_error: &str) -> bool {
    !checklist.checks.all_pass() || !email_error.is_empty() || !form.is_complete()
}
