//! Signup field validation rules.
//!
//! DESIGN
//! ======
//! Every rule is a pure predicate over the raw field value so pages can
//! recompute checklist and error state synchronously on each input event.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum password length accepted by the length rule.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Punctuation characters that satisfy the number-or-symbol rule.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Inline message shown while the email field fails [`is_plausible_email`].
pub const INVALID_EMAIL_MESSAGE: &str = "Not a valid Email!";

/// An email is considered plausible once it contains an `@`; no further
/// shape checks run.
pub fn is_plausible_email(value: &str) -> bool {
    value.contains('@')
}

/// The email error line for `value`: the fixed message while the value has
/// no `@`, empty otherwise.
pub fn email_error(value: &str) -> &'static str {
    if is_plausible_email(value) {
        ""
    } else {
        INVALID_EMAIL_MESSAGE
    }
}

/// Length rule: at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Uppercase rule: at least one `A`-`Z` character.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Number-or-symbol rule: at least one ASCII digit or one character from
/// [`PASSWORD_SYMBOLS`].
pub fn has_number_or_symbol(password: &str) -> bool {
    password
        .chars()
        .any(|c| c.is_ascii_digit() || PASSWORD_SYMBOLS.contains(c))
}
