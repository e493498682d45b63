use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn is_plausible_email_requires_at_sign() {
    assert!(is_plausible_email("a@b.com"));
    assert!(is_plausible_email("@"));
    assert!(!is_plausible_email("abc.com"));
    assert!(!is_plausible_email(""));
}

#[test]
fn email_error_is_fixed_message_without_at_sign() {
    assert_eq!(email_error("abc.com"), INVALID_EMAIL_MESSAGE);
    assert_eq!(email_error(""), INVALID_EMAIL_MESSAGE);
}

#[test]
fn email_error_clears_once_at_sign_present() {
    assert_eq!(email_error("a@b.com"), "");
    assert_eq!(email_error("john.doe@company.com"), "");
}

// =============================================================
// Length rule
// =============================================================

#[test]
fn meets_min_length_boundary_at_eight() {
    assert!(!meets_min_length("Abcdef1"));
    assert!(meets_min_length("Abcdefg1"));
    assert!(meets_min_length("Abcdefgh1"));
}

#[test]
fn meets_min_length_counts_characters_not_bytes() {
    // Seven multibyte characters plus one ASCII digit.
    assert!(meets_min_length("àéîöûçñ1"));
    assert!(!meets_min_length("àéîöûçñ"));
}

#[test]
fn meets_min_length_rejects_empty() {
    assert!(!meets_min_length(""));
}

// =============================================================
// Uppercase rule
// =============================================================

#[test]
fn has_uppercase_detects_any_ascii_capital() {
    assert!(has_uppercase("abcDefg"));
    assert!(has_uppercase("Z"));
    assert!(!has_uppercase("abcdefg1!"));
    assert!(!has_uppercase(""));
}

#[test]
fn has_uppercase_ignores_non_ascii_capitals() {
    assert!(!has_uppercase("ÉÀÇÜ"));
}

// =============================================================
// Number-or-symbol rule
// =============================================================

#[test]
fn has_number_or_symbol_accepts_digits() {
    assert!(has_number_or_symbol("abc1"));
    assert!(has_number_or_symbol("0"));
}

#[test]
fn has_number_or_symbol_accepts_each_listed_symbol() {
    for symbol in PASSWORD_SYMBOLS.chars() {
        let password = format!("abc{symbol}");
        assert!(has_number_or_symbol(&password), "symbol {symbol:?} should pass");
    }
}

#[test]
fn has_number_or_symbol_rejects_letters_and_unlisted_marks() {
    assert!(!has_number_or_symbol("abcdefG"));
    assert!(!has_number_or_symbol("abc-def_g"));
    assert!(!has_number_or_symbol(""));
}
