use super::*;

// =============================================================
// SignupForm
// =============================================================

#[test]
fn signup_form_default_is_empty() {
    let form = SignupForm::default();
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(!form.is_complete());
}

#[test]
fn signup_form_complete_requires_both_fields() {
    let mut form = SignupForm {
        email: "a@b.com".to_owned(),
        password: String::new(),
    };
    assert!(!form.is_complete());
    form.password = "x".to_owned();
    assert!(form.is_complete());
}

#[test]
fn signup_form_clear_resets_both_fields() {
    let mut form = SignupForm {
        email: "a@b.com".to_owned(),
        password: "Abcdefg1".to_owned(),
    };
    form.clear();
    assert_eq!(form, SignupForm::default());
}

// =============================================================
// PasswordChecks
// =============================================================

#[test]
fn password_checks_default_all_false() {
    let checks = PasswordChecks::default();
    assert!(!checks.min_length);
    assert!(!checks.has_uppercase);
    assert!(!checks.has_number_or_symbol);
    assert!(!checks.any_pass());
}

#[test]
fn evaluate_full_strength_password_passes_every_rule() {
    let checks = PasswordChecks::evaluate("Abcdefg1");
    assert!(checks.min_length);
    assert!(checks.has_uppercase);
    assert!(checks.has_number_or_symbol);
    assert!(checks.all_pass());
}

#[test]
fn evaluate_reports_rules_independently() {
    let checks = PasswordChecks::evaluate("abcdefgh");
    assert!(checks.min_length);
    assert!(!checks.has_uppercase);
    assert!(!checks.has_number_or_symbol);

    let checks = PasswordChecks::evaluate("A1");
    assert!(!checks.min_length);
    assert!(checks.has_uppercase);
    assert!(checks.has_number_or_symbol);
}

#[test]
fn all_pass_requires_every_rule() {
    let checks = PasswordChecks::evaluate("Abcdefgh");
    assert!(!checks.all_pass());
    assert!(checks.any_pass());
}

#[test]
fn evaluate_empty_password_fails_every_rule() {
    assert_eq!(PasswordChecks::evaluate(""), PasswordChecks::default());
}

// =============================================================
// Checklist transitions
// =============================================================

#[test]
fn password_input_shows_checklist_while_non_empty() {
    let mut checklist = Checklist::default();
    checklist.on_password_input("a");
    assert!(checklist.trigger);

    checklist.on_password_input("");
    assert!(!checklist.trigger);
}

#[test]
fn password_input_recomputes_checks() {
    let mut checklist = Checklist::default();
    checklist.on_password_input("Abcdefg1");
    assert!(checklist.checks.all_pass());

    checklist.on_password_input("a");
    assert!(!checklist.checks.any_pass());
}

#[test]
fn focus_always_shows_checklist() {
    let mut checklist = Checklist::default();
    checklist.on_password_focus();
    assert!(checklist.trigger);
}

#[test]
fn blur_with_text_present_changes_nothing() {
    let mut checklist = Checklist::default();
    checklist.on_password_input("Abcdefg1");
    checklist.on_password_blur("Abcdefg1");
    assert!(checklist.trigger);
    assert!(checklist.checks.all_pass());
}

#[test]
fn blur_on_emptied_field_keeps_checklist_while_any_rule_passes() {
    let mut checklist = Checklist {
        trigger: false,
        checks: PasswordChecks {
            min_length: false,
            has_uppercase: true,
            has_number_or_symbol: false,
        },
    };
    checklist.on_password_blur("");
    assert!(checklist.trigger);
}

#[test]
fn blur_on_emptied_field_hides_checklist_when_no_rule_passes() {
    let mut checklist = Checklist::default();
    checklist.on_password_focus();
    checklist.on_password_blur("");
    assert!(!checklist.trigger);
}

#[test]
fn reset_returns_to_default() {
    let mut checklist = Checklist::default();
    checklist.on_password_input("Abcdefg1");
    checklist.reset();
    assert_eq!(checklist, Checklist::default());
}

// =============================================================
// Submit gating
// =============================================================

fn filled_form() -> SignupForm {
    SignupForm {
        email: "a@b.com".to_owned(),
        password: "Abcdefg1".to_owned(),
    }
}

fn passing_checklist() -> Checklist {
    Checklist {
        trigger: true,
        checks: PasswordChecks::evaluate("Abcdefg1"),
    }
}

#[test]
fn submit_enabled_for_valid_credentials() {
    assert!(!submit_disabled(&filled_form(), &passing_checklist(), ""));
}

#[test]
fn submit_blocked_while_email_error_shown() {
    let mut form = filled_form();
    form.email = "abc.com".to_owned();
    let error = crate::util::validation::email_error(&form.email);
    assert!(submit_disabled(&form, &passing_checklist(), error));
}

#[test]
fn submit_blocked_while_any_check_fails() {
    let mut checklist = passing_checklist();
    checklist.checks.has_number_or_symbol = false;
    assert!(submit_disabled(&filled_form(), &checklist, ""));
}

#[test]
fn submit_blocked_while_either_field_empty() {
    let mut form = filled_form();
    form.email = String::new();
    assert!(submit_disabled(&form, &passing_checklist(), ""));

    let mut form = filled_form();
    form.password = String::new();
    assert!(submit_disabled(&form, &passing_checklist(), ""));
}

#[test]
fn submit_blocked_in_initial_state() {
    assert!(submit_disabled(&SignupForm::default(), &Checklist::default(), ""));
}
