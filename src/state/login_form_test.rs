use super::*;

fn filled_form(email: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::default();
    let _ = form.apply(LoginEvent::FieldChanged { field: Field::Email, value: email.to_owned() });
    let _ = form.apply(LoginEvent::FieldChanged { field: Field::Password, value: password.to_owned() });
    form
}

fn submit(form: &mut LoginForm) -> LoginEffect {
    form.apply(LoginEvent::SubmitPressed)
}

// =============================================================
// Validation gating
// =============================================================

#[test]
fn submit_with_empty_email_reports_field_error_and_makes_no_call() {
    let mut form = filled_form("", "secret1");
    assert_eq!(submit(&mut form), LoginEffect::None);
    assert_eq!(form.field_error(Field::Email), Some("Email is required"));
    assert!(!form.submitting());
}

#[test]
fn submit_with_malformed_email_reports_invalid_address() {
    let mut form = filled_form("not-an-email", "secret1");
    assert_eq!(submit(&mut form), LoginEffect::None);
    assert_eq!(form.field_error(Field::Email), Some("Invalid email address"));
}

#[test]
fn submit_with_short_password_reports_minimum_length() {
    let mut form = filled_form("a@b.com", "abc");
    assert_eq!(submit(&mut form), LoginEffect::None);
    assert_eq!(
        form.field_error(Field::Password),
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn field_error_is_hidden_until_the_field_is_touched() {
    let mut form = LoginForm::default();
    let _ = form.apply(LoginEvent::FieldChanged { field: Field::Email, value: "nope".to_owned() });
    assert_eq!(form.field_error(Field::Email), None);

    let _ = form.apply(LoginEvent::FieldBlurred { field: Field::Email });
    assert_eq!(form.field_error(Field::Email), Some("Invalid email address"));
}

#[test]
fn blur_validates_without_submitting() {
    let mut form = LoginForm::default();
    let effect = form.apply(LoginEvent::FieldBlurred { field: Field::Password });
    assert_eq!(effect, LoginEffect::None);
    assert_eq!(form.field_error(Field::Password), Some("Password is required"));
    assert!(!form.submitting());
}

#[test]
fn submit_trims_email_before_validation() {
    let mut form = filled_form("  a@b.com  ", "secret1");
    let effect = submit(&mut form);
    assert!(matches!(effect, LoginEffect::Authenticate { ref email, .. } if email == "a@b.com"));
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn valid_submit_requests_authentication() {
    let mut form = filled_form("a@b.com", "secret1");
    let effect = submit(&mut form);
    assert_eq!(
        effect,
        LoginEffect::Authenticate {
            attempt: 1,
            email: "a@b.com".to_owned(),
            password: "secret1".to_owned(),
        }
    );
    assert!(form.submitting());
}

#[test]
fn resolved_with_token_navigates_to_dashboard() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);

    let effect = form.apply(LoginEvent::CallResolved {
        attempt: 1,
        access_token: Some("tok123".to_owned()),
    });
    assert_eq!(effect, LoginEffect::GoToDashboard { token: "tok123".to_owned() });
    assert!(!form.submitting());
}

#[test]
fn resolved_without_token_reports_invalid_credentials() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);

    let effect = form.apply(LoginEvent::CallResolved { attempt: 1, access_token: None });
    assert_eq!(effect, LoginEffect::None);
    assert_eq!(form.general_error(), Some("Invalid login credentials."));
    assert!(!form.submitting());
}

#[test]
fn resolved_with_empty_token_reports_invalid_credentials() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);

    let effect = form.apply(LoginEvent::CallResolved {
        attempt: 1,
        access_token: Some(String::new()),
    });
    assert_eq!(effect, LoginEffect::None);
    assert_eq!(form.general_error(), Some("Invalid login credentials."));
}

#[test]
fn rejected_call_surfaces_server_message() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);

    let effect = form.apply(LoginEvent::CallRejected {
        attempt: 1,
        message: "Account locked".to_owned(),
    });
    assert_eq!(effect, LoginEffect::None);
    assert_eq!(form.general_error(), Some("Account locked"));
    assert!(!form.submitting());
}

#[test]
fn resubmit_after_failure_clears_general_error() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);
    let _ = form.apply(LoginEvent::CallRejected { attempt: 1, message: "Account locked".to_owned() });

    let effect = submit(&mut form);
    assert!(matches!(effect, LoginEffect::Authenticate { attempt: 2, .. }));
    assert_eq!(form.general_error(), None);
}

#[test]
fn invalid_resubmit_after_failure_keeps_general_error() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);
    let _ = form.apply(LoginEvent::CallRejected { attempt: 1, message: "Account locked".to_owned() });

    let _ = form.apply(LoginEvent::FieldChanged { field: Field::Password, value: "abc".to_owned() });
    assert_eq!(submit(&mut form), LoginEffect::None);
    assert_eq!(form.general_error(), Some("Account locked"));
}

// =============================================================
// Single-flight and stale settlements
// =============================================================

#[test]
fn duplicate_submit_while_in_flight_is_ignored() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);

    assert_eq!(submit(&mut form), LoginEffect::None);
    assert_eq!(form.attempt, 1);
    assert!(form.submitting());
}

#[test]
fn settlement_for_a_stale_attempt_is_dropped() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);

    let effect = form.apply(LoginEvent::CallResolved {
        attempt: 7,
        access_token: Some("tok".to_owned()),
    });
    assert_eq!(effect, LoginEffect::None);
    assert!(form.submitting());
}

#[test]
fn settlement_after_the_form_already_settled_is_dropped() {
    let mut form = filled_form("a@b.com", "secret1");
    let _ = submit(&mut form);
    let _ = form.apply(LoginEvent::CallRejected { attempt: 1, message: "boom".to_owned() });

    let effect = form.apply(LoginEvent::CallResolved {
        attempt: 1,
        access_token: Some("tok".to_owned()),
    });
    assert_eq!(effect, LoginEffect::None);
    assert_eq!(form.general_error(), Some("boom"));
}

// =============================================================
// Secure entry
// =============================================================

#[test]
fn secure_entry_defaults_to_masked() {
    assert!(LoginForm::default().secure_entry);
}

#[test]
fn toggling_secure_entry_twice_restores_masking_and_preserves_values() {
    let mut form = filled_form("a@b.com", "secret1");

    let _ = form.apply(LoginEvent::SecureEntryToggled);
    assert!(!form.secure_entry);
    let _ = form.apply(LoginEvent::SecureEntryToggled);
    assert!(form.secure_entry);

    assert_eq!(form.values.email, "a@b.com");
    assert_eq!(form.values.password, "secret1");
}
