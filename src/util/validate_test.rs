use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_is_required() {
    assert_eq!(validate_email(""), Some("Email is required"));
    assert_eq!(validate_email("   "), Some("Email is required"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for input in ["not-an-email", "a@b", "a@.com", "@b.com", "a@b.", "a b@c.com", "a@b@c.com"] {
        assert_eq!(validate_email(input), Some("Invalid email address"), "input: {input}");
    }
}

#[test]
fn email_accepts_typical_addresses() {
    for input in ["a@b.com", "user.name+tag@example.co.uk", "  padded@example.com  "] {
        assert_eq!(validate_email(input), None, "input: {input}");
    }
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_is_required() {
    assert_eq!(validate_password(""), Some("Password is required"));
}

#[test]
fn password_enforces_minimum_length() {
    assert_eq!(validate_password("abc"), Some("Password must be at least 6 characters"));
    assert_eq!(validate_password("secret"), None);
    assert_eq!(validate_password("secret1"), None);
}

// =============================================================
// Weight and glucose
// =============================================================

#[test]
fn weight_parses_and_rounds_to_two_decimals() {
    assert_eq!(validate_weight("72.456"), Ok(72.46));
    assert_eq!(validate_weight("  80 "), Ok(80.0));
}

#[test]
fn weight_rejects_non_positive_and_non_numeric_input() {
    for input in ["0", "-1", "abc", "", "inf", "NaN"] {
        assert_eq!(validate_weight(input), Err("Weight must be a positive number"), "input: {input}");
    }
}

#[test]
fn glucose_parses_and_rounds_to_two_decimals() {
    assert_eq!(validate_glucose("95"), Ok(95.0));
    assert_eq!(validate_glucose("101.239"), Ok(101.24));
}

#[test]
fn glucose_rejects_non_positive_input() {
    assert_eq!(validate_glucose("0"), Err("Glucose level must be a positive number"));
    assert_eq!(validate_glucose("-5"), Err("Glucose level must be a positive number"));
}

// =============================================================
// Blood pressure
// =============================================================

#[test]
fn bp_accepts_and_normalizes_readings() {
    assert_eq!(validate_bp("120/80"), Ok("120/80".to_owned()));
    assert_eq!(validate_bp(" 120 / 80 "), Ok("120/80".to_owned()));
    assert_eq!(validate_bp("90/60"), Ok("90/60".to_owned()));
}

#[test]
fn bp_rejects_malformed_readings() {
    for input in ["12080", "120-80", "1/80", "1200/80", "12a/80", "120/8", ""] {
        assert!(
            validate_bp(input).is_err_and(|message| message.starts_with("Blood pressure")),
            "input: {input}"
        );
    }
}

#[test]
fn bp_enforces_systolic_range() {
    assert_eq!(validate_bp("260/80"), Err("Systolic pressure must be between 70 and 250"));
    assert_eq!(validate_bp("69/80"), Err("Systolic pressure must be between 70 and 250"));
}

#[test]
fn bp_enforces_diastolic_range() {
    assert_eq!(validate_bp("120/151"), Err("Diastolic pressure must be between 40 and 150"));
    assert_eq!(validate_bp("120/39"), Err("Diastolic pressure must be between 40 and 150"));
}
