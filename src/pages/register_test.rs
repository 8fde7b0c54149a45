use super::*;

#[test]
fn validate_register_input_trims_email() {
    assert_eq!(
        validate_register_input("  user@example.com  ", "secret1", "secret1"),
        Ok(("user@example.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_valid_email() {
    assert_eq!(validate_register_input("", "secret1", "secret1"), Err("Email is required"));
    assert_eq!(validate_register_input("nope", "secret1", "secret1"), Err("Invalid email address"));
}

#[test]
fn validate_register_input_enforces_password_rules() {
    assert_eq!(
        validate_register_input("a@b.com", "abc", "abc"),
        Err("Password must be at least 6 characters")
    );
    assert_eq!(validate_register_input("a@b.com", "", ""), Err("Password is required"));
}

#[test]
fn validate_register_input_requires_matching_confirmation() {
    assert_eq!(
        validate_register_input("a@b.com", "secret1", "secret2"),
        Err("Passwords do not match")
    );
}
