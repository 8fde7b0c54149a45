use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}

#[test]
fn detail_from_body_extracts_server_detail() {
    assert_eq!(
        detail_from_body(r#"{"detail":"Account locked"}"#),
        Some("Account locked".to_owned())
    );
}

#[test]
fn detail_from_body_handles_missing_or_malformed_bodies() {
    assert_eq!(detail_from_body("{}"), None);
    assert_eq!(detail_from_body("<html>busted</html>"), None);
    assert_eq!(detail_from_body(""), None);
}

#[test]
fn message_or_prefers_server_detail() {
    let err = ApiError { status: 423, detail: Some("Account locked".to_owned()) };
    assert_eq!(err.message_or(LOGIN_FALLBACK), "Account locked");
}

#[test]
fn message_or_falls_back_without_detail() {
    let err = ApiError::transport();
    assert_eq!(err.message_or(LOGIN_FALLBACK), "Login failed. Try again.");
}

#[test]
fn unauthorized_is_detected_by_status() {
    assert!(ApiError { status: 401, detail: None }.is_unauthorized());
    assert!(!ApiError { status: 500, detail: None }.is_unauthorized());
    assert!(!ApiError::transport().is_unauthorized());
}
