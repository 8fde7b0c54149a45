use super::*;

#[test]
fn auth_state_default_has_no_token() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_with_token_is_authenticated() {
    let state = AuthState { token: Some("tok123".to_owned()) };
    assert!(state.is_authenticated());
}
