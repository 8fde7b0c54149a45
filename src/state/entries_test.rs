use super::*;

#[test]
fn entries_state_default_is_empty_and_idle() {
    let state = EntriesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.submit_pending);
    assert_eq!(state.error, None);
}
