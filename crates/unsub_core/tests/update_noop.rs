use unsub_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_does_not_dirty_state() {
    let state = AppState::new();
    let (mut next, effects) = update(state, Msg::Tick);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
