use std::sync::Once;

use chrono::{TimeZone, Utc};
use unsub_core::{update, AppState, Effect, Msg, Subscription, SubscriptionStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn sub(id: &str, status: SubscriptionStatus) -> Subscription {
    Subscription {
        id: id.to_string(),
        service_name: format!("Service {id}"),
        sender_email: format!("news@{id}.example.com"),
        status,
        detected_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
    }
}

fn loaded(state: AppState, subscriptions: Vec<Subscription>) -> AppState {
    let (state, _) = update(state, Msg::SubscriptionsLoaded(subscriptions));
    state
}

#[test]
fn refresh_sets_loading_and_emits_load_effect() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::RefreshRequested);

    assert!(state.loading());
    assert_eq!(effects, vec![Effect::LoadSubscriptions]);
    assert!(state.consume_dirty());
}

#[test]
fn loaded_list_replaces_state_wholesale() {
    init_logging();
    let state = loaded(
        AppState::new(),
        vec![sub("a", SubscriptionStatus::Detected)],
    );
    assert_eq!(state.view().rows.len(), 1);

    // A later response fully replaces the prior list, it never merges.
    let state = loaded(
        state,
        vec![
            sub("b", SubscriptionStatus::UnsubscribeSent),
            sub("c", SubscriptionStatus::Unsubscribed),
        ],
    );
    let view = state.view();
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].id, "b");
    assert_eq!(view.rows[1].id, "c");
    assert!(!view.loading);
}

#[test]
fn load_failure_keeps_prior_list() {
    init_logging();
    let state = loaded(
        AppState::new(),
        vec![sub("a", SubscriptionStatus::Detected)],
    );

    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::LoadSubscriptions]);

    let (state, effects) = update(state, Msg::LoadFailed);
    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id, "a");
}

#[test]
fn counters_equal_per_status_counts_plus_total() {
    init_logging();
    let state = loaded(
        AppState::new(),
        vec![
            sub("a", SubscriptionStatus::Detected),
            sub("b", SubscriptionStatus::Detected),
            sub("c", SubscriptionStatus::UnsubscribeSent),
            sub("d", SubscriptionStatus::Unsubscribed),
            sub("e", SubscriptionStatus::Other("paused".to_string())),
        ],
    );

    let stats = state.view().stats;
    assert_eq!(stats.total, 5);
    assert_eq!(stats.detected, 2);
    assert_eq!(stats.sent, 1);
    assert_eq!(stats.unsubscribed, 1);
}

#[test]
fn empty_list_yields_zero_counters() {
    init_logging();
    let state = loaded(AppState::new(), Vec::new());

    let view = state.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.stats.total, 0);
    assert_eq!(view.stats.detected, 0);
    assert_eq!(view.stats.sent, 0);
    assert_eq!(view.stats.unsubscribed, 0);
}

#[test]
fn selection_is_clamped_when_list_shrinks() {
    init_logging();
    let state = loaded(
        AppState::new(),
        vec![
            sub("a", SubscriptionStatus::Detected),
            sub("b", SubscriptionStatus::Detected),
            sub("c", SubscriptionStatus::Detected),
        ],
    );
    let (state, _) = update(state, Msg::SelectNext);
    let (state, _) = update(state, Msg::SelectNext);
    assert_eq!(state.view().selected, 2);

    let state = loaded(state, vec![sub("a", SubscriptionStatus::Detected)]);
    assert_eq!(state.view().selected, 0);
}

#[test]
fn selection_stays_within_bounds() {
    init_logging();
    let state = loaded(
        AppState::new(),
        vec![
            sub("a", SubscriptionStatus::Detected),
            sub("b", SubscriptionStatus::Detected),
        ],
    );

    let (state, _) = update(state, Msg::SelectPrev);
    assert_eq!(state.view().selected, 0);

    let (state, _) = update(state, Msg::SelectNext);
    let (state, _) = update(state, Msg::SelectNext);
    let (state, _) = update(state, Msg::SelectNext);
    assert_eq!(state.view().selected, 1);
}
