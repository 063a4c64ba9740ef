use crate::{AppState, Effect, Msg, SubscriptionStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => {
            state.set_loading(true);
            vec![Effect::LoadSubscriptions]
        }
        Msg::SubscriptionsLoaded(subscriptions) => {
            state.replace_subscriptions(subscriptions);
            state.set_loading(false);
            Vec::new()
        }
        Msg::LoadFailed => {
            // Failure is logged by the effect runner; the prior list stays.
            state.set_loading(false);
            Vec::new()
        }
        Msg::ScanClicked => {
            if state.scanning() || state.confirm_open() {
                return (state, Vec::new());
            }
            state.set_scanning(true);
            vec![Effect::TriggerScan]
        }
        Msg::ScanAccepted => vec![Effect::AwaitScanSettle],
        Msg::ScanFailed => {
            state.set_scanning(false);
            Vec::new()
        }
        Msg::ScanSettled => {
            // Re-fetch regardless of whether new entries appeared.
            state.set_scanning(false);
            state.set_loading(true);
            vec![Effect::LoadSubscriptions]
        }
        Msg::GenerateClicked => {
            if state.confirm_open() {
                return (state, Vec::new());
            }
            match state.selected_subscription() {
                Some(sub) if sub.status == SubscriptionStatus::Detected => {
                    vec![Effect::GenerateEmail {
                        subscription_id: sub.id.clone(),
                    }]
                }
                _ => Vec::new(),
            }
        }
        Msg::DraftReady {
            subscription_id,
            draft,
        } => {
            state.open_confirm(subscription_id, draft);
            Vec::new()
        }
        Msg::DraftFailed => Vec::new(),
        Msg::ConfirmAccepted => match state.take_confirm() {
            Some(pending) => vec![Effect::SendUnsubscribe {
                subscription_id: pending.subscription_id,
                email_content: pending.draft.email_content,
            }],
            None => Vec::new(),
        },
        Msg::ConfirmDismissed => {
            state.take_confirm();
            Vec::new()
        }
        Msg::SendCompleted | Msg::StatusUpdated => {
            state.set_loading(true);
            vec![Effect::LoadSubscriptions]
        }
        Msg::SendFailed | Msg::StatusUpdateFailed => Vec::new(),
        Msg::MarkUnsubscribedClicked => {
            if state.confirm_open() {
                return (state, Vec::new());
            }
            match state.selected_subscription() {
                Some(sub) if sub.status == SubscriptionStatus::UnsubscribeSent => {
                    vec![Effect::UpdateStatus {
                        subscription_id: sub.id.clone(),
                        status: SubscriptionStatus::Unsubscribed,
                    }]
                }
                _ => Vec::new(),
            }
        }
        Msg::SelectNext => {
            state.move_selection(1);
            Vec::new()
        }
        Msg::SelectPrev => {
            state.move_selection(-1);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
