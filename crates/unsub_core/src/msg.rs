#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial load on startup or an explicit resynchronization request.
    RefreshRequested,
    /// Full subscription list arrived from the backend.
    SubscriptionsLoaded(Vec<crate::Subscription>),
    /// List fetch failed; prior state stays untouched.
    LoadFailed,
    /// User asked for a mailbox scan.
    ScanClicked,
    /// Backend acknowledged the scan request (scan itself runs async).
    ScanAccepted,
    /// Scan request failed before it was accepted.
    ScanFailed,
    /// The scan settle window elapsed; time to re-fetch the list.
    ScanSettled,
    /// User asked to generate an unsubscribe email for the selected row.
    GenerateClicked,
    /// Generated draft arrived for a subscription.
    DraftReady {
        subscription_id: crate::SubscriptionId,
        draft: crate::UnsubscribeDraft,
    },
    /// Draft generation failed; no confirmation is shown.
    DraftFailed,
    /// User confirmed sending the pending draft.
    ConfirmAccepted,
    /// User dismissed the pending draft.
    ConfirmDismissed,
    SendCompleted,
    SendFailed,
    /// User marked the selected row as unsubscribed.
    MarkUnsubscribedClicked,
    StatusUpdated,
    StatusUpdateFailed,
    /// Move the selection cursor one row down.
    SelectNext,
    /// Move the selection cursor one row up.
    SelectPrev,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
