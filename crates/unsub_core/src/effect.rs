#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full subscription list from the backend.
    LoadSubscriptions,
    /// Ask the backend to scan the mailbox for subscriptions.
    TriggerScan,
    /// Wait for the scan to settle, then deliver `Msg::ScanSettled`. The
    /// backend exposes no completion signal today, so the platform decides
    /// how long to wait.
    AwaitScanSettle,
    /// Ask the backend to generate unsubscribe email content for one entry.
    GenerateEmail {
        subscription_id: crate::SubscriptionId,
    },
    /// Submit generated content for delivery.
    SendUnsubscribe {
        subscription_id: crate::SubscriptionId,
        email_content: String,
    },
    /// Push a status change for one entry.
    UpdateStatus {
        subscription_id: crate::SubscriptionId,
        status: crate::SubscriptionStatus,
    },
}
