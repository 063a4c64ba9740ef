use chrono::{DateTime, Utc};

use crate::view_model::{AppViewModel, ConfirmView, StatsView, SubscriptionRowView};

pub type SubscriptionId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Detected,
    UnsubscribeSent,
    Unsubscribed,
    /// Wire value this client does not recognize. Kept verbatim so a later
    /// re-fetch cannot lose information the client never understood.
    Other(String),
}

/// A detected mailing-list entry as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub service_name: String,
    pub sender_email: String,
    pub status: SubscriptionStatus,
    pub detected_at: DateTime<Utc>,
}

/// Generated unsubscribe email content, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsubscribeDraft {
    pub to: String,
    pub subject: String,
    pub email_content: String,
}

/// A draft awaiting the user's yes/no before it goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub subscription_id: SubscriptionId,
    pub draft: UnsubscribeDraft,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    subscriptions: Vec<Subscription>,
    loading: bool,
    scanning: bool,
    selected: usize,
    pending_confirm: Option<PendingConfirm>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            stats: StatsView::from_subscriptions(&self.subscriptions),
            rows: self
                .subscriptions
                .iter()
                .map(SubscriptionRowView::from_subscription)
                .collect(),
            selected: self.selected,
            loading: self.loading,
            scanning: self.scanning,
            confirm: self.pending_confirm.as_ref().map(|pending| ConfirmView {
                to: pending.draft.to.clone(),
                subject: pending.draft.subject.clone(),
                body: pending.draft.email_content.clone(),
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn scanning(&self) -> bool {
        self.scanning
    }

    pub fn confirm_open(&self) -> bool {
        self.pending_confirm.is_some()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.mark_dirty();
    }

    pub(crate) fn set_scanning(&mut self, scanning: bool) {
        self.scanning = scanning;
        self.mark_dirty();
    }

    /// Replaces local state wholesale; the backend is the source of truth
    /// after every mutation.
    pub(crate) fn replace_subscriptions(&mut self, subscriptions: Vec<Subscription>) {
        self.subscriptions = subscriptions;
        if self.selected >= self.subscriptions.len() {
            self.selected = self.subscriptions.len().saturating_sub(1);
        }
        self.mark_dirty();
    }

    pub(crate) fn selected_subscription(&self) -> Option<&Subscription> {
        self.subscriptions.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        let len = self.subscriptions.len();
        if len == 0 {
            return;
        }
        let next = self
            .selected
            .saturating_add_signed(delta)
            .min(len - 1);
        if next != self.selected {
            self.selected = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn open_confirm(&mut self, subscription_id: SubscriptionId, draft: UnsubscribeDraft) {
        self.pending_confirm = Some(PendingConfirm {
            subscription_id,
            draft,
        });
        self.mark_dirty();
    }

    pub(crate) fn take_confirm(&mut self) -> Option<PendingConfirm> {
        let pending = self.pending_confirm.take();
        if pending.is_some() {
            self.mark_dirty();
        }
        pending
    }
}
