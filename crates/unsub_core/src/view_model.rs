use crate::{Subscription, SubscriptionId, SubscriptionStatus};

/// Aggregate counters, recomputed from the full list on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsView {
    pub total: usize,
    pub detected: usize,
    pub sent: usize,
    pub unsubscribed: usize,
}

impl StatsView {
    pub fn from_subscriptions(subscriptions: &[Subscription]) -> Self {
        let mut stats = Self {
            total: subscriptions.len(),
            ..Self::default()
        };
        for sub in subscriptions {
            match sub.status {
                SubscriptionStatus::Detected => stats.detected += 1,
                SubscriptionStatus::UnsubscribeSent => stats.sent += 1,
                SubscriptionStatus::Unsubscribed => stats.unsubscribed += 1,
                SubscriptionStatus::Other(_) => {}
            }
        }
        stats
    }
}

/// The single contextual action a row offers, keyed on its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    GenerateEmail,
    MarkUnsubscribed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Blue,
    Yellow,
    Green,
    Gray,
}

impl SubscriptionStatus {
    pub fn label(&self) -> &str {
        match self {
            SubscriptionStatus::Detected => "Détecté",
            SubscriptionStatus::UnsubscribeSent => "Email envoyé",
            SubscriptionStatus::Unsubscribed => "Désinscrit",
            SubscriptionStatus::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> BadgeColor {
        match self {
            SubscriptionStatus::Detected => BadgeColor::Blue,
            SubscriptionStatus::UnsubscribeSent => BadgeColor::Yellow,
            SubscriptionStatus::Unsubscribed => BadgeColor::Green,
            SubscriptionStatus::Other(_) => BadgeColor::Gray,
        }
    }

    pub fn action(&self) -> Option<RowAction> {
        match self {
            SubscriptionStatus::Detected => Some(RowAction::GenerateEmail),
            SubscriptionStatus::UnsubscribeSent => Some(RowAction::MarkUnsubscribed),
            SubscriptionStatus::Unsubscribed | SubscriptionStatus::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRowView {
    pub id: SubscriptionId,
    pub service_name: String,
    pub sender_email: String,
    /// Detection date in fr-FR day/month/year form.
    pub detected_on: String,
    pub status_label: String,
    pub badge: BadgeColor,
    pub action: Option<RowAction>,
    /// The entry reached the end of its lifecycle; show the completed
    /// indicator instead of an action.
    pub completed: bool,
}

impl SubscriptionRowView {
    pub fn from_subscription(sub: &Subscription) -> Self {
        Self {
            id: sub.id.clone(),
            service_name: sub.service_name.clone(),
            sender_email: sub.sender_email.clone(),
            detected_on: sub.detected_at.format("%d/%m/%Y").to_string(),
            status_label: sub.status.label().to_string(),
            badge: sub.status.badge(),
            action: sub.status.action(),
            completed: sub.status == SubscriptionStatus::Unsubscribed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub stats: StatsView,
    pub rows: Vec<SubscriptionRowView>,
    pub selected: usize,
    pub loading: bool,
    pub scanning: bool,
    pub confirm: Option<ConfirmView>,
    pub dirty: bool,
}
