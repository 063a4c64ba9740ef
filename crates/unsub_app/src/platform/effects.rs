use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use app_logging::{app_debug, app_warn};
use unsub_api::{ApiCommand, ApiError, ApiEvent, ApiEvents, ApiHandle, ClientSettings};
use unsub_core::{Effect, Msg, Subscription, SubscriptionStatus, UnsubscribeDraft};

use super::config::AppConfig;

/// Bridges core effects to the background API worker and API events back to
/// core messages.
pub struct EffectRunner {
    api: ApiHandle,
    scan_settle: Duration,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, ApiError> {
        let settings = ClientSettings {
            base_url: config.api_base_url.clone(),
            ..ClientSettings::default()
        };
        let (api, events) = ApiHandle::new(settings)?;
        spawn_event_loop(events, msg_tx);
        Ok(Self {
            api,
            scan_settle: config.scan_settle,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            app_debug!("Effect {:?}", effect);
            match effect {
                Effect::LoadSubscriptions => self.api.submit(ApiCommand::LoadSubscriptions),
                Effect::TriggerScan => self.api.submit(ApiCommand::TriggerScan),
                Effect::AwaitScanSettle => self.api.submit(ApiCommand::AwaitScanSettle {
                    delay: self.scan_settle,
                }),
                Effect::GenerateEmail { subscription_id } => {
                    self.api.submit(ApiCommand::GenerateEmail { subscription_id })
                }
                Effect::SendUnsubscribe {
                    subscription_id,
                    email_content,
                } => self.api.submit(ApiCommand::SendUnsubscribe {
                    subscription_id,
                    email_content,
                }),
                Effect::UpdateStatus {
                    subscription_id,
                    status,
                } => self.api.submit(ApiCommand::UpdateStatus {
                    subscription_id,
                    status: status_to_wire(&status),
                }),
            }
        }
    }
}

fn spawn_event_loop(events: ApiEvents, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    });
}

/// Failures are logged here and collapse into flag-clearing messages; the
/// core never sees an error surface.
fn map_event(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::SubscriptionsLoaded(Ok(records)) => {
            Msg::SubscriptionsLoaded(records.iter().map(map_record).collect())
        }
        ApiEvent::SubscriptionsLoaded(Err(err)) => {
            app_warn!("Failed to load subscriptions: {}", err);
            Msg::LoadFailed
        }
        ApiEvent::ScanTriggered(Ok(())) => Msg::ScanAccepted,
        ApiEvent::ScanTriggered(Err(err)) => {
            app_warn!("Failed to trigger scan: {}", err);
            Msg::ScanFailed
        }
        ApiEvent::ScanSettleElapsed => Msg::ScanSettled,
        ApiEvent::DraftGenerated {
            subscription_id,
            result: Ok(draft),
        } => Msg::DraftReady {
            subscription_id,
            draft: UnsubscribeDraft {
                to: draft.to,
                subject: draft.subject,
                email_content: draft.email_content,
            },
        },
        ApiEvent::DraftGenerated {
            subscription_id,
            result: Err(err),
        } => {
            app_warn!("Failed to generate email for {}: {}", subscription_id, err);
            Msg::DraftFailed
        }
        ApiEvent::UnsubscribeSent(Ok(())) => Msg::SendCompleted,
        ApiEvent::UnsubscribeSent(Err(err)) => {
            app_warn!("Failed to send unsubscribe email: {}", err);
            Msg::SendFailed
        }
        ApiEvent::StatusUpdated(Ok(())) => Msg::StatusUpdated,
        ApiEvent::StatusUpdated(Err(err)) => {
            app_warn!("Failed to update status: {}", err);
            Msg::StatusUpdateFailed
        }
    }
}

fn map_record(record: &unsub_api::SubscriptionRecord) -> Subscription {
    Subscription {
        id: record.id.clone(),
        service_name: record.service_name.clone(),
        sender_email: record.sender_email.clone(),
        status: parse_status(&record.status),
        detected_at: record.detected_at,
    }
}

fn parse_status(raw: &str) -> SubscriptionStatus {
    match raw {
        "detected" => SubscriptionStatus::Detected,
        "unsubscribe_sent" => SubscriptionStatus::UnsubscribeSent,
        "unsubscribed" => SubscriptionStatus::Unsubscribed,
        other => SubscriptionStatus::Other(other.to_string()),
    }
}

fn status_to_wire(status: &SubscriptionStatus) -> String {
    match status {
        SubscriptionStatus::Detected => "detected".to_string(),
        SubscriptionStatus::UnsubscribeSent => "unsubscribe_sent".to_string(),
        SubscriptionStatus::Unsubscribed => "unsubscribed".to_string(),
        SubscriptionStatus::Other(raw) => raw.clone(),
    }
}
