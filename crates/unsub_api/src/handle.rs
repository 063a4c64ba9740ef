use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::client::{ClientSettings, HttpApiClient, UnsubscribeApi};
use crate::{ApiError, SubscriptionRecord, UnsubscribeDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    LoadSubscriptions,
    TriggerScan,
    /// Sleep out the scan settle window, then report back. The backend has
    /// no completion signal, so the caller picks the delay.
    AwaitScanSettle { delay: Duration },
    GenerateEmail {
        subscription_id: String,
    },
    SendUnsubscribe {
        subscription_id: String,
        email_content: String,
    },
    UpdateStatus {
        subscription_id: String,
        status: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    SubscriptionsLoaded(Result<Vec<SubscriptionRecord>, ApiError>),
    ScanTriggered(Result<(), ApiError>),
    ScanSettleElapsed,
    DraftGenerated {
        subscription_id: String,
        result: Result<UnsubscribeDraft, ApiError>,
    },
    UnsubscribeSent(Result<(), ApiError>),
    StatusUpdated(Result<(), ApiError>),
}

/// Command side of the background API worker. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
}

/// Event side of the background API worker.
#[derive(Debug)]
pub struct ApiEvents {
    event_rx: mpsc::Receiver<ApiEvent>,
}

impl ApiHandle {
    /// Spawns a worker thread owning a tokio runtime. Each command runs as
    /// its own task: a command's steps are sequential, but commands do not
    /// wait for one another.
    pub fn new(settings: ClientSettings) -> Result<(Self, ApiEvents), ApiError> {
        let client = Arc::new(HttpApiClient::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ApiEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(client.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok((Self { cmd_tx }, ApiEvents { event_rx }))
    }

    pub fn submit(&self, command: ApiCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

impl ApiEvents {
    /// Blocks until the next event; `None` once the worker is gone.
    pub fn recv(&self) -> Option<ApiEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_command(api: &dyn UnsubscribeApi, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::LoadSubscriptions => {
            ApiEvent::SubscriptionsLoaded(api.list_subscriptions().await)
        }
        ApiCommand::TriggerScan => ApiEvent::ScanTriggered(api.trigger_scan().await),
        ApiCommand::AwaitScanSettle { delay } => {
            tokio::time::sleep(delay).await;
            ApiEvent::ScanSettleElapsed
        }
        ApiCommand::GenerateEmail { subscription_id } => {
            let result = api.generate_unsubscribe_email(&subscription_id).await;
            ApiEvent::DraftGenerated {
                subscription_id,
                result,
            }
        }
        ApiCommand::SendUnsubscribe {
            subscription_id,
            email_content,
        } => ApiEvent::UnsubscribeSent(api.send_unsubscribe(&subscription_id, &email_content).await),
        ApiCommand::UpdateStatus {
            subscription_id,
            status,
        } => ApiEvent::StatusUpdated(api.update_status(&subscription_id, &status).await),
    }
}
