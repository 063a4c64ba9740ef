//! Unsub api: HTTP client for the unsubscribe assistant backend.
mod client;
mod handle;
mod types;

pub use client::{ClientSettings, HttpApiClient, UnsubscribeApi};
pub use handle::{ApiCommand, ApiEvent, ApiEvents, ApiHandle};
pub use types::{
    ApiError, SendUnsubscribeRequest, StatusUpdateRequest, SubscriptionRecord, UnsubscribeDraft,
};
