use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One subscription entry as the backend reports it. The status is kept as
/// the raw wire string; interpretation is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscriptionRecord {
    pub id: String,
    pub service_name: String,
    pub sender_email: String,
    pub status: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub detected_at: DateTime<Utc>,
}

/// Generated unsubscribe email content returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnsubscribeDraft {
    pub to: String,
    pub subject: String,
    pub email_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendUnsubscribeRequest {
    pub subscription_id: String,
    pub email_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// The backend emits RFC 3339 timestamps for imported data but naive ISO
/// timestamps for entries it stamped itself. Naive values are taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(stamped) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(stamped.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(serde::de::Error::custom)
}
