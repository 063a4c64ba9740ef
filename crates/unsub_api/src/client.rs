use std::time::Duration;

use reqwest::Url;

use crate::{ApiError, SendUnsubscribeRequest, StatusUpdateRequest, SubscriptionRecord, UnsubscribeDraft};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The backend surface this client consumes. A trait seam so the effect
/// runner and tests can substitute the transport.
#[async_trait::async_trait]
pub trait UnsubscribeApi: Send + Sync {
    async fn list_subscriptions(&self) -> Result<Vec<SubscriptionRecord>, ApiError>;
    async fn trigger_scan(&self) -> Result<(), ApiError>;
    async fn generate_unsubscribe_email(
        &self,
        subscription_id: &str,
    ) -> Result<UnsubscribeDraft, ApiError>;
    async fn send_unsubscribe(
        &self,
        subscription_id: &str,
        email_content: &str,
    ) -> Result<(), ApiError>;
    async fn update_status(&self, subscription_id: &str, status: &str) -> Result<(), ApiError>;
}

/// Thin reqwest wrapper. No retries, no caching; every call is one request
/// against the configured base URL.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::InvalidBaseUrl(err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::InvalidBaseUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl UnsubscribeApi for HttpApiClient {
    async fn list_subscriptions(&self) -> Result<Vec<SubscriptionRecord>, ApiError> {
        let url = self.endpoint("/api/subscriptions")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = expect_success(response)?;
        response
            .json::<Vec<SubscriptionRecord>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn trigger_scan(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/api/scan-email")?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // The scan runs asynchronously on the backend; the acknowledgment
        // body carries nothing we act on.
        expect_success(response).map(|_| ())
    }

    async fn generate_unsubscribe_email(
        &self,
        subscription_id: &str,
    ) -> Result<UnsubscribeDraft, ApiError> {
        let url = self.endpoint(&format!(
            "/api/generate-unsubscribe-email/{subscription_id}"
        ))?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = expect_success(response)?;
        response
            .json::<UnsubscribeDraft>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn send_unsubscribe(
        &self,
        subscription_id: &str,
        email_content: &str,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("/api/send-unsubscribe")?;
        let body = SendUnsubscribeRequest {
            subscription_id: subscription_id.to_string(),
            email_content: email_content.to_string(),
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(response).map(|_| ())
    }

    async fn update_status(&self, subscription_id: &str, status: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/api/subscriptions/{subscription_id}/status"))?;
        let body = StatusUpdateRequest {
            status: status.to_string(),
        };
        let response = self
            .client
            .put(url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(response).map(|_| ())
    }
}

fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::HttpStatus(status.as_u16()));
    }
    Ok(response)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Network(err.to_string())
}
