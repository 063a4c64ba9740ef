use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use unsub_api::{ApiError, ClientSettings, HttpApiClient, UnsubscribeApi};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpApiClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    HttpApiClient::new(settings).expect("client")
}

#[tokio::test]
async fn list_subscriptions_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "sub-1",
                "service_name": "Newsletter Hebdo",
                "sender_email": "news@hebdo.example.com",
                "status": "detected",
                "detected_at": "2025-06-01T10:00:00Z"
            },
            {
                "id": "sub-2",
                "service_name": "Promo Express",
                "sender_email": "promo@express.example.com",
                "status": "paused",
                "detected_at": "2025-06-02T08:30:00.123456"
            }
        ])))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .list_subscriptions()
        .await
        .expect("list ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "sub-1");
    assert_eq!(records[0].status, "detected");
    // Unknown statuses pass through verbatim.
    assert_eq!(records[1].status, "paused");
    // Naive backend timestamps are taken as UTC.
    assert_eq!(
        records[1].detected_at.to_rfc3339(),
        "2025-06-02T08:30:00.123456+00:00"
    );
}

#[tokio::test]
async fn list_subscriptions_maps_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscriptions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).list_subscriptions().await.unwrap_err();
    assert_eq!(err, ApiError::HttpStatus(500));
}

#[tokio::test]
async fn list_subscriptions_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_subscriptions().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn list_subscriptions_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscriptions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = HttpApiClient::new(settings).expect("client");

    let err = client.list_subscriptions().await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
}

#[tokio::test]
async fn trigger_scan_posts_and_ignores_ack_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scan-email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Email scan initiated",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).trigger_scan().await.expect("scan ok");
}

#[tokio::test]
async fn generate_email_decodes_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-unsubscribe-email/sub-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "to": "news@hebdo.example.com",
            "subject": "Unsubscribe Request",
            "email_content": "Please remove my address from your mailing list."
        })))
        .mount(&server)
        .await;

    let draft = client_for(&server)
        .generate_unsubscribe_email("sub-1")
        .await
        .expect("draft ok");

    assert_eq!(draft.to, "news@hebdo.example.com");
    assert_eq!(draft.subject, "Unsubscribe Request");
    assert_eq!(
        draft.email_content,
        "Please remove my address from your mailing list."
    );
}

#[tokio::test]
async fn generate_email_maps_missing_subscription() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-unsubscribe-email/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_unsubscribe_email("gone")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::HttpStatus(404));
}

#[tokio::test]
async fn send_unsubscribe_posts_expected_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-unsubscribe"))
        .and(body_json(json!({
            "subscription_id": "sub-1",
            "email_content": "Please remove my address from your mailing list."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Unsubscribe email sent",
            "status": "sent"
        })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .send_unsubscribe(
            "sub-1",
            "Please remove my address from your mailing list.",
        )
        .await
        .expect("send ok");
}

#[tokio::test]
async fn update_status_puts_expected_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/subscriptions/sub-1/status"))
        .and(body_json(json!({ "status": "unsubscribed" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Status updated successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .update_status("sub-1", "unsubscribed")
        .await
        .expect("update ok");
}

#[test]
fn rejects_invalid_base_url() {
    let settings = ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    };

    let err = HttpApiClient::new(settings).unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
}
