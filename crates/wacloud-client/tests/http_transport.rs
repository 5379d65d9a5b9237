//! End-to-end tests of the reqwest transport against a mock Graph API.

use serde_json::json;
use wacloud_client::types::Location;
use wacloud_client::{Error, WhatsApp};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PHONE_ID: &str = "106540352242922";
const TOKEN: &str = "test-token";

fn client(server: &MockServer) -> WhatsApp {
    WhatsApp::builder()
        .phone_number_id(PHONE_ID)
        .access_token(TOKEN)
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn messages_path() -> String {
    format!("/v20.0/{}/messages", PHONE_ID)
}

fn accepted(id: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "messaging_product": "whatsapp",
        "contacts": [{ "input": "15551234567", "wa_id": "15551234567" }],
        "messages": [{ "id": id }]
    }))
}

#[tokio::test]
async fn test_text_message_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(messages_path()))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "15551234567",
            "type": "text",
            "text": { "body": "hi" }
        })))
        .respond_with(accepted("wamid.TEXT"))
        .expect(1)
        .mount(&server)
        .await;

    let wa = client(&server);
    let response = wa.message("15551234567").text("hi").send().await.unwrap();
    assert_eq!(response.message_id(), Some("wamid.TEXT"));
}

#[tokio::test]
async fn test_reply_location_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(messages_path()))
        .and(body_json(json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "15551234567",
            "type": "location",
            "context": { "message_id": "wamid.PREV" },
            "location": { "latitude": 1.25, "longitude": 103.75 }
        })))
        .respond_with(accepted("wamid.LOC"))
        .expect(1)
        .mount(&server)
        .await;

    let wa = client(&server);
    let response = wa
        .reply_to("15551234567", "wamid.PREV")
        .location(Location::new(1.25, 103.75))
        .send()
        .await
        .unwrap();
    assert_eq!(response.message_id(), Some("wamid.LOC"));
}

#[tokio::test]
async fn test_mark_read_request() {
    let server = MockServer::start().await;
    let read = json!({ "success": true });

    Mock::given(method("POST"))
        .and(path(messages_path()))
        .and(body_json(json!({
            "messaging_product": "whatsapp",
            "status": "read",
            "message_id": "wamid.IN"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(read))
        .expect(1)
        .mount(&server)
        .await;

    let status = client(&server).mark_read("wamid.IN").await.unwrap();
    assert!(status.success);
}

#[tokio::test]
async fn test_graph_error_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "(#131030) Recipient phone number not in allowed list",
                "type": "OAuthException",
                "code": 131030,
                "error_subcode": 2494010,
                "fbtrace_id": "A1b2C3"
            }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .message("15550000000")
        .text("hello")
        .send()
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            code,
            error_subcode,
            error_type,
            message,
            fbtrace_id,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, Some(131030));
            assert_eq!(error_subcode, Some(2494010));
            assert_eq!(error_type.as_deref(), Some("OAuthException"));
            assert!(message.contains("allowed list"));
            assert_eq!(fbtrace_id.as_deref(), Some("A1b2C3"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Error validating access token",
                "type": "OAuthException",
                "code": 190
            }
        })))
        .mount(&server)
        .await;

    let err = client(&server).mark_read("wamid.X").await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(matches!(err, Error::Auth(ref m) if m.contains("access token")));
}

#[tokio::test]
async fn test_non_json_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client(&server)
        .message("1555")
        .text("hi")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_server_error());
    assert!(matches!(err, Error::Api { status: 502, code: None, .. }));
}

#[tokio::test]
async fn test_rate_limit_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Pair rate limit hit", "code": 131056 }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .message("1555")
        .text("again")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
}
