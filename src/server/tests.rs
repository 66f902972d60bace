use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::router;
use crate::mx::MxRecord;
use crate::mx::tests::StubResolver;
use crate::smtp_probe::{ProbeOutcome, ProbeReport};
use crate::validator::Address;
use crate::verify::{MailboxProbe, Verifier};

struct AlwaysConfirm;

impl MailboxProbe for AlwaysConfirm {
    async fn probe(&self, exchange: &str, _address: &Address) -> ProbeReport {
        ProbeReport {
            exchange: exchange.to_string(),
            outcome: ProbeOutcome::MailboxConfirmed,
            transcript: Vec::new(),
        }
    }
}

/// Never answers within the test's request timeout.
struct Stalled;

impl MailboxProbe for Stalled {
    async fn probe(&self, exchange: &str, _address: &Address) -> ProbeReport {
        tokio::time::sleep(Duration::from_secs(30)).await;
        ProbeReport {
            exchange: exchange.to_string(),
            outcome: ProbeOutcome::MailboxConfirmed,
            transcript: Vec::new(),
        }
    }
}

fn app() -> axum::Router {
    let verifier = Verifier::new(
        StubResolver::with_records(vec![MxRecord::new(10, "mx.example.com")]),
        AlwaysConfirm,
    );
    router(Arc::new(verifier), Duration::from_secs(5))
}

fn post_json(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/validate-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn valid_request_returns_report() {
    let response = app()
        .oneshot(post_json(r#"{"email":"mary@example.com"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["email"], "mary@example.com");
    assert_eq!(json["result"]["format"], true);
    assert_eq!(json["result"]["domain"], true);
    assert_eq!(json["result"]["exists"], true);
    assert_eq!(json["result"]["reason"], "Email is valid");
    assert_eq!(json["result"]["mxServer"], "mx.example.com");
    assert_eq!(json["result"]["gender"], "female");
    assert_eq!(json["result"]["phoneNumber"], false);
    assert_eq!(json["result"]["phoneStatus"], "No phone number detected");
    assert_eq!(json["result"]["smtp"]["verdict"], "accepted");
}

#[tokio::test]
async fn invalid_syntax_is_still_a_200() {
    let response = app()
        .oneshot(post_json(r#"{"email":"nope"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["format"], false);
    assert_eq!(json["result"]["reason"], "Invalid syntax");
}

#[tokio::test]
async fn missing_email_is_a_400() {
    for body in [r#"{}"#, r#"{"email":""}"#, r#"{"email":null}"#, "not json"] {
        let response = app().oneshot(post_json(body)).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let bytes = to_bytes(response.into_body(), 1024).await.expect("body");
        assert_eq!(&bytes[..], b"Email is required");
    }
}

#[tokio::test]
async fn index_says_hello() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), 1024).await.expect("body");
    assert_eq!(&bytes[..], b"Hello World");
}

#[tokio::test]
async fn slow_verification_is_a_408() {
    let verifier = Verifier::new(
        StubResolver::with_records(vec![MxRecord::new(10, "mx.example.com")]),
        Stalled,
    );
    let app = router(Arc::new(verifier), Duration::from_millis(100));
    let response = tokio::time::timeout(
        Duration::from_secs(5),
        app.oneshot(post_json(r#"{"email":"mary@example.com"}"#)),
    )
    .await
    .expect("request timeout applied")
    .expect("response");
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
