// Integration tests for `ManagementClient` over `HttpTransport` using wiremock.
#![allow(clippy::unwrap_used)]

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jbossctl_api::models::HostRecord;
use jbossctl_api::{Address, HttpTransport, ManagementClient, Operation, catalog};

const CHALLENGE: &str = r#"Digest realm="ManagementRealm", nonce="7f3a9c0d1e", opaque="00000000000000000000000000000000", algorithm=MD5, qop="auth""#;

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ManagementClient) {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&format!("{}/management", server.uri())).unwrap();
    let transport = HttpTransport::with_client(
        reqwest::Client::new(),
        endpoint,
        "admin",
        SecretString::from("secret"),
    );
    (server, ManagementClient::new(transport))
}

/// Answer unauthenticated requests with a Digest challenge.
async fn mount_challenge(server: &MockServer, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/management"))
        .respond_with(
            ResponseTemplate::new(401).insert_header("WWW-Authenticate", CHALLENGE),
        )
        .with_priority(10)
        .expect(expected)
        .mount(server)
        .await;
}

// ── Digest handshake ────────────────────────────────────────────────

#[tokio::test]
async fn test_digest_challenge_answered_then_reused() {
    let (server, client) = setup().await;
    mount_challenge(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/management"))
        .and(header("content-type", "application/json"))
        .and(header_regex(
            "authorization",
            r#"^Digest username="admin", realm="ManagementRealm", nonce="7f3a9c0d1e", uri="/management""#,
        ))
        .and(header_regex("authorization", r"qop=auth, nc=0000000[12]"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "outcome": "success", "result": "DOMAIN" })),
        )
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;

    let first = client.invoke(&catalog::launch_type()).await.unwrap();
    let second = client.invoke(&catalog::launch_type()).await.unwrap();

    assert_eq!(first, json!("DOMAIN"));
    assert_eq!(second, json!("DOMAIN"));
}

#[tokio::test]
async fn test_wrong_credentials_surface_as_server_error() {
    let (server, client) = setup().await;
    // Initial request plus exactly one authenticated attempt.
    mount_challenge(&server, 2).await;

    let err = client.invoke(&catalog::launch_type()).await.unwrap_err();

    assert!(err.is_server_error());
    assert_eq!(err.message(), "Request responded a 401 code");
}

// ── Wire format ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_operation_body_is_structured_json() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/management"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "operation": "read-children-resources",
            "child-type": "deployment",
            "address": ["server-group", "main-server-group"]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "outcome": "success", "result": {} })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let op = catalog::deployments(Address::root().child("server-group", "main-server-group"));
    let result = client.invoke(&op).await.unwrap();

    assert_eq!(result, json!({}));
}

// ── Envelope classification ─────────────────────────────────────────

#[tokio::test]
async fn test_failed_outcome_is_cli_error() {
    let (server, client) = setup().await;

    let envelope = json!({
        "outcome": "failed",
        "failure-description": "WFLYCTL0216: Management resource '[(\"host\" => \"nope\")]' not found",
        "rolled-back": true
    });
    Mock::given(method("POST"))
        .and(path("/management"))
        .respond_with(ResponseTemplate::new(500).set_body_json(&envelope))
        .mount(&server)
        .await;

    let err = client
        .invoke(&catalog::host_resource(Address::root().child("host", "nope")))
        .await
        .unwrap_err();

    assert!(err.is_cli_error());
    assert!(err.message().starts_with("WFLYCTL0216"));
    assert_eq!(err.raw(), Some(&envelope));
}

#[tokio::test]
async fn test_connection_refused_is_server_error() {
    let transport = HttpTransport::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:1/management").unwrap(),
        "admin",
        SecretString::from("secret"),
    );
    let client = ManagementClient::new(transport);

    let err = client
        .invoke(&Operation::read_resource(Address::root()))
        .await
        .unwrap_err();

    assert!(err.is_server_error());
    assert!(err.message().starts_with("Error requesting: "));
}

#[tokio::test]
async fn test_invoke_as_decodes_record() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/management"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "outcome": "success",
            "result": {
                "name": "slave",
                "master": false,
                "host-state": "running",
                "product-name": "JBoss EAP",
                "product-version": "7.4.0.GA"
            }
        })))
        .mount(&server)
        .await;

    let host: HostRecord = client
        .invoke_as(&catalog::host_resource(Address::root().child("host", "slave")), "host")
        .await
        .unwrap();

    assert_eq!(host.name.as_deref(), Some("slave"));
    assert!(!host.master);
    assert_eq!(host.host_state.as_deref(), Some("running"));
}

#[tokio::test]
async fn test_invoke_as_shape_mismatch_is_cli_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/management"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "outcome": "success", "result": "not-a-host" })),
        )
        .mount(&server)
        .await;

    let err = client
        .invoke_as::<HostRecord>(&catalog::host_resource(Address::root()), "host")
        .await
        .unwrap_err();

    assert!(err.is_cli_error());
    assert!(err.message().starts_with("Unexpected payload for host:"));
}
