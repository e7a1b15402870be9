//! End-to-end HTTP tests against a real SQLite-backed repository.
//!
//! This test requires the `sqlite` feature flag.

#![cfg(feature = "sqlite")]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::SqliteRepo;
use serde_json::Value;
use tower::ServiceExt;

/// Helper to create a router over a fresh in-memory database.
async fn create_test_app() -> Router {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let service = PaymentService::new(repo);
    HttpServer::new(service).router()
}

fn request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn payment_body(amount: &str) -> String {
    format!(r#"{{"data":{{"type":"Payment","amount":"{amount}"}}}}"#)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn create(app: &Router, amount: &str) -> (String, Vec<u8>) {
    let (status, body) = send(
        app,
        request(Method::POST, "/payments", &payment_body(amount)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let id = json["data"]["id"].as_str().unwrap().to_string();
    (id, body)
}

#[tokio::test]
async fn test_created_payment_reads_back_identically() {
    let app = create_test_app().await;

    let (id, created) = create(&app, "100.21").await;
    let (status, fetched) = send(&app, request(Method::GET, &format!("/payments/{id}"), "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, fetched);

    let expected = format!(
        r#"{{"data":{{"id":"{id}","amount":"100.21","type":"Payment","links":{{"self":"/payments/{id}"}}}}}}"#
    );
    assert_eq!(String::from_utf8(fetched).unwrap(), expected);
}

#[tokio::test]
async fn test_empty_collection() {
    let app = create_test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/payments", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"data":[],"links":{"self":"/payments"}}"#.to_vec());
}

#[tokio::test]
async fn test_list_after_creates() {
    let app = create_test_app().await;
    let (first, _) = create(&app, "1.00").await;
    let (second, _) = create(&app, "0.05").await;

    let (status, body) = send(&app, request(Method::GET, "/payments", "")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], first);
    assert_eq!(data[0]["amount"], "1.00");
    assert_eq!(data[1]["id"], second);
    assert_eq!(data[1]["amount"], "0.05");
    assert_eq!(json["links"]["self"], "/payments");
}

#[tokio::test]
async fn test_update_then_get() {
    let app = create_test_app().await;
    let (id, _) = create(&app, "100.21").await;
    let uri = format!("/payments/{id}");

    let (status, updated) = send(&app, request(Method::PUT, &uri, &payment_body("1.00"))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, request(Method::GET, &uri, "")).await;
    assert_eq!(updated, fetched);

    let json: Value = serde_json::from_slice(&fetched).unwrap();
    assert_eq!(json["data"]["amount"], "1.00");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = create_test_app().await;
    let (id, _) = create(&app, "5.00").await;
    let uri = format!("/payments/{id}");

    let (status, body) = send(&app, request(Method::DELETE, &uri, "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, request(Method::GET, &uri, "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, br#"{"status":"Resource not found."}"#.to_vec());

    let (status, _) = send(&app, request(Method::DELETE, &uri, "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_payloads_are_rejected() {
    let app = create_test_app().await;

    for body in [
        payment_body("-1.00"),
        payment_body("1.001"),
        payment_body("ten"),
        "{}".to_string(),
        r#"{"data":{}}"#.to_string(),
        r#"{"data":{"type":"Invoice","amount":"1.00"}}"#.to_string(),
    ] {
        let (status, _) = send(&app, request(Method::POST, "/payments", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
    }

    let (_, body) = send(&app, request(Method::GET, "/payments", "")).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_large_amount_survives_storage() {
    let app = create_test_app().await;

    let (id, _) = create(&app, "92233720368547758.07").await;
    let (_, body) = send(&app, request(Method::GET, &format!("/payments/{id}"), "")).await;

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["amount"], "92233720368547758.07");
}
