//! Ambient routes: greeting, echo, probes, metrics and request correlation.

mod common;

use common::{test_config, Doubles, TestApp};
use property_service::services::MockTextProvider;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn index_returns_greeting() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        "Hello, this is the GET request test!"
    );
}

#[tokio::test]
async fn test_endpoint_echoes_payload() {
    let app = TestApp::spawn(&Doubles::default()).await;
    let payload = json!({"anything": [1, 2, 3], "nested": {"ok": true}});

    let response = app.post_json("/test", &payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "POST request received!");
    assert_eq!(body["data_received"], payload);
}

#[tokio::test]
async fn malformed_json_uses_error_envelope() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let response = app
        .client
        .post(format!("{}/test", app.address))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_and_readiness_report_ok() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let health: Value = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "property-service");

    let ready = app
        .client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);
    let ready: Value = ready.json().await.unwrap();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["catalog_size"], 4);
    assert_eq!(ready["text_provider"]["status"], "ok");
}

#[tokio::test]
async fn unhealthy_text_provider_degrades_readiness() {
    let doubles = Doubles {
        text_provider: Arc::new(MockTextProvider::new(false)),
        ..Doubles::default()
    };
    let app = TestApp::spawn(&doubles).await;

    let response = app
        .client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let ready: Value = response.json().await.unwrap();
    assert_eq!(ready["status"], "degraded");
    assert_eq!(ready["catalog_size"], 4);
    assert_eq!(ready["text_provider"]["status"], "unavailable");
    assert!(ready["text_provider"]["error"].is_string());
}

#[tokio::test]
async fn readiness_checks_openai_models_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let app = TestApp::spawn_with_config(test_config(&server.uri())).await;

    let ready: Value = app
        .client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["text_provider"]["model"], "gpt-4");
}

#[tokio::test]
async fn metrics_are_exposed_as_text() {
    property_service::services::init_metrics().unwrap();
    let app = TestApp::spawn(&Doubles::default()).await;

    app.post_json("/search_properties", &json!({})).await;

    let response = app
        .client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("property_search_results"));
}

#[tokio::test]
async fn request_id_is_propagated() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .header("origin", "http://frontend.example")
        .send()
        .await
        .unwrap();

    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
