mod common;

use common::{Doubles, TestApp};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn search(app: &TestApp, criteria: Value) -> Vec<Value> {
    let response = app.post_json("/search_properties", &criteria).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    body["properties"].as_array().cloned().unwrap()
}

fn ids(properties: &[Value]) -> Vec<&str> {
    properties
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn city_filter_is_case_insensitive() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let result = search(&app, json!({"city": "AUSTIN"})).await;

    assert_eq!(ids(&result), vec!["p1", "p3"]);
}

#[tokio::test]
async fn empty_criteria_return_whole_catalog_in_order() {
    let app = TestApp::spawn(&Doubles::default()).await;

    for criteria in [
        json!({}),
        json!({"city": "", "type": "", "bedrooms": 0}),
        json!({"city": null, "type": null, "bedrooms": null}),
    ] {
        let result = search(&app, criteria).await;
        assert_eq!(ids(&result), vec!["p1", "p2", "p3", "p4"]);
    }
}

#[tokio::test]
async fn combined_criteria_must_all_match() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let result = search(&app, json!({"type": "condo", "bedrooms": 2})).await;
    assert_eq!(ids(&result), vec!["p1", "p4"]);

    let result = search(&app, json!({"city": "austin", "type": "house", "bedrooms": 4})).await;
    assert_eq!(ids(&result), vec!["p3"]);

    let result = search(&app, json!({"city": "austin", "bedrooms": 3})).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn extra_listing_fields_are_preserved() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let result = search(&app, json!({"bedrooms": 4})).await;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0]["price"], 610000);
    assert_eq!(result[0]["features"], json!(["pool"]));
    assert_eq!(result[0]["type"], "House");
}

#[tokio::test]
async fn wrongly_typed_criterion_is_rejected() {
    let app = TestApp::spawn(&Doubles::default()).await;

    let response = app
        .post_json("/search_properties", &json!({"bedrooms": "two"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}
