//! End-to-end tests of the HTTP API

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use travel_budget::{
    CostEstimator, DestinationCatalog, DestinationRecord, TravelBudgetConfig, TripPlanner, web,
};

fn app() -> axum::Router {
    let catalog = DestinationCatalog::from_records(vec![
        DestinationRecord::new("Penang", "George Town", 100.0, 20.0, 15.0),
        DestinationRecord::new("Penang", "Batu Ferringhi", 400.0, 100.0, 80.0),
        DestinationRecord::new("Penang", "Balik Pulau", 60.0, 15.0, 10.0),
        DestinationRecord::new("Sabah", "Kota Kinabalu", 180.0, 40.0, 30.0),
    ])
    .unwrap();
    let planner = TripPlanner::new(Arc::new(catalog), CostEstimator::default());
    web::app(&TravelBudgetConfig::default(), planner)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_states() {
    let (status, body) = send(get("/api/states")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Penang", "Sabah"]));
}

#[tokio::test]
async fn test_list_cities() {
    let (status, body) = send(get("/api/states/Penang/cities")).await;
    assert_eq!(status, StatusCode::OK);
    let cities: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["city"].as_str().unwrap())
        .collect();
    assert_eq!(cities, vec!["George Town", "Batu Ferringhi", "Balik Pulau"]);
}

#[tokio::test]
async fn test_unknown_state_is_404() {
    let (status, body) = send(get("/api/states/Narnia/cities")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_search_state() {
    let (status, body) = send(post_json(
        "/api/search",
        json!({
            "state": "Penang",
            "start_date": "2025-08-01",
            "end_date": "2025-08-03",
            "total_budget": 600.0,
            "adults": 2,
            "children": 1
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 3);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["destination"]["city"], "George Town");
    assert_eq!(matches[0]["estimate"]["grand_total"], 501.0);
    assert_eq!(matches[0]["estimate"]["budget_diff"], 99.0);
    assert_eq!(matches[1]["destination"]["city"], "Balik Pulau");
    assert!(body["allocation_check"].is_null());
}

#[tokio::test]
async fn test_search_single_city_over_budget() {
    let (status, body) = send(post_json(
        "/api/search",
        json!({
            "state": "Penang",
            "city": "George Town",
            "start_date": "2025-08-01",
            "end_date": "2025-08-05",
            "total_budget": 600.0,
            "adults": 2,
            "children": 1,
            "allocation": {
                "accommodation_pct": 40,
                "food_pct": 20,
                "transport_pct": 20,
                "expenditure_pct": 20
            }
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let estimate = &body["matches"][0]["estimate"];
    assert_eq!(estimate["grand_total"], 835.0);
    assert_eq!(estimate["budget_diff"], -235.0);
    assert_eq!(estimate["affordable"], false);
    assert_eq!(body["allocation_check"], json!({"valid": true, "total_pct": 100}));
}

#[tokio::test]
async fn test_search_invalid_input_is_400() {
    let (status, body) = send(post_json(
        "/api/search",
        json!({
            "state": "Penang",
            "start_date": "2025-08-05",
            "end_date": "2025-08-01",
            "total_budget": 600.0,
            "adults": 1
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
    assert!(body["message"].as_str().unwrap().contains("end_date"));
}

#[tokio::test]
async fn test_search_negative_children_is_400() {
    let (status, body) = send(post_json(
        "/api/search",
        json!({
            "state": "Penang",
            "start_date": "2025-08-01",
            "total_budget": 600.0,
            "adults": 1,
            "children": -1
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
    assert!(body["message"].as_str().unwrap().contains("children"));
}

#[tokio::test]
async fn test_search_malformed_date_is_400() {
    let (status, body) = send(post_json(
        "/api/search",
        json!({
            "state": "Penang",
            "start_date": "01/08/2025",
            "total_budget": 600.0,
            "adults": 1
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_search_missing_content_type_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/search")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_search_unknown_city_is_404() {
    let (status, _) = send(post_json(
        "/api/search",
        json!({
            "state": "Sabah",
            "city": "Atlantis",
            "start_date": "2025-08-01",
            "total_budget": 600.0,
            "adults": 1
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_allocation() {
    let (status, body) = send(post_json(
        "/api/allocation/validate",
        json!({
            "accommodation_pct": 40,
            "food_pct": 20,
            "transport_pct": 20,
            "expenditure_pct": 10
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"valid": false, "total_pct": 90}));
}

#[tokio::test]
async fn test_validate_allocation_out_of_range() {
    let (status, body) = send(post_json(
        "/api/allocation/validate",
        json!({
            "accommodation_pct": 140,
            "food_pct": 0,
            "transport_pct": 0,
            "expenditure_pct": 0
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_validate_allocation_overflowing_pct_is_400() {
    let (status, body) = send(post_json(
        "/api/allocation/validate",
        json!({
            "accommodation_pct": 300,
            "food_pct": 0,
            "transport_pct": 0,
            "expenditure_pct": 0
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}
