use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::{
    build_service, build_service_with, complete_update, read_json_body, router_with_service,
    EchoAdvisor, StaticFeed,
};
use crate::eligibility::advice::offline_guidance;
use crate::eligibility::domain::Language;
use crate::eligibility::refresh::{FeedPayload, OfflineFeed};

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn farmer_profile_json() -> serde_json::Value {
    json!({
        "age": 35,
        "gender": "male",
        "residence": "rural",
        "occupation": "farmer",
        "landOwner": true,
        "houseType": "kutcha",
        "rationCard": "bpl",
        "annualIncome": 90000
    })
}

#[tokio::test]
async fn questions_endpoint_serves_the_full_flow() {
    let router = router_with_service(build_service());
    let response = router.oneshot(get("/api/v1/questions")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(9));
    assert_eq!(body["questions"][0]["field"], "age");
}

#[tokio::test]
async fn schemes_endpoint_serves_the_catalog() {
    let router = router_with_service(build_service());
    let response = router.oneshot(get("/api/v1/schemes")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["schemes"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["schemes"][0]["id"], "pm-kisan");
}

#[tokio::test]
async fn eligibility_endpoint_returns_one_verdict_per_scheme() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(post_json("/api/v1/eligibility", farmer_profile_json()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let results = body.as_array().expect("array of verdicts");
    assert_eq!(results.len(), 5);
    assert_eq!(results[0]["schemeId"], "pm-kisan");
    assert_eq!(results[0]["isEligible"], true);
    assert_eq!(results[0]["reasons"][0]["en"], "You meet all basic criteria.");
}

#[tokio::test]
async fn eligibility_endpoint_accepts_a_partial_profile() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(post_json("/api/v1/eligibility", json!({ "age": 65 })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let pension = &body.as_array().expect("verdicts")[2];
    assert_eq!(pension["schemeId"], "nsap-pension");
    assert_eq!(pension["isEligible"], false);
    assert_eq!(pension["reasons"][0]["en"], "Missing info");
}

#[tokio::test]
async fn refresh_endpoint_reports_no_update_when_offline() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(post_json("/api/v1/schemes/refresh", json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "updated": false }));
}

#[tokio::test]
async fn refresh_endpoint_applies_a_live_update() {
    let feed = StaticFeed {
        payload: FeedPayload {
            updates: vec![complete_update("pm-kisan")],
            source_urls: vec!["https://pib.gov.in/".to_string()],
        },
    };
    let service = build_service_with(feed, EchoAdvisor);
    let router = router_with_service(service.clone());

    let response = router
        .oneshot(post_json("/api/v1/schemes/refresh", json!({})))
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "updated": true }));

    assert_eq!(service.schemes()[0].benefit_short.en, "Updated benefit");
}

#[tokio::test]
async fn advice_endpoint_falls_back_when_offline() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(post_json(
            "/api/v1/advice",
            json!({ "document": "Aadhaar Card", "language": "hi" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["advice"], offline_guidance(Language::Hi));
}

#[tokio::test]
async fn advice_endpoint_relays_a_live_answer() {
    let service = build_service_with(OfflineFeed, EchoAdvisor);
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/advice",
            json!({ "document": "Bank Passbook", "language": "en" }),
        ))
        .await
        .expect("response");

    let body = read_json_body(response).await;
    assert_eq!(body["advice"], "Visit the tehsil office for your Bank Passbook.");
}

#[tokio::test]
async fn malformed_profile_is_rejected() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(post_json(
            "/api/v1/eligibility",
            json!({ "age": "thirty-five" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
