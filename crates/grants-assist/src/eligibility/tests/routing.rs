use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::eligibility::router::{check_handler, check_program_handler};
use crate::eligibility::{EligibilityService, ScoringPolicy};
use crate::programs::GrantCategory;

#[tokio::test]
async fn check_route_returns_ranked_summary() {
    let (service, profiles, catalog) = build_service();
    profiles.insert("user-1", complete_profile());
    catalog.insert(program(
        "sba_7a",
        Some(GrantCategory::SmallBusiness),
        Some("SBA"),
    ));
    catalog.insert(program("clinic", Some(GrantCategory::Healthcare), None));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/eligibility/user-1/check")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total_programs"), Some(&Value::from(2)));
    let programs = payload
        .get("programs")
        .and_then(Value::as_array)
        .expect("programs array");
    assert_eq!(programs.len(), 2);
    let scores: Vec<f64> = programs
        .iter()
        .filter_map(|verdict| verdict.get("match_score").and_then(Value::as_f64))
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn check_route_returns_zero_summary_without_profile() {
    let (service, _, catalog) = build_service();
    catalog.insert(program("sba_7a", Some(GrantCategory::SmallBusiness), None));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/eligibility/unknown/check")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total_programs"), Some(&Value::from(0)));
    assert_eq!(payload.get("eligible_count"), Some(&Value::from(0)));
}

#[tokio::test]
async fn program_route_returns_verdict_payload() {
    let (service, profiles, catalog) = build_service();
    profiles.insert("user-1", complete_profile());
    catalog.insert(program(
        "sba_7a",
        Some(GrantCategory::SmallBusiness),
        Some("SBA"),
    ));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/eligibility/user-1/check/sba_7a")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("program_id"), Some(&Value::from("sba_7a")));
    assert_eq!(payload.get("eligible"), Some(&Value::from(true)));
    assert_eq!(payload.get("match_score"), Some(&Value::from(100.0)));
    assert_eq!(
        payload.get("missing_requirements"),
        Some(&Value::Array(Vec::new()))
    );
}

#[tokio::test]
async fn program_route_returns_not_found_for_unknown_program() {
    let (service, profiles, _) = build_service();
    profiles.insert("user-1", complete_profile());
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/eligibility/user-1/check/nonexistent")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn program_route_returns_sentinel_without_profile() {
    let (service, _, catalog) = build_service();
    catalog.insert(program("sba_7a", Some(GrantCategory::SmallBusiness), None));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/eligibility/unknown/check/sba_7a")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("eligible"), Some(&Value::from(false)));
    assert_eq!(payload.get("match_score"), Some(&Value::from(0.0)));
    let first_requirement = payload
        .get("missing_requirements")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .and_then(Value::as_str)
        .unwrap_or_default();
    assert!(first_requirement.to_lowercase().contains("complete your profile"));
}

#[tokio::test]
async fn check_handler_maps_store_failures_to_internal_error() {
    let catalog = MemoryCatalog::default();
    let service = Arc::new(EligibilityService::new(
        Arc::new(UnavailableProfiles),
        Arc::new(catalog),
        ScoringPolicy::default(),
    ));

    let response = check_handler::<UnavailableProfiles, MemoryCatalog>(
        State(service),
        Path("user-1".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn program_handler_maps_store_failures_to_internal_error() {
    let catalog = MemoryCatalog::default();
    catalog.insert(program("sba_7a", Some(GrantCategory::SmallBusiness), None));
    let service = Arc::new(EligibilityService::new(
        Arc::new(UnavailableProfiles),
        Arc::new(catalog),
        ScoringPolicy::default(),
    ));

    let response = check_program_handler::<UnavailableProfiles, MemoryCatalog>(
        State(service),
        Path(("user-1".to_string(), "sba_7a".to_string())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
