//! Router integration tests.
//!
//! Each test writes a dataset into a temp directory, builds the router over it
//! and drives requests through `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use payscope_core::{sample, AnalyticsPipeline, Loader};
use payscope_daemon::{create_router, AppState};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn router_for(path: &Path) -> Router {
    create_router(AppState::new(
        path,
        Loader::new(),
        AnalyticsPipeline::default(),
    ))
}

fn sample_router() -> (TempDir, Router) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("employees.csv");
    fs::write(&path, sample::SAMPLE_CSV).expect("Failed to write dataset");
    let router = router_for(&path);
    (dir, router)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, json)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_health() {
    let (_dir, router) = sample_router();
    let (status, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_status_reports_dataset() {
    let (_dir, router) = sample_router();
    let (status, body) = get(router, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["record_count"], 5);
    assert_eq!(body["data"]["skipped_rows"], 0);
    assert!(body["data"]["load_error"].is_null());
}

#[tokio::test]
async fn test_employees_carry_derived_columns() {
    let (_dir, router) = sample_router();
    let (status, body) = get(router, "/api/employees").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["emp_id"], "E101");
    assert_eq!(rows[0]["performance_level"], "MEDIUM");
    assert_eq!(rows[0]["promotion_eligible"], false);
    assert_eq!(rows[2]["performance_level"], "HIGH");
}

#[tokio::test]
async fn test_salary_analytics() {
    let (_dir, router) = sample_router();
    let (status, body) = get(router, "/api/salary-analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["HR"]["average_salary"], 52000.0);
    assert_eq!(body["data"]["IT"]["average_salary"], 60000.0);
    assert_eq!(body["data"]["Sales"]["average_salary"], 42000.0);
    assert_eq!(body["data"]["IT"]["employee_count"], 2);
}

#[tokio::test]
async fn test_performance_top_param() {
    let (_dir, router) = sample_router();
    let (_, body) = get(router.clone(), "/api/performance-analytics").await;
    let top = body["data"]["top_performers"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["name"], "Amit");

    let (_, body) = get(router, "/api/performance-analytics?top=1").await;
    assert_eq!(body["data"]["top_performers"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_bad_top_param_uses_envelope() {
    let (_dir, router) = sample_router();
    let (status, body) = get(router.clone(), "/api/performance-analytics?top=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert!(body["error"].as_str().unwrap().contains("top"));

    let request = Request::post("/api/analyze?top=-1")
        .body(Body::from(sample::SAMPLE_CSV))
        .unwrap();
    let (status, body) = send(router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_promotion_and_insights() {
    let (_dir, router) = sample_router();
    let (_, body) = get(router.clone(), "/api/promotion-analytics").await;
    assert_eq!(body["data"]["eligible_count"], 3);

    let (_, body) = get(router, "/api/insights").await;
    let r = body["data"]["salary_performance_correlation"].as_f64().unwrap();
    assert!(r > 0.85 && r < 0.95);
}

#[tokio::test]
async fn test_summary_and_report() {
    let (_dir, router) = sample_router();
    let (_, body) = get(router.clone(), "/api/summary").await;
    assert_eq!(body["data"]["total_employees"], 5);
    assert_eq!(body["data"]["total_salary"], 256000.0);
    assert_eq!(body["data"]["level_counts"]["HIGH"], 2);

    let (_, body) = get(router, "/api/report").await;
    assert_eq!(body["data"]["record_count"], 5);
}

#[tokio::test]
async fn test_missing_dataset_is_server_error() {
    let dir = tempdir().unwrap();
    let router = router_for(&dir.path().join("absent.csv"));

    let (status, body) = get(router.clone(), "/api/report").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("absent.csv"));

    let (status, body) = get(router, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["record_count"].is_null());
}

#[tokio::test]
async fn test_bad_dataset_is_unprocessable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(
        &path,
        "emp_id,name,department,salary,years_exp,performance_score\nE1,Ana,IT,lots,3,80\n",
    )
    .unwrap();

    let (status, body) = get(router_for(&path), "/api/salary-analytics").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("salary"));
}

#[tokio::test]
async fn test_analyze_posted_csv() {
    let (_dir, router) = sample_router();
    let csv = "emp_id,name,department,salary,years_exp,performance_score\n\
               A1,Ana,Ops,50000,6,88\n\
               A2,Ben,Ops,,2,60\n";
    let request = Request::post("/api/analyze?top=1")
        .header("content-type", "text/csv")
        .body(Body::from(csv))
        .unwrap();

    let (status, body) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["report"]["record_count"], 1);
    assert_eq!(body["data"]["skipped"][0]["row"], 2);
    assert_eq!(body["data"]["skipped"][0]["missing"][0], "salary");
}

#[tokio::test]
async fn test_analyze_rejects_unknown_column() {
    let (_dir, router) = sample_router();
    let request = Request::post("/api/analyze")
        .body(Body::from("emp_id,nickname\nE1,x\n"))
        .unwrap();

    let (status, body) = send(router, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}
