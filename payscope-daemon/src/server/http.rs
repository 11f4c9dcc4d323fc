//! HTTP routes and handlers for the payscope daemon API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use payscope_core::{
    AnalyticsReport, DataError, DepartmentSummary, EmployeeRecord, LevelCounts, ProcessedRecord,
    SkippedRow, Thresholds,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use super::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and status
        .route("/health", get(health))
        .route("/status", get(status))
        // Analytics views
        .route("/api/employees", get(employees))
        .route("/api/salary-analytics", get(salary_analytics))
        .route("/api/performance-analytics", get(performance_analytics))
        .route("/api/promotion-analytics", get(promotion_analytics))
        .route("/api/insights", get(insights))
        .route("/api/summary", get(summary))
        .route("/api/report", get(report))
        // Ad-hoc analysis of a posted dataset
        .route("/api/analyze", post(analyze))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

// =============================================================================
// Response Types
// =============================================================================

#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    duration_ms: u64,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T, duration_ms: u64) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
            duration_ms,
        })
    }

    fn err(error: impl ToString, duration_ms: u64) -> Json<Self> {
        Json(Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            duration_ms,
        })
    }
}

/// Data problems are the caller's to fix; an unreadable dataset is ours.
fn status_for(error: &DataError) -> StatusCode {
    if error.is_io() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Wrap a view result in the envelope with the matching status code.
fn respond<T: Serialize>(result: Result<T, DataError>, start: Instant) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, ApiResponse::ok(data, elapsed_ms(start))).into_response(),
        Err(e) => {
            warn!("Request failed: {}", e);
            (status_for(&e), ApiResponse::<T>::err(e, elapsed_ms(start))).into_response()
        }
    }
}

/// Malformed query strings still answer with the envelope.
fn bad_query(rejection: QueryRejection, start: Instant) -> Response {
    debug!("Rejected query: {}", rejection.body_text());
    (
        rejection.status(),
        ApiResponse::<()>::err(rejection.body_text(), elapsed_ms(start)),
    )
        .into_response()
}

/// Load the served dataset and compute one view from its records.
fn with_records<T>(
    state: &AppState,
    view: impl FnOnce(&[EmployeeRecord]) -> T,
) -> Result<T, DataError> {
    let loaded = state.load()?;
    debug!("Computing view over {} records", loaded.len());
    Ok(view(&loaded.records))
}

// =============================================================================
// Health & Status
// =============================================================================

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "payscope-daemon"
    }))
}

#[derive(Serialize)]
struct StatusResponse {
    status: String,
    version: String,
    data_path: String,
    record_count: Option<usize>,
    skipped_rows: Option<usize>,
    derived_mismatches: Option<usize>,
    load_error: Option<String>,
    thresholds: Thresholds,
    top_n: usize,
    uptime_seconds: f64,
}

async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let start = Instant::now();

    // A broken dataset is reported here rather than failing the status call.
    let (record_count, skipped_rows, derived_mismatches, load_error) = match state.load() {
        Ok(loaded) => (
            Some(loaded.len()),
            Some(loaded.skipped.len()),
            Some(loaded.derived_mismatches),
            None,
        ),
        Err(e) => (None, None, None, Some(e.to_string())),
    };

    let data = StatusResponse {
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_path: state.data_path.display().to_string(),
        record_count,
        skipped_rows,
        derived_mismatches,
        load_error,
        thresholds: *state.pipeline.thresholds(),
        top_n: state.pipeline.top_n(),
        uptime_seconds: state.uptime_seconds(),
    };

    ApiResponse::ok(data, elapsed_ms(start))
}

// =============================================================================
// Analytics Views
// =============================================================================

async fn employees(State(state): State<Arc<AppState>>) -> Response {
    let start = Instant::now();
    let result: Result<Vec<ProcessedRecord>, _> =
        with_records(&state, |records| state.pipeline.process(records));
    respond(result, start)
}

async fn salary_analytics(State(state): State<Arc<AppState>>) -> Response {
    let start = Instant::now();
    respond(
        with_records(&state, |records| state.pipeline.salary_analytics(records)),
        start,
    )
}

#[derive(Deserialize)]
struct PerformanceParams {
    /// Size of the top performer ranking; the configured default when absent
    top: Option<usize>,
}

async fn performance_analytics(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PerformanceParams>, QueryRejection>,
) -> Response {
    let start = Instant::now();
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(rejection, start),
    };
    let top_n = params.top.unwrap_or_else(|| state.pipeline.top_n());
    respond(
        with_records(&state, |records| {
            state.pipeline.performance_analytics_top(records, top_n)
        }),
        start,
    )
}

async fn promotion_analytics(State(state): State<Arc<AppState>>) -> Response {
    let start = Instant::now();
    respond(
        with_records(&state, |records| state.pipeline.promotion_analytics(records)),
        start,
    )
}

async fn insights(State(state): State<Arc<AppState>>) -> Response {
    let start = Instant::now();
    respond(
        with_records(&state, |records| state.pipeline.insights(records)),
        start,
    )
}

#[derive(Serialize)]
struct SummaryResponse {
    total_employees: usize,
    total_salary: f64,
    departments: BTreeMap<String, DepartmentSummary>,
    level_counts: LevelCounts,
    salary_performance_correlation: Option<f64>,
}

async fn summary(State(state): State<Arc<AppState>>) -> Response {
    let start = Instant::now();
    let result = with_records(&state, |records| {
        let departments = state.pipeline.summary(records);
        let performance = state.pipeline.performance_analytics(records);
        SummaryResponse {
            total_employees: records.len(),
            total_salary: departments.values().map(|d| d.total_salary).sum(),
            departments,
            level_counts: performance.level_counts,
            salary_performance_correlation: state
                .pipeline
                .insights(records)
                .salary_performance_correlation,
        }
    });
    respond(result, start)
}

async fn report(State(state): State<Arc<AppState>>) -> Response {
    let start = Instant::now();
    let result: Result<AnalyticsReport, _> =
        with_records(&state, |records| state.pipeline.run(records));
    respond(result, start)
}

// =============================================================================
// Ad-hoc Analysis
// =============================================================================

#[derive(Deserialize)]
struct AnalyzeParams {
    top: Option<usize>,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    report: AnalyticsReport,
    skipped: Vec<SkippedRow>,
    derived_mismatches: usize,
}

/// Analyze a CSV request body. The served dataset is left untouched.
async fn analyze(
    State(state): State<Arc<AppState>>,
    params: Result<Query<AnalyzeParams>, QueryRejection>,
    body: String,
) -> Response {
    let start = Instant::now();
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(rejection, start),
    };
    let pipeline = match params.top {
        Some(top) => state.pipeline.clone().with_top_n(top),
        None => state.pipeline.clone(),
    };

    let result = state.loader.load_str(&body).map(|loaded| AnalyzeResponse {
        report: pipeline.run(&loaded.records),
        skipped: loaded.skipped,
        derived_mismatches: loaded.derived_mismatches,
    });
    respond(result, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_errors() {
        let io = DataError::Io {
            path: "x.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(status_for(&io), StatusCode::INTERNAL_SERVER_ERROR);

        let data = DataError::MissingColumn {
            column: "salary".to_string(),
        };
        assert_eq!(status_for(&data), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
