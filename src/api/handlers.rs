//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounting::{
    attendance_summaries, compute_token_delta, filter_by_search, merge_kid_names,
    summarize_clusters, validate_record,
};
use crate::auth::verify_password;
use crate::models::Cluster;

use super::request::{AttendanceSubmission, EmployeeQuery, LoginRequest};
use super::response::{ApiError, ApiErrorResponse, LoginResponse, SaveAttendanceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route("/employees", get(list_employees_handler))
        .route("/attendance/:emp_id", post(save_attendance_handler))
        .route("/stats/clusters", get(cluster_stats_handler))
        .route("/stats/attendance", get(attendance_summary_handler))
        .with_state(state)
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /login endpoint.
///
/// Verifies operator credentials against the configured accounts.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    if let Some(user) = config.find_kiosk_user(&request.username) {
        if verify_password(&request.password, &user.password_hash) {
            info!(
                correlation_id = %correlation_id,
                username = %user.username,
                cluster = %user.cluster,
                "Kiosk operator logged in"
            );
            return Json(LoginResponse {
                username: user.username.clone(),
                display_name: user.display_name.clone(),
                cluster: Some(user.cluster),
            })
            .into_response();
        }
    } else {
        let admin = config.admin();
        if request.username == admin.username
            && verify_password(&request.password, &admin.password_hash)
        {
            info!(correlation_id = %correlation_id, "Administrator logged in");
            return Json(LoginResponse {
                username: admin.username.clone(),
                display_name: "Administrator".to_string(),
                cluster: None,
            })
            .into_response();
        }
    }

    warn!(
        correlation_id = %correlation_id,
        username = %request.username,
        "Login rejected"
    );
    (StatusCode::UNAUTHORIZED, Json(ApiError::invalid_credentials())).into_response()
}

/// Handler for the GET /employees endpoint.
///
/// Lists employees with their attendance records, optionally filtered by
/// cluster and narrowed by a search term.
async fn list_employees_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> impl IntoResponse {
    let cluster = match query.cluster.as_deref() {
        Some(value) => match value.parse::<Cluster>() {
            Ok(cluster) => Some(cluster),
            Err(err) => {
                let api_error: ApiErrorResponse = err.into();
                return api_error.into_response();
            }
        },
        None => None,
    };

    match state.store().get_employees(cluster) {
        Ok(employees) => {
            let employees = match query.search.as_deref() {
                Some(term) => filter_by_search(&employees, term),
                None => employees,
            };
            Json(employees).into_response()
        }
        Err(err) => {
            warn!(error = %err, "Failed to list employees");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /attendance/:emp_id endpoint.
///
/// The one sequenced operation: read the prior snapshot, validate the
/// submission, compute the token delta, persist the new record, and fold
/// any kiosk-entered kid names back into the roster.
async fn save_attendance_handler(
    State(state): State<AppState>,
    Path(emp_id): Path<String>,
    payload: Result<Json<AttendanceSubmission>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, emp_id = %emp_id, "Processing attendance save");

    let submission = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let entry = match state.store().get_employee(&emp_id) {
        Ok(Some(entry)) => entry,
        Ok(None) => {
            warn!(correlation_id = %correlation_id, emp_id = %emp_id, "Employee not found");
            let api_error: ApiErrorResponse = crate::error::EngineError::EmployeeNotFound {
                emp_id: emp_id.clone(),
            }
            .into();
            return api_error.into_response();
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Store read failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let record = submission.into_record(Utc::now());
    let normalized = match validate_record(&entry.employee, &record) {
        Ok(normalized) => normalized,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                emp_id = %emp_id,
                error = %err,
                "Attendance validation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    // The prior snapshot must be read before the overwrite; the store keeps
    // no history.
    let token_delta = compute_token_delta(entry.attendance_record.as_ref(), &normalized);

    if let Err(err) =
        state
            .store()
            .save_attendance_record(&emp_id, normalized.clone(), entry.employee.cluster)
    {
        warn!(correlation_id = %correlation_id, error = %err, "Attendance save failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    if let Some(kids) = merge_kid_names(&entry.employee.kids, &normalized.kid_names) {
        if let Err(err) = state.store().update_employee_children(&emp_id, kids) {
            warn!(correlation_id = %correlation_id, error = %err, "Kid roster update failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    }

    info!(
        correlation_id = %correlation_id,
        emp_id = %emp_id,
        present_count = normalized.present_member_count(),
        token_action = ?token_delta.action,
        token_amount = token_delta.amount,
        "Attendance saved"
    );
    Json(SaveAttendanceResponse {
        record: normalized,
        token_delta,
    })
    .into_response()
}

/// Handler for the GET /stats/clusters endpoint.
async fn cluster_stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().get_employees(None) {
        Ok(employees) => Json(summarize_clusters(&employees)).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to compute cluster stats");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the GET /stats/attendance endpoint.
async fn attendance_summary_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().get_employees(None) {
        Ok(employees) => Json(attendance_summaries(&employees)).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to compute attendance summaries");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
