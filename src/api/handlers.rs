//! HTTP request handlers for the employee payroll API.
//!
//! This module contains the router and the handler functions for all API
//! endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::EmployeeId;

use super::auth::require_api_token;
use super::request::{CalculateSalaryRequest, CreateEmployeeRequest, EditEmployeeRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
///
/// `/health` is always open; the employee routes require the bearer token
/// when the state carries one.
pub fn create_router(state: AppState) -> Router {
    let employees = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route("/employees/:id/calculate", post(calculate_salary))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_token,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(employees)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for GET /employees.
async fn list_employees(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();

    let employees = state
        .service()
        .list_active()
        .await
        .map_err(|err| failure(correlation_id, "list", err))?;

    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Listed active employees"
    );
    Ok((StatusCode::OK, Json(employees)).into_response())
}

/// Handler for GET /employees/{id}.
async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(correlation_id, path)?;

    let employee = state
        .service()
        .get_active(id)
        .await
        .map_err(|err| failure(correlation_id, "get", err))?;

    Ok((StatusCode::OK, Json(employee)).into_response())
}

/// Handler for POST /employees.
///
/// Responds 201 with the stored employee and a `Location` header.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let created = state
        .service()
        .create_employee(request.into())
        .await
        .map_err(|err| failure(correlation_id, "create", err))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/employees/{}", created.id))],
        Json(created),
    )
        .into_response())
}

/// Handler for PUT /employees/{id}.
async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EditEmployeeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, employee_id = id, "Processing update request");

    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    if let Some(body_id) = request.id.filter(|body_id| *body_id != id) {
        warn!(
            correlation_id = %correlation_id,
            path_id = id,
            body_id,
            "Body id does not match path id"
        );
        return Err(ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!(
                "Body id {} does not match path id {}",
                body_id, id
            )),
        ));
    }

    let updated = state
        .service()
        .update_employee(id, request.into())
        .await
        .map_err(|err| failure(correlation_id, "update", err))?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// Handler for DELETE /employees/{id}.
///
/// Responds with the id of the soft-deleted employee.
async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(correlation_id, path)?;

    let deleted = state
        .service()
        .delete_employee(id)
        .await
        .map_err(|err| failure(correlation_id, "delete", err))?;

    Ok((StatusCode::OK, Json(deleted)).into_response())
}

/// Handler for POST /employees/{id}/calculate.
async fn calculate_salary(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<CalculateSalaryRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, employee_id = id, "Processing calculation request");

    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let start_time = Instant::now();
    let result = state
        .service()
        .calculate_salary(id, request.into())
        .await
        .map_err(|err| failure(correlation_id, "calculate", err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        amount = %result.amount,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    Ok((StatusCode::OK, Json(result)).into_response())
}

/// Extracts the employee id from the path, rejecting non-numeric ids.
fn employee_id(
    correlation_id: Uuid,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> Result<EmployeeId, ApiErrorResponse> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid employee id in path"
            );
            Err(ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error("Employee id must be an integer"),
            ))
        }
    }
}

/// Maps a JSON body rejection onto a 400 response.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
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
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

/// Logs a failed service call and converts it into a response.
fn failure(correlation_id: Uuid, operation: &'static str, err: PayrollError) -> ApiErrorResponse {
    match &err {
        PayrollError::Storage { .. }
        | PayrollError::ConfigNotFound { .. }
        | PayrollError::ConfigParseError { .. } => {
            error!(correlation_id = %correlation_id, operation, error = %err, "Request failed");
        }
        _ => {
            warn!(correlation_id = %correlation_id, operation, error = %err, "Request rejected");
        }
    }
    err.into()
}
