//! Employee API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use shared::error::{AppError, AppResult, MessageResponse};
use shared::models::{CreateEmployee, EmployeeResponse, ResponseId};

use super::extract::{IdPath, JsonBody};
use super::write_failure;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", post(create))
        .route("/employees/{id}", get(get_by_id).patch(update).delete(delete))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateEmployee>,
) -> AppResult<(StatusCode, Json<ResponseId>)> {
    tracing::debug!(?data, "Create employee request");
    let company_id = data.company_id;
    let department_id = data.department_id;

    let id = state.service.create_employee(data).await.map_err(|e| {
        tracing::error!(company_id, department_id, error = %e, "Failed to create employee");
        write_failure(e)
    })?;

    tracing::info!(employee_id = id, company_id, "Employee created");
    Ok((StatusCode::CREATED, Json(ResponseId { id })))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.service.get_employee(id).await.map_err(|e| {
        tracing::warn!(employee_id = id, error = %e, "Failed to get employee");
        AppError::from(e)
    })?;
    Ok(Json(employee.into()))
}

pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(data): JsonBody<CreateEmployee>,
) -> AppResult<Json<MessageResponse>> {
    tracing::debug!(employee_id = id, ?data, "Update employee request");
    if data.department.is_some() {
        tracing::warn!(employee_id = id, "Department object is only accepted on create");
        return Err(AppError::bad_request());
    }

    state.service.edit_employee(id, data).await.map_err(|e| {
        tracing::error!(employee_id = id, error = %e, "Failed to update employee");
        write_failure(e)
    })?;

    tracing::info!(employee_id = id, "Employee updated");
    Ok(Json(MessageResponse::new("employee updated")))
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.service.delete_employee(id).await.map_err(|e| {
        tracing::error!(employee_id = id, error = %e, "Failed to delete employee");
        AppError::from(e)
    })?;

    tracing::info!(employee_id = id, "Employee deleted");
    Ok(Json(MessageResponse::new("employee deleted")))
}
