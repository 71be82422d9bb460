//! Department API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use shared::error::{AppError, AppResult};
use shared::models::{CreateDepartment, EmployeeResponse, ResponseId};

use super::extract::{IdPath, JsonBody};
use super::write_failure;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/departments", post(create))
        .route("/departments/{id}/employees", get(list_employees))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateDepartment>,
) -> AppResult<(StatusCode, Json<ResponseId>)> {
    tracing::debug!(?data, "Create department request");
    let company_id = data.company_id;

    let id = state.service.create_department(data).await.map_err(|e| {
        tracing::error!(company_id, error = %e, "Failed to create department");
        write_failure(e)
    })?;

    tracing::info!(department_id = id, company_id, "Department created");
    Ok((StatusCode::CREATED, Json(ResponseId { id })))
}

pub async fn list_employees(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.service.list_department_employees(id).await.map_err(|e| {
        tracing::warn!(department_id = id, error = %e, "Failed to list department employees");
        AppError::from(e)
    })?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}
