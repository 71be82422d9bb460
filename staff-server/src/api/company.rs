//! Company API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use shared::error::{AppError, AppResult};
use shared::models::{CreateCompany, EmployeeResponse, ResponseId};
use validator::Validate;

use super::extract::{IdPath, JsonBody};
use super::write_failure;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/companies", post(create))
        .route("/companies/{id}/employees", get(list_employees))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateCompany>,
) -> AppResult<(StatusCode, Json<ResponseId>)> {
    if let Err(e) = data.validate() {
        tracing::warn!(error = %e, "Invalid company payload");
        return Err(AppError::validation());
    }

    let id = state.service.create_company(&data.name).await.map_err(|e| {
        tracing::error!(name = %data.name, error = %e, "Failed to create company");
        write_failure(e)
    })?;

    tracing::info!(company_id = id, name = %data.name, "Company created");
    Ok((StatusCode::CREATED, Json(ResponseId { id })))
}

pub async fn list_employees(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.service.list_company_employees(id).await.map_err(|e| {
        tracing::warn!(company_id = id, error = %e, "Failed to list company employees");
        AppError::from(e)
    })?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}
