//! HTTP API
//!
//! Routes under `/api/v1` plus `/health`. Handlers decode with
//! [`extract::JsonBody`] / [`extract::IdPath`], call [`EmployeeService`],
//! and turn failures into [`AppError`].
//!
//! [`EmployeeService`]: crate::usecase::EmployeeService

pub mod company;
pub mod department;
pub mod employee;
pub mod extract;
pub mod health;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::repository::RepoError;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// uuid v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Failure of a create/edit call: a missing row, a conflict and an outage
/// keep their own status, everything else is a bad request.
pub(crate) fn write_failure(err: RepoError) -> AppError {
    match err {
        RepoError::Database(_) => AppError::validation(),
        other => AppError::from(other),
    }
}

/// `/api/v1` routes without middleware or state
pub fn build_router() -> Router<AppState> {
    let v1 = Router::new()
        .merge(employee::router())
        .merge(company::router())
        .merge(department::router());

    Router::new()
        .nest("/api/v1", v1)
        .merge(health::router())
}

/// Fully configured application with middleware and state
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
