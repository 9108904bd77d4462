use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::EligibilityRequest;
use super::report::EligibilityReport;
use super::service::EligibilityService;
use crate::error::AppError;

/// Router builder exposing the eligibility check and catalog endpoints.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/check-eligibility", post(check_handler))
        .route("/api/schemes", get(list_handler))
        .route("/api/schemes/:name", get(scheme_handler))
        .with_state(service)
}

pub(crate) async fn check_handler(
    State(service): State<Arc<EligibilityService>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Result<axum::Json<EligibilityReport>, AppError> {
    let report = service.check(request)?;
    Ok(axum::Json(report))
}

pub(crate) async fn list_handler(State(service): State<Arc<EligibilityService>>) -> Response {
    let schemes = service.catalog().schemes();
    let payload = json!({
        "success": true,
        "count": schemes.len(),
        "schemes": schemes,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn scheme_handler(
    State(service): State<Arc<EligibilityService>>,
    Path(name): Path<String>,
) -> Response {
    match service.catalog().get(&name) {
        Some(scheme) => {
            let payload = json!({
                "success": true,
                "scheme": scheme,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "success": false,
                "message": "Scheme not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
