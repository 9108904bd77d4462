use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::extraction::extract_fields;

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractionRequest {
    pub(crate) text: String,
}

/// Router exposing field extraction over already-recognized document text.
pub fn document_router() -> Router {
    Router::new().route("/api/extract-fields", post(extract_handler))
}

pub(crate) async fn extract_handler(Json(request): Json<ExtractionRequest>) -> impl IntoResponse {
    let document = extract_fields(&request.text);
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": document,
        })),
    )
}
