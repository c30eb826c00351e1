//! HTTP handlers.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{ClassifyRequest, HealthResponse};
use crate::detector::Detector;

/// `POST /classify`
///
/// Every failure, including an unreadable body, answers with a JSON
/// `ErrorBody`.
pub async fn classify_handler(
    State(detector): State<Detector>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request = match ClassifyRequest::from_body(body) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    match detector.classify(&request.domain).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /health`
pub async fn health_handler(State(detector): State<Detector>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        vendors: detector.vendors().len(),
    })
}
