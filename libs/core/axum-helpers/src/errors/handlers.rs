use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::ApiResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the fallback handler so unknown routes get the same envelope
/// shape as every other response.
pub async fn not_found() -> Response {
    let body = Json(ApiResponse::<()>::failure(
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
