//! JSON extractor with automatic validation using the validator crate.

use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiResponse;

/// JSON extractor that validates the body before the handler runs.
///
/// Deserialization failures and `validator::Validate` failures both reject
/// the request with a 400 envelope, so handlers only ever see well-formed
/// input.
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProduct>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Axum reports schema mismatches as 422; this API treats every
        // malformed body as a 400
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let body = ApiResponse::<()>::failure(e.body_text());
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        data.validate().map_err(|e| {
            let body = ApiResponse::<()>::failure(format!("Request validation failed: {}", e));
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
