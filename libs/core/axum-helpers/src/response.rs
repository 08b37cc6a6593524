//! Uniform response envelope shared by every API endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope carrying a success flag, a human-readable message,
/// and an optional payload.
///
/// Success and failure responses share this shape so clients always parse
/// the same structure regardless of outcome.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "message": "Product has been added successfully",
///   "data": { "id": 1, "name": "Pen", "price": 1.5, "quantity": 100 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable outcome description
    pub message: String,
    /// Optional payload; absent on failures and message-only successes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope with a payload.
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Successful envelope without a payload.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failed envelope; never carries a payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
