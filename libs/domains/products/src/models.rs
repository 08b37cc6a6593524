use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product as exposed at the API boundary.
///
/// The same fields are persisted; the sea-orm entity in [`crate::entity`]
/// maps to and from this type field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the database on insert
    #[validate(range(min = 1))]
    pub id: i32,
    /// Product name, unique across all products
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Unit price
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Units in stock
    #[validate(range(min = 0))]
    pub quantity: i32,
}

/// DTO for creating a new product.
///
/// Carries no id; the id is always database-assigned. A client-supplied
/// id in the request body is ignored by deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

/// Filter for first-match product lookups
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductFilter {
    /// Exact name match
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    /// Filter matching products by exact name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
