//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

/// Product service providing business logic operations.
///
/// Handles validation and guard reads, and orchestrates repository calls.
/// Every operation returns a `ProductResult`; storage failures never
/// escape as panics or raw errors.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product.
    ///
    /// The name-uniqueness pre-check gives a friendly error message on the
    /// common path; the storage-layer unique index still catches the race
    /// where two concurrent creates pass the check together.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(&input.name).await? {
            return Err(ProductError::DuplicateName(input.name));
        }

        let product = self.repository.insert(input).await?;

        if product.id <= 0 {
            return Err(ProductError::Database(format!(
                "insert returned non-positive id {}",
                product.id
            )));
        }

        Ok(product)
    }

    /// List all products; an empty catalog yields an empty list
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// First product matching the filter, if any
    #[instrument(skip(self, filter))]
    pub async fn find_product(&self, filter: ProductFilter) -> ProductResult<Option<Product>> {
        self.repository.find_first(filter).await
    }

    /// Replace every field of the product matching `product.id`
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn update_product(&self, product: Product) -> ProductResult<Product> {
        product
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        // Guard read so an unknown id reports "not found" instead of a
        // storage-layer update error
        if self.repository.get_by_id(product.id).await?.is_none() {
            return Err(ProductError::NotFound(product.id));
        }

        self.repository.update(product).await
    }

    /// Delete the product matching `product.id`
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn delete_product(&self, product: Product) -> ProductResult<()> {
        if self.repository.get_by_id(product.id).await?.is_none() {
            return Err(ProductError::NotFound(product.id));
        }

        self.repository.delete_by_id(product.id).await?;
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
