use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter};

/// Repository trait for Product persistence
///
/// Defines the data access interface for products. Implementations can use
/// different storage backends (PostgreSQL for production, in-memory for
/// development and tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its generated id
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// First product matching the filter, if any
    async fn find_first(&self, filter: ProductFilter) -> ProductResult<Option<Product>>;

    /// All products; an empty store yields an empty list
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Full-field replace of the row matching `product.id`
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Remove by id; Ok(false) when no row matched
    async fn delete_by_id(&self, id: i32) -> ProductResult<bool>;

    /// Check whether a product name is already taken
    async fn exists_by_name(&self, name: &str) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    rows: BTreeMap<i32, Product>,
    next_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(ref name) = filter.name {
        if &product.name != name {
            return false;
        }
    }
    if let Some(min) = filter.min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = filter.max_price {
        if product.price > max {
            return false;
        }
    }
    true
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        // Same guarantee the unique index gives the Postgres backend
        if state.rows.values().any(|p| p.name == input.name) {
            return Err(ProductError::DuplicateName(input.name));
        }

        state.next_id += 1;
        let product = Product {
            id: state.next_id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        };
        state.rows.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn find_first(&self, filter: ProductFilter) -> ProductResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .values()
            .find(|p| matches_filter(p, &filter))
            .cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        if let Some(other) = state
            .rows
            .values()
            .find(|p| p.id != product.id && p.name == product.name)
        {
            return Err(ProductError::DuplicateName(other.name.clone()));
        }

        match state.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                tracing::info!(product_id = product.id, "Updated product");
                Ok(product)
            }
            None => Err(ProductError::NotFound(product.id)),
        }
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let mut state = self.state.write().await;

        if state.rows.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let state = self.state.read().await;
        Ok(state.rows.values().any(|p| p.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> CreateProduct {
        CreateProduct {
            name: "Pen".to_string(),
            price: 1.5,
            quantity: 100,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_positive_id() {
        let repo = InMemoryProductRepository::new();

        let product = repo.insert(pen()).await.unwrap();
        assert!(product.id > 0);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected_without_changing_row_count() {
        let repo = InMemoryProductRepository::new();
        repo.insert(pen()).await.unwrap();

        let result = repo.insert(pen()).await;
        assert!(matches!(result, Err(ProductError::DuplicateName(_))));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_on_empty_store_returns_empty_vec() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_first_by_name_and_price_bounds() {
        let repo = InMemoryProductRepository::new();
        repo.insert(pen()).await.unwrap();
        repo.insert(CreateProduct {
            name: "Notebook".to_string(),
            price: 3.25,
            quantity: 10,
        })
        .await
        .unwrap();

        let by_name = repo
            .find_first(ProductFilter::by_name("Notebook"))
            .await
            .unwrap();
        assert_eq!(by_name.unwrap().name, "Notebook");

        let in_range = repo
            .find_first(ProductFilter {
                min_price: Some(2.0),
                max_price: Some(4.0),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(in_range.unwrap().name, "Notebook");

        let none = repo
            .find_first(ProductFilter::by_name("Stapler"))
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_returns_false() {
        let repo = InMemoryProductRepository::new();
        assert!(!repo.delete_by_id(99).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.insert(pen()).await.unwrap();

        let updated = repo
            .update(Product {
                id: created.id,
                name: "Pen".to_string(),
                price: 1.5,
                quantity: 50,
            })
            .await
            .unwrap();

        assert_eq!(updated.quantity, 50);
        assert_eq!(
            repo.get_by_id(created.id).await.unwrap().unwrap().quantity,
            50
        );
    }
}
