use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, ProductFilter},
    repository::ProductRepository,
};

/// PostgreSQL-backed implementation of ProductRepository.
///
/// The unique index on `products.name` is the authoritative duplicate
/// guard; the service's pre-check only exists for a friendlier fast path.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> ProductError {
    ProductError::Database(e.to_string())
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let name = input.name.clone();
        let active: entity::ActiveModel = input.into();

        let model = active.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ProductError::DuplicateName(name)
            } else {
                db_err(e)
            }
        })?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.into()))
    }

    async fn find_first(&self, filter: ProductFilter) -> ProductResult<Option<Product>> {
        let mut query = entity::Entity::find();

        if let Some(name) = filter.name {
            query = query.filter(entity::Column::Name.eq(name));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(entity::Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::Column::Price.lte(max_price));
        }

        let model = query
            .order_by_asc(entity::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let name = product.name.clone();
        let active: entity::ActiveModel = product.into();

        let model = active.update(&self.db).await.map_err(|e| {
            if matches!(e, DbErr::RecordNotUpdated) {
                ProductError::NotFound(id)
            } else if is_unique_violation(&e) {
                ProductError::DuplicateName(name)
            } else {
                db_err(e)
            }
        })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let exists = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();

        Ok(exists)
    }
}
