use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to the wire-facing Product
impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

// Conversion from a full Product (with id) to an ActiveModel, used for
// full-field replacement on update
impl From<crate::models::Product> for ActiveModel {
    fn from(product: crate::models::Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            price: Set(product.price),
            quantity: Set(product.quantity),
        }
    }
}

// Conversion from CreateProduct to an ActiveModel; the id stays unset so
// the database assigns it on insert
impl From<crate::models::CreateProduct> for ActiveModel {
    fn from(input: crate::models::CreateProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            quantity: Set(input.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateProduct, Product};
    use sea_orm::ActiveValue;

    #[test]
    fn test_model_to_product_round_trip() {
        let model = Model {
            id: 42,
            name: "Pen".to_string(),
            price: 1.5,
            quantity: 100,
        };

        let product: Product = model.clone().into();
        assert_eq!(product.id, model.id);
        assert_eq!(product.name, model.name);
        assert_eq!(product.price, model.price);
        assert_eq!(product.quantity, model.quantity);

        let active: ActiveModel = product.into();
        assert_eq!(active.id, ActiveValue::Set(42));
        assert_eq!(active.name, ActiveValue::Set("Pen".to_string()));
        assert_eq!(active.price, ActiveValue::Set(1.5));
        assert_eq!(active.quantity, ActiveValue::Set(100));
    }

    #[test]
    fn test_create_product_leaves_id_unset() {
        let input = CreateProduct {
            name: "Notebook".to_string(),
            price: 3.25,
            quantity: 10,
        };

        let active: ActiveModel = input.into();
        assert_eq!(active.id, ActiveValue::NotSet);
        assert_eq!(active.name, ActiveValue::Set("Notebook".to_string()));
    }
}
