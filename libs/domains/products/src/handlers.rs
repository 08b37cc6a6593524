//! HTTP handlers for the Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::{ApiResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_products,
        get_product_by_id,
        create_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, CreateProduct)),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_all_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/{id}", get(get_product_by_id))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<Product>>),
        (status = 404, description = "The catalog is empty", body = ApiResponse<Vec<Product>>),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_all_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Response> {
    let products = service.list_products().await?;

    if products.is_empty() {
        let body = ApiResponse::<Vec<Product>>::failure("Products not found");
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    }

    let body = ApiResponse::with_data("Products retrieved successfully", products);
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.get_product(id).await?;
    Ok(Json(ApiResponse::with_data(
        "Product retrieved successfully",
        product,
    )))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Invalid body or duplicate name"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.create_product(input).await?;
    Ok(Json(ApiResponse::with_data(
        "Product has been added successfully",
        product,
    )))
}

/// Update an existing product (full replace, matched by id)
#[utoipa::path(
    put,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 400, description = "Invalid body or duplicate name"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.update_product(product).await?;
    Ok(Json(ApiResponse::with_data(
        "Product has been updated successfully",
        product,
    )))
}

/// Delete a product (matched by id)
#[utoipa::path(
    delete,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<Product>),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ProductResult<Json<ApiResponse<Product>>> {
    service.delete_product(product).await?;
    Ok(Json(ApiResponse::success(
        "Product has been deleted successfully",
    )))
}
