//! Handler tests for the Products domain
//!
//! These verify the HTTP surface end to end over the in-memory repository:
//! request deserialization, envelope serialization, status codes, and error
//! responses, without needing a live database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_get_all_on_empty_catalog_returns_404_envelope() {
    let app = app();

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let envelope: axum_helpers::ApiResponse<Vec<Product>> =
        json_body(response.into_body()).await;
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Products not found");
}

#[tokio::test]
async fn test_create_product_returns_success_envelope_with_id() {
    let app = app();

    let request = json_request(
        "POST",
        "/",
        json!({ "name": "Pen", "price": 1.5, "quantity": 100 }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let envelope: axum_helpers::ApiResponse<Product> = json_body(response.into_body()).await;
    assert!(envelope.success);
    assert_eq!(envelope.message, "Product has been added successfully");

    let product = envelope.data.unwrap();
    assert!(product.id > 0);
    assert_eq!(product.name, "Pen");
}

#[tokio::test]
async fn test_create_product_validates_body_before_service() {
    let app = app();

    // Empty name and negative price must be rejected with 400
    let request = json_request(
        "POST",
        "/",
        json!({ "name": "", "price": -1.0, "quantity": 100 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Malformed body (missing fields) is also a 400
    let request = json_request("POST", "/", json!({ "name": "Pen" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_name_returns_400_envelope() {
    let app = app();

    let body = json!({ "name": "Pen", "price": 1.5, "quantity": 100 });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: axum_helpers::ApiResponse<Product> = json_body(response.into_body()).await;
    assert!(!envelope.success);
    assert!(envelope.message.contains("already used as a product name"));

    // Row count must be unchanged: exactly one product in the list
    let response = app.oneshot(get_request("/")).await.unwrap();
    let envelope: axum_helpers::ApiResponse<Vec<Product>> =
        json_body(response.into_body()).await;
    assert_eq!(envelope.data.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_by_id_missing_returns_404() {
    let app = app();

    let response = app.oneshot(get_request("/42")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let envelope: axum_helpers::ApiResponse<Product> = json_body(response.into_body()).await;
    assert!(!envelope.success);
    assert!(envelope.message.contains("Product not found"));
}

#[tokio::test]
async fn test_update_missing_id_returns_404_without_side_effects() {
    let app = app();

    let request = json_request(
        "PUT",
        "/",
        json!({ "id": 42, "name": "Pen", "price": 1.5, "quantity": 50 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Store still empty
    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_id_returns_404() {
    let app = app();

    let request = json_request(
        "DELETE",
        "/",
        json!({ "id": 42, "name": "Pen", "price": 1.5, "quantity": 50 }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_product_lifecycle() {
    let app = app();

    // POST a new product
    let request = json_request(
        "POST",
        "/",
        json!({ "name": "Pen", "price": 1.5, "quantity": 100 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: axum_helpers::ApiResponse<Product> = json_body(response.into_body()).await;
    let created = envelope.data.unwrap();
    assert!(created.id > 0);

    // GET list contains the new item
    let response = app.clone().oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: axum_helpers::ApiResponse<Vec<Product>> =
        json_body(response.into_body()).await;
    let products = envelope.data.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, created.id);

    // PUT the same id with a new quantity
    let request = json_request(
        "PUT",
        "/",
        json!({ "id": created.id, "name": "Pen", "price": 1.5, "quantity": 50 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // GET by id reflects the update
    let response = app
        .clone()
        .oneshot(get_request(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: axum_helpers::ApiResponse<Product> = json_body(response.into_body()).await;
    assert_eq!(envelope.data.unwrap().quantity, 50);

    // DELETE it
    let request = json_request(
        "DELETE",
        "/",
        json!({ "id": created.id, "name": "Pen", "price": 1.5, "quantity": 50 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: axum_helpers::ApiResponse<Product> = json_body(response.into_body()).await;
    assert!(envelope.success);
    assert_eq!(envelope.message, "Product has been deleted successfully");
    assert!(envelope.data.is_none());

    // GET by id is now a 404
    let response = app
        .oneshot(get_request(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
