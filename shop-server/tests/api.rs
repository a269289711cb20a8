//! REST API integration tests
//!
//! Drives the real router in-process via `tower::ServiceExt::oneshot`,
//! one seeded state per test.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shop_server::{Config, ServerState, build_app};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::with_overrides(0);
    let state = ServerState::initialize(&config);
    build_app().with_state(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn lists_seeded_electronics_sorted_by_price() {
    let app = app();

    let response = app
        .oneshot(get("/api/products?category=electronics&sort=price-low"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let prices: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();

    assert_eq!(prices, vec![24.99, 29.99, 34.99, 49.99, 59.99, 89.99]);
}

#[tokio::test]
async fn create_product_parses_form_strings_and_defaults() {
    let app = app();

    let payload = json!({
        "name": "X",
        "price": "10",
        "category": "Y",
        "image": "http://i",
        "description": "d",
        "stock": "5"
    });
    let response = app
        .clone()
        .oneshot(send_json("POST", "/api/products", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    // Seed occupies ids 1-8, so the first created product gets "9"
    assert_eq!(body["id"], "9");
    assert_eq!(body["originalPrice"], 10.0);
    assert_eq!(body["discount"], 0);
    assert_eq!(body["price"], 10.0);
    assert_eq!(body["stock"], 5);

    // The new product is visible through the listing
    let response = app.oneshot(get("/api/products/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_product_rejects_non_numeric_price() {
    let app = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/products",
            json!({ "name": "X", "price": "free" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_merges_partial_fields() {
    let app = app();

    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            "/api/products/1",
            json!({ "price": "44.99", "stock": "10" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], "1");
    assert_eq!(body["price"], 44.99);
    assert_eq!(body["stock"], 10);
    // Untouched fields survive the merge
    assert_eq!(body["name"], "Wireless Bluetooth Headphones");
    assert_eq!(body["originalPrice"], 79.99);
}

#[tokio::test]
async fn delete_unknown_id_is_404_and_leaves_catalog_unchanged() {
    let app = app();

    let before = body_json(app.clone().oneshot(get("/api/products")).await.unwrap())
        .await
        .as_array()
        .unwrap()
        .len();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Product not found");

    let after = body_json(app.oneshot(get("/api/products")).await.unwrap())
        .await
        .as_array()
        .unwrap()
        .len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn delete_existing_product_returns_message() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/8")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Product deleted successfully"
    );

    let response = app.oneshot(get("/api/products/8")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_flow_assigns_sequential_ids_and_lists_back() {
    let app = app();

    let items = json!([
        {
            "id": "1", "name": "Wireless Bluetooth Headphones", "price": 49.99,
            "originalPrice": 79.99, "discount": 38, "rating": 4.5, "reviews": 1234,
            "image": "http://i", "category": "Electronics", "description": "d",
            "stock": 50, "sold": 2500, "quantity": 1
        },
        {
            "id": "5", "name": "Wireless Mouse", "price": 24.99,
            "originalPrice": 39.99, "discount": 38, "rating": 4.4, "reviews": 1567,
            "image": "http://i", "category": "Electronics", "description": "d",
            "stock": 80, "sold": 3200, "quantity": 1
        }
    ]);
    let payload = json!({
        "items": items,
        "total": 65.97,
        "customerInfo": {
            "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com",
            "phone": "555-0100", "address": "1 Analytical Way", "city": "London",
            "state": "LDN", "zipCode": "E1 6AN", "country": "UK"
        }
    });

    let response = app
        .clone()
        .oneshot(send_json("POST", "/api/orders", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], "1");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total"], 65.97);
    assert!(body["createdAt"].is_string());

    let body = body_json(app.oneshot(get("/api/orders")).await.unwrap()).await;
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], "1");
    assert_eq!(orders[0]["items"].as_array().unwrap().len(), 2);
    assert_eq!(orders[0]["customerInfo"]["firstName"], "Ada");
}

#[tokio::test]
async fn categories_are_unique_in_seed_order() {
    let app = app();

    let body = body_json(app.oneshot(get("/api/categories")).await.unwrap()).await;
    assert_eq!(body, json!(["Electronics", "Wearables", "Accessories"]));
}

#[tokio::test]
async fn unknown_product_is_404_with_message() {
    let app = app();

    let response = app.oneshot(get("/api/products/404")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Product not found");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
