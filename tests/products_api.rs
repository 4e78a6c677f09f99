//! HTTP surface tests over the in-memory backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use catalog_server::db::repository::MemoryRepository;
use catalog_server::{build_router, Config, ServerState, StorageBackend};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_config(admin_token: Option<&str>) -> Config {
    Config {
        http_port: 0,
        storage: StorageBackend::Memory,
        data_dir: "./data".into(),
        admin_token: admin_token.map(String::from),
        environment: "test".into(),
        log_level: "warn".into(),
    }
}

fn app(admin_token: Option<&str>) -> Router {
    let state = ServerState::new(
        test_config(admin_token),
        Arc::new(MemoryRepository::with_fixtures()),
    );
    build_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn listing_returns_products_with_pagination_block() {
    let app = app(None);
    let response = app.oneshot(get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 50);
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["pagination"]["totalPages"], 1);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn listing_coerces_bad_paging_and_applies_filters() {
    let app = app(None);
    let response = app
        .clone()
        .oneshot(get("/api/products?page=abc&limit=-2&category=Screens&inStock=true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 50);
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    for product in products {
        assert_eq!(product["category"], "Screens");
        assert_eq!(product["inStock"], true);
    }

    // Huge but syntactically valid paging values stay a normal request
    let response = app
        .clone()
        .oneshot(get("/api/products?page=9999999999999999999&limit=50"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["products"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["pagination"]["hasMore"], false);

    // Search narrows further and total follows the filtered count
    let response = app
        .oneshot(get("/api/products?search=vibrating&limit=1"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["products"][0]["slug"], "vibrating-screen-x1");
}

#[tokio::test]
async fn slug_lookup_and_not_found_mapping() {
    let app = app(None);
    let response = app
        .clone()
        .oneshot(get("/api/products/slug/vibrating-screen-x1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Vibrating Screen X1");

    let response = app
        .oneshot(get("/api/products/slug/no-such-product"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn mutations_require_the_admin_token_when_configured() {
    let app = app(Some("secret"));
    let payload = json!({"name": "Impact Crusher I90", "category": "Crushers"});

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/products", None, payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E3001");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/products",
            Some("wrong"),
            payload.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(json_request("POST", "/api/products", Some("secret"), payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["slug"], "impact-crusher-i90");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let app = app(None);
    let response = app
        .oneshot(json_request("POST", "/api/products", None, json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn bulk_delete_reports_mixed_outcomes() {
    let app = app(None);

    let listing = app.clone().oneshot(get("/api/products")).await.unwrap();
    let body = body_json(listing).await;
    let real_id = body["products"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/products/bulk-delete",
            None,
            json!({"ids": [real_id, "missing-id"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 1);
    assert_eq!(body["failed"], 1);
    assert_eq!(body["errors"][0], "Product not found: missing-id");

    // Empty id list is a validation failure
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products/bulk-delete",
            None,
            json!({"ids": []}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn category_scoped_delete_over_http() {
    let app = app(None);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/by-category/Conveyors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["deleted"], 1);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/by-category/Conveyors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["deleted"], 0);
    assert_eq!(body["message"], "No products found in category Conveyors");
}

#[tokio::test]
async fn content_pages_merge_and_reject_unknown_keys() {
    let app = app(None);

    let response = app
        .clone()
        .oneshot(get("/api/content/home"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["hero"]["title"], "Process more, downtime less");

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/api/content/home",
            None,
            json!({"hero": {"title": "New headline"}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["hero"]["title"], "New headline");
    // Subtitle lived under a replaced top-level key, so it is gone
    assert!(body["hero"].get("subtitle").is_none());

    let response = app.oneshot(get("/api/content/pricing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stats_shape_matches_the_catalog() {
    let app = app(None);
    let response = app.oneshot(get("/api/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["totalProducts"], 5);
    assert_eq!(
        body["activeProducts"].as_u64().unwrap() + body["inactiveProducts"].as_u64().unwrap(),
        5
    );
    let categories = body["categoryStats"].as_array().unwrap();
    assert_eq!(categories.len(), 3);
    for entry in categories {
        assert!(entry["categoryId"].is_string());
        assert!(entry["categoryName"].is_string());
        assert_eq!(
            entry["activeProducts"].as_u64().unwrap()
                + entry["inactiveProducts"].as_u64().unwrap(),
            entry["totalProducts"].as_u64().unwrap()
        );
    }
}

#[tokio::test]
async fn enquiry_intake_is_public_and_starts_pending() {
    let app = app(Some("secret"));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/enquiries",
            None,
            json!({
                "type": "product",
                "name": "A. Buyer",
                "email": "buyer@example.com",
                "message": "Price for the X1?"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["type"], "product");

    // Listing them back stays admin-only
    let response = app.clone().oneshot(get("/api/enquiries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/enquiries")
                .header(header::AUTHORIZATION, "Bearer secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
