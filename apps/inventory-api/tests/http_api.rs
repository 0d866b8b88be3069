//! End-to-end tests: a real listener on an ephemeral port, driven by reqwest.

use std::sync::Arc;

use chrono::NaiveDate;
use inventory_api::{router, ApiConfig, AppState};
use inventory_core::FixedClock;
use inventory_store::SharedCatalog;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

// =============================================================================
// Harness
// =============================================================================

struct TestServer {
    base: String,
    client: reqwest::Client,
    clock: Arc<FixedClock>,
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

async fn spawn_server() -> TestServer {
    let clock = Arc::new(FixedClock::new(start_date()));
    let catalog = SharedCatalog::with_clock(clock.clone());
    let app = router(AppState::new(catalog, ApiConfig::default()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        clock,
    }
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn create(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.url("/products"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn create_ok(&self, body: Value) -> Value {
        let response = self.create(body).await;
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }

    async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        let status = response.status();
        let body = response.json().await.unwrap_or(Value::Null);
        (status, body)
    }

    async fn names(&self, path: &str) -> Vec<String> {
        let (status, body) = self.get_json(path).await;
        assert_eq!(status, StatusCode::OK, "GET {path} failed: {body}");
        body.as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    }
}

fn product(name: &str, category: &str, price: f64, qty: i64) -> Value {
    json!({
        "name": name,
        "category": category,
        "unitPrice": price,
        "quantityInStock": qty,
    })
}

// =============================================================================
// Scenario
// =============================================================================

#[tokio::test]
async fn test_pepsi_chips_scenario() {
    let server = spawn_server().await;

    let pepsi = server.create_ok(product("Pepsi", "Drink", 11.0, 15)).await;
    assert_eq!(pepsi["id"], 1);
    assert_eq!(pepsi["createdAt"], "2026-03-01");
    assert_eq!(pepsi["updatedAt"], "2026-03-01");

    let chips = server.create_ok(product("Chips", "Snack", 3.5, 0)).await;
    assert_eq!(chips["id"], 2);

    assert_eq!(server.names("/products?inStock=false").await, vec!["Chips"]);

    let (status, metrics) = server.get_json("/products/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(metrics["totalStock"], 15);
    assert_eq!(metrics["totalValue"], 165.0);
    assert_eq!(metrics["avgPrice"], 11.0);
    assert_eq!(metrics["byCategory"]["Snack"]["avgPrice"], 0.0);
    assert_eq!(metrics["byCategory"]["Drink"]["totalValue"], 165.0);
}

#[tokio::test]
async fn test_get_returns_created_fields() {
    let server = spawn_server().await;
    let created = server
        .create_ok(json!({
            "name": "Milk",
            "category": "Dairy",
            "unitPrice": 1.25,
            "quantityInStock": 4,
            "expirationDate": "2026-03-10",
        }))
        .await;

    let (status, fetched) = server.get_json("/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["expirationDate"], "2026-03-10");
    assert_eq!(fetched["unitPrice"], 1.25);
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_update_preserves_id_and_created_at() {
    let server = spawn_server().await;
    server.create_ok(product("Pepsi", "Drink", 11.0, 15)).await;

    server.clock.advance_days(3);
    let response = server
        .client
        .put(server.url("/products/1"))
        .json(&product("Pepsi Max", "Soda", 12.5, 7))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();

    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "Pepsi Max");
    assert_eq!(updated["category"], "Soda");
    assert_eq!(updated["unitPrice"], 12.5);
    assert_eq!(updated["quantityInStock"], 7);
    assert_eq!(updated["createdAt"], "2026-03-01");
    assert_eq!(updated["updatedAt"], "2026-03-04");
}

#[tokio::test]
async fn test_delete_removes_from_list_and_metrics() {
    let server = spawn_server().await;
    server.create_ok(product("Pepsi", "Drink", 11.0, 15)).await;
    server.create_ok(product("Chips", "Snack", 3.5, 2)).await;

    let response = server
        .client
        .delete(server.url("/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(server.names("/products").await, vec!["Chips"]);
    let (_, metrics) = server.get_json("/products/metrics").await;
    assert_eq!(metrics["totalStock"], 2);
    assert!(metrics["byCategory"].get("Drink").is_none());

    let (status, _) = server.get_json("/products/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // ids are never handed out twice
    let next = server.create_ok(product("Cola", "Drink", 2.0, 1)).await;
    assert_eq!(next["id"], 3);
}

#[tokio::test]
async fn test_stock_endpoints() {
    let server = spawn_server().await;
    server.create_ok(product("Chips", "Snack", 3.5, 0)).await;

    let response = server
        .client
        .put(server.url("/products/1/instock"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantityInStock"], 10);

    let response = server
        .client
        .put(server.url("/products/1/instock?quantity=42"))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantityInStock"], 42);

    let response = server
        .client
        .put(server.url("/products/1/instock?quantity=-5"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantity"], "quantity cannot be negative");

    let response = server
        .client
        .post(server.url("/products/1/outofstock"))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantityInStock"], 0);
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_validation_reports_every_field() {
    let server = spawn_server().await;

    let response = server
        .create(json!({ "name": "   ", "unitPrice": 0.0, "quantityInStock": -1 }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["name"], "name is required");
    assert_eq!(body["category"], "category is required");
    assert_eq!(body["unitPrice"], "unitPrice must be positive");
    assert_eq!(body["quantityInStock"], "quantityInStock cannot be negative");

    let response = server
        .create(product(&"x".repeat(121), "Drink", 1.0, 1))
        .await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "name must be at most 120 characters");

    // nothing was stored
    assert!(server.names("/products").await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = spawn_server().await;

    let response = server
        .client
        .post(server.url("/products"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["body"].is_string());

    let response = server
        .create(json!({ "name": "Pepsi", "category": "Drink", "unitPrice": "cheap", "quantityInStock": 1 }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let server = spawn_server().await;

    for path in ["/products/99", "/products/abc"] {
        let response = server.client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.text().await.unwrap().is_empty());
    }

    let response = server
        .client
        .put(server.url("/products/99"))
        .json(&product("Pepsi", "Drink", 1.0, 1))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server
        .client
        .delete(server.url("/products/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server
        .client
        .post(server.url("/products/99/outofstock"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_invalid_body_before_lookup() {
    let server = spawn_server().await;
    server.create_ok(product("Pepsi", "Drink", 11.0, 15)).await;

    for path in ["/products/1", "/products/99"] {
        let response = server
            .client
            .put(server.url(path))
            .json(&json!({ "name": "", "category": "Drink", "unitPrice": -1.0, "quantityInStock": 1 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "PUT {path}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["name"], "name is required");
        assert_eq!(body["unitPrice"], "unitPrice must be positive");
    }

    let (_, stored) = server.get_json("/products/1").await;
    assert_eq!(stored["name"], "Pepsi");
}

#[tokio::test]
async fn test_bad_list_parameters() {
    let server = spawn_server().await;

    for query in ["page=-1", "size=0", "inStock=maybe", "page=x"] {
        let (status, body) = server.get_json(&format!("/products?{query}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");
        assert!(body.is_object(), "query {query}");
    }
}

#[tokio::test]
async fn test_blank_parameters_use_defaults() {
    let server = spawn_server().await;
    for i in 0..12 {
        server.create_ok(product(&format!("P{i}"), "X", 1.0, 0)).await;
    }

    let names = server.names("/products?inStock=&page=&size=").await;
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "P0");

    let response = server
        .client
        .put(server.url("/products/1/instock?quantity="))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantityInStock"], 10);
}

// =============================================================================
// Query Engine over HTTP
// =============================================================================

#[tokio::test]
async fn test_page_size_above_one_hundred() {
    let server = spawn_server().await;
    for i in 1..=250 {
        server.create_ok(product(&format!("P{i}"), "X", 1.0, 1)).await;
    }

    let (status, body) = server.get_json("/products?page=1&size=120").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (121..=240).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_filters_sorting_and_paging() {
    let server = spawn_server().await;
    server.create_ok(product("Pepsi", "Drink", 11.0, 15)).await;
    server.create_ok(product("Chips", "Snack", 3.5, 0)).await;
    server.create_ok(product("pear juice", "Drink", 4.0, 3)).await;
    server.create_ok(product("Apple", "Fruit", 0.5, 40)).await;
    server.create_ok(product("Cola", "Drink", 4.0, 0)).await;

    assert_eq!(
        server.names("/products?name=PE").await,
        vec!["Pepsi", "pear juice"]
    );
    assert_eq!(
        server.names("/products?category=Snack&category=Fruit").await,
        vec!["Chips", "Apple"]
    );
    assert_eq!(
        server.names("/products?category=Drink&inStock=true").await,
        vec!["Pepsi", "pear juice"]
    );
    assert_eq!(
        server
            .names("/products?sortBy=unitPrice&order=desc&sortBy2=name")
            .await,
        vec!["Pepsi", "Cola", "pear juice", "Chips", "Apple"]
    );
    assert_eq!(
        server.names("/products?sortBy=name&page=1&size=2").await,
        vec!["Cola", "pear juice"]
    );
    assert!(server.names("/products?page=100&size=10").await.is_empty());
}

#[tokio::test]
async fn test_expiration_sort_keeps_undated_last() {
    let server = spawn_server().await;
    server.create_ok(product("NoDate", "X", 1.0, 1)).await;
    server
        .create_ok(json!({
            "name": "Early", "category": "X", "unitPrice": 1.0,
            "quantityInStock": 1, "expirationDate": "2026-04-01",
        }))
        .await;
    server
        .create_ok(json!({
            "name": "Late", "category": "X", "unitPrice": 1.0,
            "quantityInStock": 1, "expirationDate": "2026-09-01",
        }))
        .await;

    assert_eq!(
        server.names("/products?sortBy=expirationDate").await,
        vec!["Early", "Late", "NoDate"]
    );
    assert_eq!(
        server.names("/products?sortBy=expirationDate&order=desc").await,
        vec!["Late", "Early", "NoDate"]
    );
}

#[tokio::test]
async fn test_health_reports_product_count() {
    let server = spawn_server().await;
    server.create_ok(product("Pepsi", "Drink", 11.0, 15)).await;

    let (status, body) = server.get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "products": 1 }));
}
