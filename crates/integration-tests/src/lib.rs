//! Integration tests for the Kanap storefront.
//!
//! Each test gets a [`TestContext`]: a `mockito` server standing in for the
//! product API and a temporary directory holding the cart document. Nothing
//! outside the process is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kanap-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - listing to confirmation, end to end
//! - `cart_resilience` - catalog outages and stored record compatibility

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::path::PathBuf;

use kanap_cart::{CartStore, JsonFileStorage};
use kanap_storefront::{CatalogClient, StorefrontConfig};
use serde_json::{Value, json};
use tempfile::TempDir;
use url::Url;

/// A mocked product API plus an on-disk cart.
pub struct TestContext {
    pub server: mockito::ServerGuard,
    pub config: StorefrontConfig,
    _dir: TempDir,
}

impl TestContext {
    /// Start a mock API under `/api` and point the cart at a fresh directory.
    pub async fn new() -> Self {
        let server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();

        let api_url = Url::parse(&format!("{}/api", server.url())).unwrap();
        let mut config = StorefrontConfig::with_api_url(api_url);
        config.cart_file = dir.path().join("cart.json");

        Self {
            server,
            config,
            _dir: dir,
        }
    }

    /// A fresh catalog client. Each one has its own cache.
    pub fn client(&self) -> CatalogClient {
        CatalogClient::new(&self.config).unwrap()
    }

    /// Open the cart document, as a new CLI invocation would.
    pub fn open_cart(&self) -> CartStore<JsonFileStorage> {
        CartStore::new(JsonFileStorage::open(&self.config.cart_file).unwrap())
    }

    /// Path of the cart document.
    pub fn cart_file(&self) -> PathBuf {
        self.config.cart_file.clone()
    }

    /// Serve `products` from `GET /api/products` and each one from
    /// `GET /api/products/{id}`.
    pub async fn serve_products(&mut self, products: &[Value]) {
        self.server
            .mock("GET", "/api/products")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(products.to_vec()).to_string())
            .create_async()
            .await;

        for product in products {
            let id = product["_id"].as_str().unwrap();
            self.server
                .mock("GET", format!("/api/products/{id}").as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(product.to_string())
                .create_async()
                .await;
        }
    }
}

/// A product as the API sends it.
pub fn product(id: &str, name: &str, price: u32, colors: &[&str]) -> Value {
    json!({
        "colors": colors,
        "_id": id,
        "name": name,
        "price": price,
        "imageUrl": format!("http://localhost:3000/images/{id}.jpeg"),
        "description": format!("Description de {name}"),
        "altTxt": format!("Photo de {name}")
    })
}
