//! Product API client.
//!
//! # Endpoints
//!
//! - `GET {api_url}/products` - every product
//! - `GET {api_url}/products/{id}` - one product
//! - `POST {api_url}/products/order` - place an order
//!
//! Products are cached in memory via `moka` for the configured TTL. Orders are
//! never cached. Requests are not retried; a failure goes straight back to the
//! caller, which decides what to tell the shopper.
//!
//! # Example
//!
//! ```rust,ignore
//! use kanap_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config)?;
//! let products = client.list_products().await?;
//! let product = client.get_product(&products[0].id).await?;
//! ```

mod cache;
pub mod types;

pub use types::{OrderConfirmation, OrderRequest, Product};

use std::sync::Arc;

use kanap_core::ProductId;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::StorefrontConfig;

use cache::{CacheKey, CacheValue};

/// Errors that can occur when talking to the product API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection refused, DNS, body read...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL cannot carry endpoint paths.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// Client for the product API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.catalog_cache_ttl)
            .build();

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.api_url.clone(),
                cache,
            }),
        })
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Decode a response, turning non-success statuses into errors.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Product API returned non-success status"
            );
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: response_text.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse product API response"
            );
            CatalogError::Parse(e)
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get every product in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let url = self.endpoint(&["products"])?;
        let response = self.inner.client.get(url).send().await?;
        let products: Vec<Product> = Self::read_json(response).await?;

        for product in &products {
            self.inner
                .cache
                .insert(
                    CacheKey::Product(product.id.clone()),
                    CacheValue::Product(Box::new(product.clone())),
                )
                .await;
        }
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the API answers 404, or another
    /// error if the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let cache_key = CacheKey::Product(id.clone());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let url = self.endpoint(&["products", id.as_str()])?;
        let response = self.inner.client.get(url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(format!("Product not found: {id}")));
        }

        let product: Product = Self::read_json(response).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    // =========================================================================
    // Order Methods
    // =========================================================================

    /// Place an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response has no
    /// order id.
    #[instrument(skip(self, order), fields(products = order.products.len()))]
    pub async fn submit_order(
        &self,
        order: &OrderRequest,
    ) -> Result<OrderConfirmation, CatalogError> {
        let url = self.endpoint(&["products", "order"])?;
        let response = self.inner.client.post(url).json(order).send().await?;
        let confirmation: OrderConfirmation = Self::read_json(response).await?;

        tracing::info!(order_id = %confirmation.order_id, "Order placed");
        Ok(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kanap_core::{ContactForm, Price};

    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "colors": ["Blue", "White"],
        "_id": "107fb5b7",
        "name": "Kanap Sinopé",
        "price": 1849,
        "imageUrl": "http://localhost:3000/images/kanap01.jpeg",
        "description": "Excepteur sint occaecat.",
        "altTxt": "Photo d'un canapé bleu"
    }"#;

    fn client_for(server: &mockito::Server, path: &str) -> CatalogClient {
        let url = Url::parse(&format!("{}{path}", server.url())).unwrap();
        CatalogClient::new(&StorefrontConfig::with_api_url(url)).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let url = Url::parse("http://localhost:3000/api").unwrap();
        let client = CatalogClient::new(&StorefrontConfig::with_api_url(url)).unwrap();
        assert_eq!(
            client.endpoint(&["products", "42"]).unwrap().as_str(),
            "http://localhost:3000/api/products/42"
        );

        let url = Url::parse("http://localhost:3000/api/").unwrap();
        let client = CatalogClient::new(&StorefrontConfig::with_api_url(url)).unwrap();
        assert_eq!(
            client.endpoint(&["products"]).unwrap().as_str(),
            "http://localhost:3000/api/products"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = Url::parse("http://localhost:3000/api").unwrap();
        let client = CatalogClient::new(&StorefrontConfig::with_api_url(url)).unwrap();
        assert_eq!(
            client.endpoint(&["products", "a/b c"]).unwrap().as_str(),
            "http://localhost:3000/api/products/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_get_product() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/products/107fb5b7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PRODUCT_JSON)
            .create_async()
            .await;

        let client = client_for(&server, "/api");
        let product = client
            .get_product(&ProductId::parse("107fb5b7").unwrap())
            .await
            .unwrap();

        assert_eq!(product.name, "Kanap Sinopé");
        assert_eq!(product.price, Price::from_euros(1849));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_product_is_cached() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/products/107fb5b7")
            .with_status(200)
            .with_body(PRODUCT_JSON)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, "/api");
        let id = ProductId::parse("107fb5b7").unwrap();
        let first = client.get_product(&id).await.unwrap();
        let second = client.get_product(&id).await.unwrap();

        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/products/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server, "/api");
        let result = client
            .get_product(&ProductId::parse("missing").unwrap())
            .await;

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/products")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server, "/api");
        let result = client.list_products().await;

        assert!(matches!(
            result,
            Err(CatalogError::Api { status: 500, ref message }) if message == "boom"
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/products")
            .with_status(200)
            .with_body(r#"{"not": "a list"}"#)
            .create_async()
            .await;

        let client = client_for(&server, "/api");
        assert!(matches!(
            client.list_products().await,
            Err(CatalogError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_list_products_fills_product_cache() {
        let mut server = mockito::Server::new_async().await;
        let list = server
            .mock("GET", "/api/products")
            .with_status(200)
            .with_body(format!("[{PRODUCT_JSON}]"))
            .expect(1)
            .create_async()
            .await;
        let single = server
            .mock("GET", "/api/products/107fb5b7")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, "/api");
        let products = client.list_products().await.unwrap();
        assert_eq!(products.len(), 1);

        client.list_products().await.unwrap();
        client.get_product(&products[0].id).await.unwrap();

        list.assert_async().await;
        single.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        // Nothing listens on the discard port.
        let url = Url::parse("http://127.0.0.1:9/api").unwrap();
        let client = CatalogClient::new(&StorefrontConfig::with_api_url(url)).unwrap();

        assert!(matches!(
            client.list_products().await,
            Err(CatalogError::Http(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/products/order")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "contact": {"firstName": "Ada", "email": "ada@example.com"},
                "products": ["107fb5b7"]
            })))
            .with_status(201)
            .with_body(r#"{"contact": {}, "products": [], "orderId": "order-1"}"#)
            .create_async()
            .await;

        let contact = ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address: "12 rue de la Paix 75002".to_string(),
            city: "Paris".to_string(),
            email: "ada@example.com".to_string(),
        }
        .validate()
        .unwrap();

        let client = client_for(&server, "/api");
        let confirmation = client
            .submit_order(&OrderRequest {
                contact,
                products: vec![ProductId::parse("107fb5b7").unwrap()],
            })
            .await
            .unwrap();

        assert_eq!(confirmation.order_id.as_str(), "order-1");
        mock.assert_async().await;
    }
}
