//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod order;

use kanap_cart::{CartStore, JsonFileStorage};
use kanap_storefront::{AppError, CatalogClient, StorefrontConfig};

/// Open the cart persisted at the configured path.
fn open_cart(config: &StorefrontConfig) -> Result<CartStore<JsonFileStorage>, AppError> {
    let storage = JsonFileStorage::open(&config.cart_file)?;
    Ok(CartStore::new(storage))
}

fn catalog_client(config: &StorefrontConfig) -> Result<CatalogClient, AppError> {
    Ok(CatalogClient::new(config)?)
}
