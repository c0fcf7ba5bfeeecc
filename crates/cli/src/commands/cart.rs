//! Cart commands.

use kanap_core::ProductId;
use kanap_storefront::pages::{AddToCartForm, CartPage, add_to_cart, change_quantity, delete_line};
use kanap_storefront::{AppError, StorefrontConfig};

/// Show the cart page.
pub async fn show(config: &StorefrontConfig) -> Result<(), AppError> {
    let cart = super::open_cart(config)?;
    let client = super::catalog_client(config)?;
    let page = CartPage::load(&client, &cart, config.language).await?;

    if page.is_empty() {
        tracing::info!("Votre panier est vide.");
        return Ok(());
    }

    for line in &page.lines {
        let line_total = line
            .line_total
            .map_or_else(|| "indisponible".to_string(), |total| total.to_string());
        tracing::info!(
            "{} - {} - {} x {} = {line_total}",
            line.name,
            line.color_label,
            line.unit_price,
            line.quantity,
        );
    }
    for line in &page.unavailable {
        tracing::warn!(
            "{} ({}) x {} : produit indisponible",
            line.item.product_id,
            line.item.color,
            line.item.quantity
        );
    }

    let total = page
        .total_price
        .map_or_else(|| "indisponible".to_string(), |total| total.to_string());
    tracing::info!("Total ({} articles) : {total}", page.total_quantity);
    Ok(())
}

/// Add a product to the cart after checking the color and quantity against
/// the catalog.
pub async fn add(
    config: &StorefrontConfig,
    product_id: &str,
    color: String,
    quantity: String,
) -> Result<(), AppError> {
    let id = ProductId::parse(product_id)?;
    let client = super::catalog_client(config)?;
    let product = client.get_product(&id).await?;

    let mut cart = super::open_cart(config)?;
    let item = add_to_cart(&mut cart, &product, &AddToCartForm { color, quantity })?;

    tracing::info!(
        "{} ({}) : {} dans le panier",
        product.name,
        item.color,
        item.quantity
    );
    Ok(())
}

/// Overwrite a cart line's quantity.
pub fn set(
    config: &StorefrontConfig,
    product_id: &str,
    color: &str,
    quantity: &str,
) -> Result<(), AppError> {
    let mut cart = super::open_cart(config)?;
    let item = change_quantity(&mut cart, product_id, color, quantity)?;

    tracing::info!("{} ({}) : quantité {}", item.product_id, item.color, item.quantity);
    Ok(())
}

/// Remove a cart line.
pub fn remove(config: &StorefrontConfig, product_id: &str, color: &str) -> Result<(), AppError> {
    let mut cart = super::open_cart(config)?;
    delete_line(&mut cart, product_id, color)?;

    tracing::info!("{product_id} ({color}) retiré du panier");
    Ok(())
}
