//! Checkout commands.

use kanap_core::ContactForm;
use kanap_storefront::pages::{confirmation_url, order_id_from_url, place_order};
use kanap_storefront::{AppError, StorefrontConfig};

/// Place an order for the cart.
pub async fn place(config: &StorefrontConfig, form: ContactForm) -> Result<(), AppError> {
    let cart = super::open_cart(config)?;
    let client = super::catalog_client(config)?;
    let confirmation = place_order(&client, &cart, form).await?;

    tracing::info!("Commande validée ! Votre numéro de commande est : {}", confirmation.order_id);
    tracing::info!("{}", confirmation_url(&confirmation.order_id));
    Ok(())
}

/// Show the order id carried by a confirmation link.
pub fn confirmation(url: &str) -> Result<(), AppError> {
    let order_id = order_id_from_url(url)
        .ok_or_else(|| AppError::BadRequest(format!("no order id in {url}")))?;

    tracing::info!("Commande validée ! Votre numéro de commande est : {order_id}");
    Ok(())
}
