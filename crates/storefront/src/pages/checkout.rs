//! Checkout: turn the contact form and the cart into an order.

use kanap_cart::{CartError, CartStore, Storage};
use kanap_core::{ContactErrors, ContactForm};
use thiserror::Error;
use tracing::{info, instrument};

use crate::catalog::{CatalogClient, CatalogError, OrderConfirmation, OrderRequest};

/// Why an order was not placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more contact fields failed validation.
    #[error(transparent)]
    InvalidContact(#[from] ContactErrors),

    #[error("the cart is empty")]
    EmptyCart,

    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    #[error("order submission failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Validate the contact form and submit the cart as an order.
///
/// The order lists each distinct product id in the cart once. The cart is
/// left as it is, whether the order goes through or not.
///
/// # Errors
///
/// Returns [`CheckoutError::InvalidContact`] with every failing field,
/// [`CheckoutError::EmptyCart`] if there is nothing to order, or an error from
/// the cart or the product API.
#[instrument(skip(client, cart, form))]
pub async fn place_order<S: Storage>(
    client: &CatalogClient,
    cart: &CartStore<S>,
    form: ContactForm,
) -> Result<OrderConfirmation, CheckoutError> {
    let contact = form.validate()?;

    let products = cart.product_ids()?;
    if products.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let confirmation = client
        .submit_order(&OrderRequest { contact, products })
        .await?;

    info!(order_id = %confirmation.order_id, "Checkout complete");
    Ok(confirmation)
}
