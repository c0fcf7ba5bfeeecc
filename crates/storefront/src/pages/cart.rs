//! Cart page: line details, totals, quantity changes and deletion.

use std::collections::HashMap;

use kanap_cart::{CartError, CartStore, Storage};
use kanap_core::{Color, Language, LineItem, Price, ProductId, Quantity, translate_color};
use tracing::{instrument, warn};

use crate::catalog::{CatalogClient, Product};
use crate::error::AppError;

/// One cart line joined with its product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub product_id: ProductId,
    /// Color as stored in the cart.
    pub color: Color,
    /// Color as shown to the shopper.
    pub color_label: String,
    pub name: String,
    pub image_url: String,
    pub alt_txt: String,
    pub unit_price: Price,
    pub quantity: u32,
    /// `None` when the line total overflows.
    pub line_total: Option<Price>,
}

impl CartLineView {
    fn new(item: LineItem, product: &Product, language: Language) -> Self {
        Self {
            color_label: translate_color(item.color.as_str(), Language::English, language)
                .to_string(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            alt_txt: product.alt_txt.clone(),
            unit_price: product.price,
            line_total: product.price.checked_times(item.quantity),
            quantity: item.quantity,
            product_id: item.product_id,
            color: item.color,
        }
    }
}

/// A cart line whose product could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableLine {
    pub item: LineItem,
    /// What went wrong, for logs and diagnostics.
    pub reason: String,
}

/// Everything the cart page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPage {
    pub lines: Vec<CartLineView>,
    pub unavailable: Vec<UnavailableLine>,
    pub total_quantity: u64,
    /// `None` when a line has no known price or the total overflows.
    pub total_price: Option<Price>,
}

impl CartPage {
    /// Read the cart and fetch the product behind every line.
    ///
    /// A product that cannot be fetched is listed in `unavailable`; its line
    /// stays in the cart and still counts towards `total_quantity`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the cart itself cannot be read.
    #[instrument(skip(client, cart))]
    pub async fn load<S: Storage>(
        client: &CatalogClient,
        cart: &CartStore<S>,
        language: Language,
    ) -> Result<Self, CartError> {
        let mut lines = Vec::new();
        let mut unavailable = Vec::new();
        let mut prices: HashMap<ProductId, Price> = HashMap::new();

        for item in cart.list()? {
            match client.get_product(&item.product_id).await {
                Ok(product) => {
                    prices.insert(item.product_id.clone(), product.price);
                    lines.push(CartLineView::new(item, &product, language));
                }
                Err(e) => {
                    warn!(
                        product_id = %item.product_id,
                        error = %e,
                        "Cart product unavailable"
                    );
                    unavailable.push(UnavailableLine {
                        item,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let total_price = match cart.total_price(&prices) {
            Ok(total) => Some(total),
            Err(CartError::PriceUnavailable { .. }) => None,
            Err(e @ CartError::PriceOverflow { .. }) => {
                warn!(error = %e, "Cart total unavailable");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            lines,
            unavailable,
            total_quantity: cart.total_quantity()?,
            total_price,
        })
    }

    /// Whether the page has nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.unavailable.is_empty()
    }
}

/// Apply a quantity typed into a cart line.
///
/// # Errors
///
/// Returns an error if `raw` is not a whole number in 1-100 or the line is
/// not in the cart. The cart is unchanged on error.
pub fn change_quantity<S: Storage>(
    cart: &mut CartStore<S>,
    product_id: &str,
    color: &str,
    raw: &str,
) -> Result<LineItem, AppError> {
    let quantity = Quantity::parse(raw.trim())?;
    Ok(cart.set_quantity(product_id, color, quantity.get())?)
}

/// Delete a cart line. Deleting a line that is not there does nothing.
///
/// # Errors
///
/// Returns an error if the cart cannot be written.
pub fn delete_line<S: Storage>(
    cart: &mut CartStore<S>,
    product_id: &str,
    color: &str,
) -> Result<(), AppError> {
    Ok(cart.remove(product_id, color)?)
}
