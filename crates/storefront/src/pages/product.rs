//! Product page: details, color options and the add-to-cart form.

use kanap_cart::{CartError, CartStore, Storage};
use kanap_core::{Color, Language, LineItem, ProductId, Quantity, QuantityError, translate_color};
use thiserror::Error;
use tracing::instrument;

use super::query_param;
use crate::catalog::{CatalogClient, CatalogError, Product};

/// Read the product id from a product page URL's `id` parameter.
#[must_use]
pub fn product_id_from_url(url: &str) -> Option<ProductId> {
    query_param(url, "id").and_then(|id| ProductId::parse(&id).ok())
}

/// One entry of the color dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOption {
    /// Value stored in the cart, as the API spells it.
    pub value: Color,
    /// Label shown to the shopper.
    pub label: String,
}

/// Everything the product page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub product: Product,
    pub color_options: Vec<ColorOption>,
}

impl ProductPage {
    /// Build the page for an already fetched product.
    #[must_use]
    pub fn new(product: Product, language: Language) -> Self {
        let color_options = product
            .colors
            .iter()
            .map(|color| ColorOption {
                value: color.clone(),
                label: translate_color(color.as_str(), Language::English, language).to_string(),
            })
            .collect();

        Self {
            product,
            color_options,
        }
    }

    /// Fetch a product and build its page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or another error
    /// if the catalog cannot be reached.
    pub async fn load(
        client: &CatalogClient,
        id: &ProductId,
        language: Language,
    ) -> Result<Self, CatalogError> {
        let product = client.get_product(id).await?;
        Ok(Self::new(product, language))
    }
}

/// Why an add-to-cart submission was refused.
#[derive(Debug, Error)]
pub enum AddToCartError {
    #[error("no color selected")]
    MissingColor,

    #[error("{color} is not available for this product")]
    UnknownColor { color: String },

    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Raw values of the add-to-cart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddToCartForm {
    pub color: String,
    pub quantity: String,
}

impl AddToCartForm {
    /// Check the form against the product it was submitted for.
    ///
    /// # Errors
    ///
    /// Returns an error if no color is picked, the color is not one of the
    /// product's, or the quantity is not a whole number in 1-100.
    pub fn parse(&self, product: &Product) -> Result<(Color, Quantity), AddToCartError> {
        if self.color.is_empty() {
            return Err(AddToCartError::MissingColor);
        }
        let color = product
            .colors
            .iter()
            .find(|c| c.as_str() == self.color)
            .cloned()
            .ok_or_else(|| AddToCartError::UnknownColor {
                color: self.color.clone(),
            })?;
        let quantity = Quantity::parse(self.quantity.trim())?;
        Ok((color, quantity))
    }
}

/// Validate the form and add the selection to the cart.
///
/// The cart is untouched when validation fails.
///
/// # Errors
///
/// Returns an error if the form is invalid or the cart cannot be written.
#[instrument(skip(cart, product), fields(product_id = %product.id))]
pub fn add_to_cart<S: Storage>(
    cart: &mut CartStore<S>,
    product: &Product,
    form: &AddToCartForm,
) -> Result<LineItem, AddToCartError> {
    let (color, quantity) = form.parse(product)?;
    let item = cart.add_or_increment(product.id.as_str(), color.as_str(), quantity.get())?;
    Ok(item)
}
