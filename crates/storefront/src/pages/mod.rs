//! Page models for the storefront.
//!
//! Each page module turns catalog data and cart state into plain structs a
//! renderer can print. Nothing here formats output.
//!
//! - [`listing`] - every product, as cards linking to the product page
//! - [`product`] - one product with its color options and the add-to-cart form
//! - [`cart`] - cart lines with totals, quantity changes and deletion
//! - [`checkout`] - contact validation and order submission
//! - [`confirmation`] - the order id handed from checkout to confirmation

pub mod cart;
pub mod checkout;
pub mod confirmation;
pub mod listing;
pub mod product;

pub use cart::{CartLineView, CartPage, UnavailableLine, change_quantity, delete_line};
pub use checkout::{CheckoutError, place_order};
pub use confirmation::{confirmation_url, order_id_from_url};
pub use listing::{ProductCard, load_listing};
pub use product::{
    AddToCartError, AddToCartForm, ColorOption, ProductPage, add_to_cart, product_id_from_url,
};

use url::form_urlencoded;

/// Value of the first `name` parameter in a page URL's query string.
///
/// Accepts absolute URLs as well as relative links such as
/// `product.html?id=42`. The fragment is ignored.
pub(crate) fn query_param(url: &str, name: &str) -> Option<String> {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    let (_, query) = without_fragment.split_once('?')?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
