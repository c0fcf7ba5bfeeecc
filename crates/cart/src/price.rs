//! Unit price resolution for cart totals.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use kanap_core::{Price, ProductId};

/// Resolves a product's unit price.
///
/// Prices come from the product catalog; the cart never stores them.
pub trait PriceLookup {
    /// Unit price of `product_id`, or `None` if it is unknown.
    fn unit_price(&self, product_id: &ProductId) -> Option<Price>;
}

impl<T: PriceLookup + ?Sized> PriceLookup for &T {
    fn unit_price(&self, product_id: &ProductId) -> Option<Price> {
        (**self).unit_price(product_id)
    }
}

impl<S: BuildHasher> PriceLookup for HashMap<ProductId, Price, S> {
    fn unit_price(&self, product_id: &ProductId) -> Option<Price> {
        self.get(product_id).copied()
    }
}

impl<S: BuildHasher> PriceLookup for HashMap<String, Price, S> {
    fn unit_price(&self, product_id: &ProductId) -> Option<Price> {
        self.get(product_id.as_str()).copied()
    }
}

impl PriceLookup for BTreeMap<ProductId, Price> {
    fn unit_price(&self, product_id: &ProductId) -> Option<Price> {
        self.get(product_id).copied()
    }
}

impl PriceLookup for BTreeMap<String, Price> {
    fn unit_price(&self, product_id: &ProductId) -> Option<Price> {
        self.get(product_id.as_str()).copied()
    }
}
