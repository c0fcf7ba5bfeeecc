//! The cart store.

use std::collections::BTreeSet;

use kanap_core::{Color, ItemKey, LineItem, Price, ProductId, Quantity};
use tracing::{debug, instrument, warn};

use crate::error::{CartError, Result};
use crate::price::PriceLookup;
use crate::storage::Storage;

/// Persisted cart keyed by `(product id, color)`.
///
/// The store never holds two entries with the same identity.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Wrap a storage backend.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its storage.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Add `quantity` units of an identity, accumulating onto an existing
    /// entry.
    ///
    /// Returns the entry as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidInput`] if either identity field is empty,
    /// `quantity` is zero, or the accumulated quantity overflows.
    #[instrument(skip(self))]
    pub fn add_or_increment(
        &mut self,
        product_id: &str,
        color: &str,
        quantity: u32,
    ) -> Result<LineItem> {
        let (product_id, color) = parse_identity(product_id, color)?;
        if quantity == 0 {
            return Err(CartError::InvalidInput(
                "quantity must be positive".to_string(),
            ));
        }

        let key = ItemKey::new(&product_id, &color);
        let item = match self.load(&key, &product_id, &color)? {
            Some(mut existing) => {
                existing.quantity = existing.quantity.checked_add(quantity).ok_or_else(|| {
                    CartError::InvalidInput(format!("quantity overflow for {key}"))
                })?;
                existing
            }
            None => LineItem::new(product_id, color, quantity),
        };

        self.save(&key, &item)?;
        debug!(key = %key, quantity = item.quantity, "Cart item added");
        Ok(item)
    }

    /// Overwrite the quantity of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidInput`] if an identity field is empty or
    /// `new_quantity` is outside 1-100, and [`CartError::NotFound`] if no entry
    /// has this identity. The store is unchanged on error.
    #[instrument(skip(self))]
    pub fn set_quantity(
        &mut self,
        product_id: &str,
        color: &str,
        new_quantity: u32,
    ) -> Result<LineItem> {
        let (product_id, color) = parse_identity(product_id, color)?;
        let new_quantity =
            Quantity::new(new_quantity).map_err(|e| CartError::InvalidInput(e.to_string()))?;

        let key = ItemKey::new(&product_id, &color);
        let mut item = self
            .load(&key, &product_id, &color)?
            .ok_or_else(|| CartError::NotFound {
                key: key.to_string(),
            })?;

        item.quantity = new_quantity.get();
        self.save(&key, &item)?;
        debug!(key = %key, quantity = item.quantity, "Cart item quantity set");
        Ok(item)
    }

    /// Delete an entry. Deleting an identity that is not in the cart is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidInput`] if an identity field is empty, or a
    /// storage error.
    #[instrument(skip(self))]
    pub fn remove(&mut self, product_id: &str, color: &str) -> Result<()> {
        let (product_id, color) = parse_identity(product_id, color)?;
        let key = ItemKey::new(&product_id, &color);

        match self.load(&key, &product_id, &color) {
            Ok(Some(_)) => {
                self.storage.delete(key.as_str())?;
                debug!(key = %key, "Cart item removed");
                Ok(())
            }
            Ok(None) => Ok(()),
            // The key belongs to another identity; nothing of ours to delete.
            Err(CartError::KeyConflict { .. }) => Ok(()),
            // An unreadable record under our own key is still ours.
            Err(CartError::Corrupt { .. }) => {
                warn!(key = %key, "Removing corrupt cart record");
                self.storage.delete(key.as_str())?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// The entry with this identity, if present.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidInput`] if an identity field is empty, or an
    /// error if the stored record cannot be read.
    pub fn get(&self, product_id: &str, color: &str) -> Result<Option<LineItem>> {
        let (product_id, color) = parse_identity(product_id, color)?;
        let key = ItemKey::new(&product_id, &color);
        self.load(&key, &product_id, &color)
    }

    /// Snapshot of every entry. Order is not significant.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or a record is corrupt.
    pub fn list(&self) -> Result<Vec<LineItem>> {
        let keys = self.storage.keys()?;
        let mut items = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(raw) = self.storage.get(&key)? {
                items.push(decode(&key, &raw)?);
            }
        }
        Ok(items)
    }

    /// Number of entries.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn len(&self) -> Result<usize> {
        Ok(self.storage.keys()?.len())
    }

    /// Whether the cart has no entries.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Sum of quantities over all entries.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or a record is corrupt.
    pub fn total_quantity(&self) -> Result<u64> {
        Ok(self
            .list()?
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum())
    }

    /// Sum of unit price times quantity over all entries.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::PriceUnavailable`] for the first entry whose
    /// product has no price in `prices`. Such entries are never counted as
    /// free. Returns [`CartError::PriceOverflow`] if a line or the running
    /// total does not fit in a price.
    pub fn total_price(&self, prices: &impl PriceLookup) -> Result<Price> {
        self.list()?.iter().try_fold(Price::ZERO, |total, item| {
            let unit = prices.unit_price(&item.product_id).ok_or_else(|| {
                CartError::PriceUnavailable {
                    product_id: item.product_id.to_string(),
                }
            })?;
            unit
                .checked_times(item.quantity)
                .and_then(|line| total.checked_add(line))
                .ok_or_else(|| CartError::PriceOverflow {
                    product_id: item.product_id.to_string(),
                })
        })
    }

    /// Distinct product ids in the cart, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or a record is corrupt.
    pub fn product_ids(&self) -> Result<Vec<ProductId>> {
        let ids: BTreeSet<ProductId> = self
            .list()?
            .into_iter()
            .map(|item| item.product_id)
            .collect();
        Ok(ids.into_iter().collect())
    }

    fn load(&self, key: &ItemKey, product_id: &ProductId, color: &Color) -> Result<Option<LineItem>> {
        let Some(raw) = self.storage.get(key.as_str())? else {
            return Ok(None);
        };

        let item = decode(key.as_str(), &raw)?;
        if !item.is_same_entry(product_id, color) {
            return Err(CartError::KeyConflict {
                key: key.to_string(),
            });
        }
        Ok(Some(item))
    }

    fn save(&mut self, key: &ItemKey, item: &LineItem) -> Result<()> {
        let raw = serde_json::to_string(item).map_err(crate::StorageError::from)?;
        self.storage.set(key.as_str(), raw)?;
        Ok(())
    }
}

fn parse_identity(product_id: &str, color: &str) -> Result<(ProductId, Color)> {
    let product_id =
        ProductId::parse(product_id).map_err(|e| CartError::InvalidInput(e.to_string()))?;
    let color = Color::parse(color).map_err(|e| CartError::InvalidInput(e.to_string()))?;
    Ok((product_id, color))
}

fn decode(key: &str, raw: &str) -> Result<LineItem> {
    serde_json::from_str(raw).map_err(|source| CartError::Corrupt {
        key: key.to_owned(),
        source,
    })
}
