//! Kanap Cart - Line-item consolidation and persistence.
//!
//! The [`CartStore`] is the only reader and writer of persisted cart state. It
//! keeps one entry per `(product id, color)` identity: adding an identity that
//! is already in the cart increases its quantity instead of creating a second
//! entry.
//!
//! # Architecture
//!
//! Persistence sits behind the [`Storage`] port so the store can run against
//! an in-memory fake in tests and a JSON file in the CLI:
//!
//! - [`MemoryStorage`] - ephemeral, `BTreeMap`-backed
//! - [`JsonFileStorage`] - durable, one JSON document per cart
//!
//! Entries are stored under the key `"{productId}-{color}"` with the value
//! `{"productId", "color", "quantity"}`.
//!
//! # Concurrency
//!
//! All operations are synchronous and take `&mut self` to mutate. The store does
//! no locking of its own; a caller sharing one storage backend between
//! processes must serialize access itself.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use kanap_cart::{CartStore, MemoryStorage};
//! use kanap_core::Price;
//!
//! let mut cart = CartStore::new(MemoryStorage::new());
//! cart.add_or_increment("42", "Blue", 2)?;
//! cart.add_or_increment("42", "Blue", 3)?;
//!
//! assert_eq!(cart.list()?.len(), 1);
//! assert_eq!(cart.total_quantity()?, 5);
//!
//! let prices = HashMap::from([("42".to_string(), Price::from_euros(10))]);
//! assert_eq!(cart.total_price(&prices)?, Price::from_euros(50));
//! # Ok::<(), kanap_cart::CartError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
mod price;
pub mod storage;
mod store;

pub use error::{CartError, Result};
pub use price::PriceLookup;
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageError};
pub use store::CartStore;
