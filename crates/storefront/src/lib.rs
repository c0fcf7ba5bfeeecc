//! Kanap Storefront library.
//!
//! Talks to the product API, runs checkout and builds the page models the
//! CLI renders. Cart state lives in `kanap-cart`; this crate only drives it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod pages;

pub use catalog::{CatalogClient, CatalogError};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{AppError, Result};
