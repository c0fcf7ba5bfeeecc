//! Kanap Core - Shared domain types for the storefront.
//!
//! This crate provides the types used across every Kanap component:
//! - `cart` - Cart line-item consolidation and persistence
//! - `storefront` - Catalog client, checkout and page models
//! - `cli` - Command-line storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure validation - no I/O, no
//! storage, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Identity newtypes, quantities, line items, prices, the color
//!   lexicon and contact validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
