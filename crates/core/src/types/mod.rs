//! Core types for Kanap.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod color;
pub mod contact;
pub mod id;
pub mod line_item;
pub mod price;
pub mod quantity;

pub use color::{COLORS, ColorNames, Language, LanguageError, translate_color};
pub use contact::{Contact, ContactErrors, ContactField, ContactForm};
pub use id::*;
pub use line_item::{ItemKey, LineItem};
pub use price::Price;
pub use quantity::{Quantity, QuantityError};
