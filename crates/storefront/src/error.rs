//! Unified error handling.
//!
//! Provides a unified `AppError` type for everything the storefront can fail
//! at. The CLI returns `Result<T, AppError>` from every command and shows
//! [`AppError::user_message`] to the shopper.

use kanap_cart::{CartError, StorageError};
use kanap_core::{IdentityError, QuantityError};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::pages::{AddToCartError, CheckoutError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Product API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Cart document could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Add-to-cart form was refused.
    #[error("Add to cart failed: {0}")]
    AddToCart(#[from] AddToCartError),

    /// Order was not placed.
    #[error("Checkout failed: {0}")]
    Checkout(#[from] CheckoutError),

    /// Quantity typed by the shopper is not acceptable.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// Identifier is empty.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentityError),

    /// Bad request from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Message for the shopper. Internal details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Catalog(CatalogError::NotFound(_)) => "Produit introuvable.".to_string(),
            Self::Catalog(_) => "Impossible de contacter le serveur.".to_string(),
            Self::Checkout(CheckoutError::InvalidContact(errors)) => errors
                .iter()
                .map(kanap_core::ContactField::hint)
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Checkout(CheckoutError::EmptyCart) => "Votre panier est vide.".to_string(),
            Self::Checkout(CheckoutError::Catalog(_)) => {
                "Erreur serveur, impossible d'envoyer la commande.".to_string()
            }
            Self::AddToCart(AddToCartError::MissingColor) => {
                "Veuillez choisir une couleur.".to_string()
            }
            Self::AddToCart(AddToCartError::UnknownColor { .. }) => {
                "Couleur indisponible pour ce produit.".to_string()
            }
            Self::AddToCart(AddToCartError::Quantity(_)) | Self::InvalidQuantity(_) => {
                "Veuillez saisir une quantité entre 1 et 100.".to_string()
            }
            Self::Cart(CartError::NotFound { .. }) => {
                "Cet article n'est pas dans le panier.".to_string()
            }
            Self::Config(_)
            | Self::Cart(_)
            | Self::Storage(_)
            | Self::AddToCart(AddToCartError::Cart(_))
            | Self::Checkout(CheckoutError::Cart(_)) => "Erreur interne.".to_string(),
            Self::InvalidIdentifier(_) | Self::BadRequest(_) => self.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
