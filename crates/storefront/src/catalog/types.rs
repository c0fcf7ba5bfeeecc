//! Wire types of the product API.

use kanap_core::{Color, Contact, OrderId, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// ```json
/// {
///   "_id": "107fb5b75607497b96722bda5b504926",
///   "name": "Kanap Sinopé",
///   "price": 1849,
///   "imageUrl": "http://localhost:3000/images/kanap01.jpeg",
///   "altTxt": "Photo d'un canapé bleu, deux places",
///   "colors": ["Blue", "White", "Black"],
///   "description": "Excepteur sint occaecat cupidatat non proident."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
    pub alt_txt: String,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Whether `color` is one of this product's variants.
    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.as_str() == color)
    }
}

/// Body of `POST /products/order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub contact: Contact,
    pub products: Vec<ProductId>,
}

/// Response of `POST /products/order`.
///
/// The API echoes the contact and products back; only the order id is kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
}
