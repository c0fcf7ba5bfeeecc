//! Cart line items and their storage keys.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::id::{Color, ProductId};

/// One cart entry.
///
/// Two line items are the same entry iff their `(product_id, color)` match
/// exactly. The serialized form is the persisted cart record:
///
/// ```json
/// {"productId": "107fb5b75607497b96722bda5b504926", "color": "Blue", "quantity": 2}
/// ```
///
/// Older records written as `{"id": ..., "quantity": "2"}` are also accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(alias = "id")]
    pub product_id: ProductId,
    pub color: Color,
    #[serde(deserialize_with = "deserialize_stored_quantity")]
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub const fn new(product_id: ProductId, color: Color, quantity: u32) -> Self {
        Self {
            product_id,
            color,
            quantity,
        }
    }

    /// Storage key derived from this item's identity.
    #[must_use]
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.product_id, &self.color)
    }

    /// Whether this item has the given identity.
    #[must_use]
    pub fn is_same_entry(&self, product_id: &ProductId, color: &Color) -> bool {
        &self.product_id == product_id && &self.color == color
    }
}

/// Storage key of a line item: `"{productId}-{color}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(String);

impl ItemKey {
    /// Derive the key for an identity.
    #[must_use]
    pub fn new(product_id: &ProductId, color: &Color) -> Self {
        Self(format!("{product_id}-{color}"))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Accepts a positive integer or a string holding one.
fn deserialize_stored_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Number(u32),
        Text(String),
    }

    let quantity = match Stored::deserialize(deserializer)? {
        Stored::Number(n) => n,
        Stored::Text(s) => s.parse::<u32>().map_err(|_| {
            serde::de::Error::custom(format!("quantity is not a whole number: {s:?}"))
        })?,
    };

    if quantity == 0 {
        return Err(serde::de::Error::custom("quantity must be positive"));
    }
    Ok(quantity)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, color: &str, quantity: u32) -> LineItem {
        LineItem::new(
            ProductId::parse(id).unwrap(),
            Color::parse(color).unwrap(),
            quantity,
        )
    }

    #[test]
    fn test_key_format() {
        assert_eq!(item("42", "Blue", 1).key().as_str(), "42-Blue");
        assert_eq!(item("42", "Black/Red", 1).key().to_string(), "42-Black/Red");
    }

    #[test]
    fn test_is_same_entry_is_exact() {
        let line = item("42", "Blue", 1);
        let id = ProductId::parse("42").unwrap();
        assert!(line.is_same_entry(&id, &Color::parse("Blue").unwrap()));
        assert!(!line.is_same_entry(&id, &Color::parse("blue").unwrap()));
    }

    #[test]
    fn test_serialize_record_shape() {
        let json = serde_json::to_value(item("42", "Blue", 5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"productId": "42", "color": "Blue", "quantity": 5})
        );
    }

    #[test]
    fn test_deserialize_legacy_record() {
        let line: LineItem =
            serde_json::from_str(r#"{"id":"42","color":"Blue","quantity":"3"}"#).unwrap();
        assert_eq!(line, item("42", "Blue", 3));
    }

    #[test]
    fn test_deserialize_rejects_bad_quantity() {
        for body in [
            r#"{"productId":"42","color":"Blue","quantity":0}"#,
            r#"{"productId":"42","color":"Blue","quantity":"2.5"}"#,
            r#"{"productId":"42","color":"Blue","quantity":-1}"#,
            r#"{"productId":"42","color":"Blue","quantity":1.5}"#,
        ] {
            assert!(serde_json::from_str::<LineItem>(body).is_err(), "{body}");
        }
    }

    #[test]
    fn test_deserialize_rejects_empty_identity() {
        assert!(
            serde_json::from_str::<LineItem>(r#"{"productId":"","color":"Blue","quantity":1}"#)
                .is_err()
        );
    }
}
