//! Non-empty string newtypes: the two halves of a line item's identity, and
//! the order id returned at checkout.
//!
//! Use the `define_identity_field!` macro to create string wrappers that
//! prevent accidentally mixing a product id with a color.

/// Errors that can occur when parsing an identity field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The input string is empty.
    #[error("{field} cannot be empty")]
    Empty {
        /// Name of the field that was empty.
        field: &'static str,
    },
}

/// Macro to define a non-empty string identity field.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` as a plain string, rejecting empty input
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `parse()`, `as_str()`, `into_inner()`
/// - `Display`, `FromStr`, `AsRef<str>`
///
/// Comparison is exact: no trimming and no case folding. Callers normalize
/// before parsing.
///
/// # Example
///
/// ```rust
/// # use kanap_core::define_identity_field;
/// define_identity_field!(SkuCode, "sku code");
///
/// assert!(SkuCode::parse("A-12").is_ok());
/// assert!(SkuCode::parse("").is_err());
/// ```
#[macro_export]
macro_rules! define_identity_field {
    ($name:ident, $field:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse a value, rejecting the empty string.
            ///
            /// # Errors
            ///
            /// Returns [`IdentityError::Empty`] if the input is empty.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::IdentityError> {
                if s.is_empty() {
                    return Err($crate::IdentityError::Empty { field: $field });
                }
                Ok(Self(s.to_owned()))
            }

            /// Returns the value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::IdentityError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::core::convert::TryFrom<String> for $name {
            type Error = $crate::IdentityError;

            fn try_from(s: String) -> ::core::result::Result<Self, Self::Error> {
                if s.is_empty() {
                    return Err($crate::IdentityError::Empty { field: $field });
                }
                Ok(Self(s))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_identity_field!(ProductId, "product id");
define_identity_field!(Color, "color");
define_identity_field!(OrderId, "order id");
