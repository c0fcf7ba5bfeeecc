//! Checkout contact details and their validation rules.
//!
//! ## Rules
//!
//! - First name, last name, city: starts with a letter, then letters,
//!   apostrophes, dashes or spaces, ends with a letter or an apostrophe.
//!   Accented Latin letters are allowed; case-insensitive.
//! - Address: optional street number (with an optional comma) followed by a
//!   space, then one or more words each followed by a space, then a 4 or 5
//!   digit postal code.
//! - Email: letters, digits, `.`, `_` or `-`, then `@`, then one or more
//!   dot-terminated labels, then a 2 to 4 character top-level domain. No
//!   accents.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-zà-ÿ][a-zà-ÿ'-]?)+([a-zà-ÿ' -]+)?[a-zà-ÿ']$").expect("Invalid regex")
});

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+,? )?([a-zà-ÿ'-]+ )+[0-9]{4,5}$").expect("Invalid regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9]{2,4}$").expect("Invalid regex")
});

/// A field of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    Email,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Address,
        Self::City,
        Self::Email,
    ];

    /// Field name as used in the order body and the form's input ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::Email => "email",
        }
    }

    /// Whether `value` is acceptable for this field.
    #[must_use]
    pub fn is_valid(self, value: &str) -> bool {
        let re = match self {
            Self::FirstName | Self::LastName | Self::City => &NAME_RE,
            Self::Address => &ADDRESS_RE,
            Self::Email => &EMAIL_RE,
        };
        re.is_match(value)
    }

    /// Message shown to the shopper under an invalid field.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::FirstName => {
                "Prénom invalide. Le prénom doit commencer par une lettre, et ne peut comporter ensuite que des lettres, tirets, apostrophes ou espaces."
            }
            Self::LastName => {
                "Nom invalide. Le nom doit commencer par une lettre, et ne peut comporter ensuite que des lettres, tirets, apostrophes ou espaces."
            }
            Self::Address => "Adresse invalide. N'oubliez pas le code postal à la fin.",
            Self::City => {
                "Format de ville invalide. Le nom de la ville doit commencer par une lettre, et ne peut comporter ensuite que des lettres, tirets, apostrophes ou espaces."
            }
            Self::Email => "Adresse email invalide.",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that failed validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid contact fields: {}", format_fields(.0))]
pub struct ContactErrors(pub Vec<ContactField>);

impl ContactErrors {
    /// Whether `field` is among the failures.
    #[must_use]
    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains(&field)
    }

    /// Iterate over the failing fields.
    pub fn iter(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.iter().copied()
    }
}

fn format_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw checkout form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub email: String,
}

impl ContactForm {
    /// Value currently entered in `field`.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::Email => &self.email,
        }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns every field that failed, in form order.
    pub fn validate(self) -> Result<Contact, ContactErrors> {
        let invalid: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|field| !field.is_valid(self.value(*field)))
            .collect();

        if !invalid.is_empty() {
            return Err(ContactErrors(invalid));
        }

        Ok(Contact {
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            email: self.email,
        })
    }
}

/// Validated contact details, serialized as the order body's `contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    email: String,
}

impl Contact {
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
