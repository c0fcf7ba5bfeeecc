//! Color lexicon for the storefront's two display languages.
//!
//! The catalog names colors in English (`"Black/Red"`). Pages display them in
//! the page's language, which the caller passes in explicitly.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Language`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// No lexicon exists for this language code.
    #[error("unsupported language: {0}")]
    Unsupported(String),
}

/// A display language of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Catalog language.
    English,
    #[default]
    French,
}

impl Language {
    /// Short code as used in page `lang` attributes.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::French => "fr",
        }
    }

    const fn pick(self, names: &ColorNames) -> &'static str {
        match self {
            Self::English => names.english,
            Self::French => names.french,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    /// Accepts ISO 639-1/639-2 codes with an optional region (`fr-FR`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" | "eng" => Ok(Self::English),
            "fr" | "fra" | "fre" => Ok(Self::French),
            _ => Err(LanguageError::Unsupported(s.to_owned())),
        }
    }
}

/// Display names of one catalog color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorNames {
    pub key: &'static str,
    pub english: &'static str,
    pub french: &'static str,
}

/// Every color the catalog uses.
#[rustfmt::skip]
pub const COLORS: &[ColorNames] = &[
    ColorNames { key: "black", english: "Black", french: "Noir" },
    ColorNames { key: "blackRed", english: "Black/Red", french: "Noir/Rouge" },
    ColorNames { key: "blackYellow", english: "Black/Yellow", french: "Noir/Jaune" },
    ColorNames { key: "blue", english: "Blue", french: "Bleu" },
    ColorNames { key: "brown", english: "Brown", french: "Marron" },
    ColorNames { key: "green", english: "Green", french: "Vert" },
    ColorNames { key: "grey", english: "Grey", french: "Gris" },
    ColorNames { key: "navy", english: "Navy", french: "Bleu marine" },
    ColorNames { key: "orange", english: "Orange", french: "Orange" },
    ColorNames { key: "pink", english: "Pink", french: "Rose" },
    ColorNames { key: "purple", english: "Purple", french: "Violet" },
    ColorNames { key: "red", english: "Red", french: "Rouge" },
    ColorNames { key: "silver", english: "Silver", french: "Argenté" },
    ColorNames { key: "white", english: "White", french: "Blanc" },
    ColorNames { key: "yellow", english: "Yellow", french: "Jaune" },
];

/// Translate a color's display name from one language to another.
///
/// Colors missing from the lexicon are returned unchanged.
///
/// ```
/// use kanap_core::{Language, translate_color};
///
/// assert_eq!(translate_color("Black/Red", Language::English, Language::French), "Noir/Rouge");
/// assert_eq!(translate_color("Chartreuse", Language::English, Language::French), "Chartreuse");
/// ```
#[must_use]
pub fn translate_color(color: &str, from: Language, to: Language) -> &str {
    COLORS
        .iter()
        .find(|names| from.pick(names) == color)
        .map_or(color, |names| to.pick(names))
}
