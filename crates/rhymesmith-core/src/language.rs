//! Supported lyric languages.
//!
//! Language codes arrive from callers as free-form strings (`"en"`, `"en-US"`,
//! `"IT"`, `"pt_BR"`). Anything outside the supported set resolves to
//! [`Language::Generic`] instead of failing.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A language with its own suffix rules and rhyme dictionaries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Italian.
    It,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
    /// Fallback for unsupported codes: no suffix rules, raw word endings only.
    Generic,
}

impl Language {
    /// All languages with dedicated rule tables.
    pub const SUPPORTED: &'static [Self] = &[Self::En, Self::It, Self::Es, Self::Fr, Self::De];

    /// Resolve a language code, falling back to [`Language::Generic`].
    ///
    /// Only the primary subtag is considered, so `en-GB` and `en_us` both
    /// resolve to English.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" | "eng" => Self::En,
            "it" | "ita" => Self::It,
            "es" | "spa" => Self::Es,
            "fr" | "fra" | "fre" => Self::Fr,
            "de" | "deu" | "ger" => Self::De,
            _ => Self::Generic,
        }
    }

    /// Returns the two-letter code, or `"generic"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Generic => "generic",
        }
    }

    /// The language whose dictionaries back suggestions for this language.
    ///
    /// Generic text borrows the English word lists.
    pub const fn dictionary_language(&self) -> Self {
        match self {
            Self::Generic => Self::En,
            other => *other,
        }
    }

    /// Vowel letters used for vowel skeletons and slant matching.
    pub const fn vowels(&self) -> &'static str {
        match self {
            Self::En | Self::Generic => "aeiouy",
            Self::It => "aeiouàèéìíòóù",
            Self::Es => "aeiouáéíóúü",
            Self::Fr => "aeiouyàâæèéêëîïôœùûüÿ",
            Self::De => "aeiouyäöü",
        }
    }

    /// Whether `c` counts as a vowel in this language.
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels().contains(c)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_codes() {
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("it"), Language::It);
        assert_eq!(Language::from_code("es"), Language::Es);
        assert_eq!(Language::from_code("fr"), Language::Fr);
        assert_eq!(Language::from_code("de"), Language::De);
    }

    #[test]
    fn ignores_region_and_case() {
        assert_eq!(Language::from_code("en-GB"), Language::En);
        assert_eq!(Language::from_code("ES_mx"), Language::Es);
        assert_eq!(Language::from_code("  FR "), Language::Fr);
    }

    #[test]
    fn unknown_codes_fall_back_to_generic() {
        assert_eq!(Language::from_code("pt"), Language::Generic);
        assert_eq!(Language::from_code(""), Language::Generic);
        assert_eq!(Language::from_code("klingon"), Language::Generic);
    }

    #[test]
    fn generic_borrows_english_dictionaries() {
        assert_eq!(Language::Generic.dictionary_language(), Language::En);
        assert_eq!(Language::Fr.dictionary_language(), Language::Fr);
    }

    #[test]
    fn accented_vowels_recognised() {
        assert!(Language::It.is_vowel('à'));
        assert!(Language::De.is_vowel('ü'));
        assert!(!Language::En.is_vowel('ü'));
    }
}
