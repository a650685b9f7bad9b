//! Dictionaries for rhyme analysis.
//!
//! The static tables in the submodules are the built-in data. Engines never
//! read them directly: they receive a [`RhymeTables`] value at construction,
//! built from the statics by [`RhymeTables::builtin`] or assembled by hand
//! (tests, user-configured families).

pub mod fallback_words;
pub mod moods;
pub mod rhyme_families;
pub mod suffix_rules;

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::config::CustomFamily;
use crate::language::Language;
use crate::rhyme::RhymeType;
use crate::suggest::Mood;
use crate::text;

/// An ending and the phonetic tail it rewrites to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    /// Lowercase orthographic ending.
    pub suffix: String,
    /// Approximate phonetic rendering of the ending.
    pub tail: String,
}

/// A word in a curated rhyme family.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyEntry {
    /// Surface form.
    pub word: String,
    /// Rhyme strength relative to the family pattern.
    pub rhyme_type: RhymeType,
    /// Commonness score in `0.0..=1.0`.
    pub frequency: f64,
    /// Optional meaning hint.
    pub gloss: Option<String>,
    /// Co-occurring words.
    pub context: Vec<String>,
}

impl FamilyEntry {
    /// A perfect-rhyme entry with no gloss or context.
    pub fn perfect(word: impl Into<String>, frequency: f64) -> Self {
        Self {
            word: word.into(),
            rhyme_type: RhymeType::Perfect,
            frequency,
            gloss: None,
            context: Vec::new(),
        }
    }
}

impl From<&rhyme_families::Seed> for FamilyEntry {
    fn from(seed: &rhyme_families::Seed) -> Self {
        Self {
            word: seed.word.to_string(),
            rhyme_type: seed.rhyme_type,
            frequency: seed.frequency,
            gloss: seed.gloss.map(str::to_string),
            context: seed.context.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

/// All tables for one language.
#[derive(Debug, Clone, Default)]
struct LanguageTables {
    /// Longest suffix first.
    suffix_rules: Vec<SuffixRule>,
    /// Families in insertion order.
    families: Vec<(String, Vec<FamilyEntry>)>,
    fallback_words: Vec<(String, f64)>,
    negative_words: Vec<String>,
    positive_words: Vec<String>,
}

/// Immutable lookup tables injected into the engine and ranker.
///
/// Suffix rules are looked up under the exact language, so
/// [`Language::Generic`] has none unless given some. Families, fallback
/// words and mood lists are looked up under
/// [`Language::dictionary_language`], so generic text shares the English
/// dictionaries.
#[derive(Debug, Clone, Default)]
pub struct RhymeTables {
    languages: HashMap<Language, LanguageTables>,
}

impl RhymeTables {
    /// Tables with no data at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The embedded tables for every supported language.
    pub fn builtin() -> Self {
        let mut tables = Self::empty();
        for &language in Language::SUPPORTED {
            let entry = tables.languages.entry(language).or_default();
            entry.suffix_rules = suffix_rules::builtin_rules(language)
                .iter()
                .map(|(suffix, tail)| SuffixRule {
                    suffix: (*suffix).to_string(),
                    tail: (*tail).to_string(),
                })
                .collect();
            sort_rules(&mut entry.suffix_rules);
            entry.families = rhyme_families::builtin_families(language)
                .iter()
                .map(|(pattern, seeds)| {
                    (
                        (*pattern).to_string(),
                        seeds.iter().map(FamilyEntry::from).collect(),
                    )
                })
                .collect();
            entry.fallback_words = fallback_words::builtin_words(language)
                .iter()
                .map(|(word, freq)| ((*word).to_string(), *freq))
                .collect();
            entry.negative_words = to_strings(moods::builtin_exclusions(language, Mood::Positive));
            entry.positive_words = to_strings(moods::builtin_exclusions(language, Mood::Negative));
        }
        tables.languages.entry(Language::Generic).or_default();
        tables
    }

    /// Add a suffix rule, keeping the table longest-suffix-first.
    pub fn with_suffix_rule(mut self, language: Language, suffix: &str, tail: &str) -> Self {
        let entry = self.languages.entry(language).or_default();
        entry.suffix_rules.push(SuffixRule {
            suffix: suffix.to_lowercase(),
            tail: tail.to_string(),
        });
        sort_rules(&mut entry.suffix_rules);
        self
    }

    /// Append a word to the family for `pattern`, creating it if needed.
    pub fn with_family_entry(
        mut self,
        language: Language,
        pattern: &str,
        entry: FamilyEntry,
    ) -> Self {
        self.push_family_entry(language, pattern, entry);
        self
    }

    /// Add a fallback candidate word.
    pub fn with_fallback_word(mut self, language: Language, word: &str, frequency: f64) -> Self {
        self.languages
            .entry(language.dictionary_language())
            .or_default()
            .fallback_words
            .push((word.to_string(), frequency));
        self
    }

    /// Tag `word` as carrying `mood`; it is then dropped from requests for
    /// the opposite mood.
    pub fn with_mood_word(mut self, language: Language, mood: Mood, word: &str) -> Self {
        let entry = self
            .languages
            .entry(language.dictionary_language())
            .or_default();
        let word = text::normalize_word(word);
        match mood {
            Mood::Negative => entry.negative_words.push(word),
            Mood::Positive => entry.positive_words.push(word),
            Mood::Neutral => {}
        }
        self
    }

    /// Append user-configured families after the built-in ones.
    pub fn extend_families(&mut self, custom: &[CustomFamily]) {
        for family in custom {
            let language = Language::from_code(&family.language);
            let rhyme_type = family.rhyme_type.unwrap_or(RhymeType::Perfect);
            let frequency = family.frequency.unwrap_or(0.5).clamp(0.0, 1.0);
            for word in &family.words {
                self.push_family_entry(
                    language,
                    &family.pattern,
                    FamilyEntry {
                        word: word.clone(),
                        rhyme_type,
                        frequency,
                        gloss: None,
                        context: Vec::new(),
                    },
                );
            }
        }
    }

    fn push_family_entry(&mut self, language: Language, pattern: &str, entry: FamilyEntry) {
        let families = &mut self
            .languages
            .entry(language.dictionary_language())
            .or_default()
            .families;
        let pattern = pattern.to_lowercase();
        if let Some((_, entries)) = families.iter_mut().find(|(p, _)| *p == pattern) {
            entries.push(entry);
        } else {
            families.push((pattern, vec![entry]));
        }
    }

    /// Suffix rules for `language`, longest suffix first.
    pub fn suffix_rules(&self, language: Language) -> &[SuffixRule] {
        self.languages
            .get(&language)
            .map(|t| t.suffix_rules.as_slice())
            .unwrap_or_default()
    }

    /// The longest rule whose suffix ends `word`.
    pub fn match_suffix(&self, language: Language, word: &str) -> Option<&SuffixRule> {
        self.suffix_rules(language)
            .iter()
            .find(|rule| word.ends_with(rule.suffix.as_str()))
    }

    /// Members of the family for `pattern`.
    pub fn family(&self, language: Language, pattern: &str) -> Option<&[FamilyEntry]> {
        self.languages
            .get(&language.dictionary_language())?
            .families
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Family patterns that `word` ends with, longest first.
    pub fn patterns_for(&self, language: Language, word: &str) -> Vec<&str> {
        let Some(tables) = self.languages.get(&language.dictionary_language()) else {
            return Vec::new();
        };
        let mut patterns: Vec<&str> = tables
            .families
            .iter()
            .map(|(p, _)| p.as_str())
            .filter(|p| !p.is_empty() && word.ends_with(p))
            .collect();
        patterns.sort_by_key(|p| Reverse(p.chars().count()));
        patterns
    }

    /// Fallback candidate words with frequencies.
    pub fn fallback_words(&self, language: Language) -> &[(String, f64)] {
        self.languages
            .get(&language.dictionary_language())
            .map(|t| t.fallback_words.as_slice())
            .unwrap_or_default()
    }

    /// Words to drop when the caller asks for `mood`.
    pub fn exclusions(&self, language: Language, mood: Mood) -> &[String] {
        let Some(tables) = self.languages.get(&language.dictionary_language()) else {
            return &[];
        };
        match mood {
            Mood::Positive => tables.negative_words.as_slice(),
            Mood::Negative => tables.positive_words.as_slice(),
            Mood::Neutral => &[],
        }
    }
}

fn sort_rules(rules: &mut [SuffixRule]) {
    rules.sort_by_key(|rule| Reverse(rule.suffix.chars().count()));
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
