//! Phonetic keys for rhyme grouping.
//!
//! A [`PhoneticProvider`] turns a normalized word into an approximate
//! rendering and a short rhyme key. The default [`SuffixRuleProvider`]
//! rewrites known word endings through [`RhymeTables`] suffix rules; it is a
//! spelling heuristic and makes no attempt at real pronunciation. A
//! dictionary-backed provider can be swapped in behind the same trait
//! without touching grouping or classification.

mod cache;

use std::sync::Arc;

pub use cache::{CachedProvider, PhoneticCache};

use crate::dictionaries::RhymeTables;
use crate::language::Language;
use crate::text;

/// Primary stress mark used in renderings.
pub const STRESS_MARK: char = 'ˈ';

/// Characters of a matched phonetic tail kept in the key.
const TAIL_KEY_LEN: usize = 3;

/// Characters of a raw word ending used when no rule matches.
const RAW_KEY_LEN: usize = 2;

/// Source of phonetic renderings and rhyme keys.
pub trait PhoneticProvider: Send + Sync + std::fmt::Debug {
    /// Approximate phonetic rendering of a normalized word.
    fn transcribe(&self, word: &str, language: Language) -> String;

    /// Short key; words with equal keys are treated as rhyming.
    fn rhyme_key(&self, word: &str, language: Language) -> String;
}

impl<P: PhoneticProvider + ?Sized> PhoneticProvider for Arc<P> {
    fn transcribe(&self, word: &str, language: Language) -> String {
        (**self).transcribe(word, language)
    }

    fn rhyme_key(&self, word: &str, language: Language) -> String {
        (**self).rhyme_key(word, language)
    }
}

/// Heuristic provider driven by per-language suffix rules.
///
/// The key is the last three characters of the matched rule's tail, or the
/// last two letters of the word when no rule matches.
#[derive(Debug, Clone)]
pub struct SuffixRuleProvider {
    tables: Arc<RhymeTables>,
}

impl SuffixRuleProvider {
    /// Create a provider reading rules from `tables`.
    pub const fn new(tables: Arc<RhymeTables>) -> Self {
        Self { tables }
    }
}

impl PhoneticProvider for SuffixRuleProvider {
    fn transcribe(&self, word: &str, language: Language) -> String {
        match self.tables.match_suffix(language, word) {
            Some(rule) => {
                let stem = &word[..word.len() - rule.suffix.len()];
                format!("{stem}{}", rule.tail)
            }
            None => word.to_string(),
        }
    }

    fn rhyme_key(&self, word: &str, language: Language) -> String {
        match self.tables.match_suffix(language, word) {
            Some(rule) => text::last_chars(&rule.tail, TAIL_KEY_LEN).to_string(),
            None => text::last_chars(word, RAW_KEY_LEN).to_string(),
        }
    }
}

/// The rhyme-bearing end of a rendering.
///
/// Everything after the last stress mark when one is present; otherwise the
/// final three characters of renderings longer than three; otherwise the
/// whole rendering.
pub fn stress_tail(transcription: &str) -> &str {
    if let Some((_, tail)) = transcription.rsplit_once(STRESS_MARK) {
        return tail;
    }
    if transcription.chars().count() > 3 {
        return text::last_chars(transcription, 3);
    }
    transcription
}
