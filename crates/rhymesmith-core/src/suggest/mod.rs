//! Rhyme suggestions for a target word.
//!
//! Curated families are tried first. A word whose ending matches no family
//! falls through to a spelling-similarity generator over a small list of
//! common lyric words. Results never contain the query word.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::dictionaries::{FamilyEntry, RhymeTables};
use crate::error::RhymeError;
use crate::language::Language;
use crate::rhyme::RhymeType;
use crate::text;

/// Default cap on returned suggestions.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Default similarity floor for generated candidates.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.25;

const NEAR_SIMILARITY: f64 = 0.75;
const SLANT_SIMILARITY: f64 = 0.5;
const EYE_SIMILARITY: f64 = 0.25;

/// Emotional tone requested for suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Mood {
    /// Drop words from the negative list.
    Positive,
    /// Drop words from the positive list.
    Negative,
    /// No filtering.
    Neutral,
}

impl Mood {
    /// Returns the mood as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = RhymeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(RhymeError::UnknownMood(other.to_string())),
        }
    }
}

/// A ranked rhyme candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeSuggestion {
    /// Suggested word.
    pub word: String,
    /// Rhyme type relative to the query.
    #[serde(rename = "type")]
    pub rhyme_type: RhymeType,
    /// Heuristic syllable count.
    pub syllables: usize,
    /// Commonness score in `0.0..=1.0`.
    pub frequency: f64,
    /// Meaning hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    /// Words that often appear alongside this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
}

/// Tuning knobs for [`SuggestionRanker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestOptions {
    /// Maximum suggestions returned.
    pub max_results: usize,
    /// Generated candidates scoring below this are dropped.
    pub min_similarity: f64,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

impl SuggestOptions {
    /// Options taken from a loaded configuration.
    pub const fn from_config(config: &Config) -> Self {
        Self {
            max_results: config.max_suggestions,
            min_similarity: config.min_similarity,
        }
    }
}

/// Looks up, generates and ranks rhyme suggestions.
#[derive(Debug, Clone)]
pub struct SuggestionRanker {
    tables: Arc<RhymeTables>,
    options: SuggestOptions,
}

impl SuggestionRanker {
    /// A ranker over `tables` with default options.
    pub fn new(tables: Arc<RhymeTables>) -> Self {
        Self {
            tables,
            options: SuggestOptions::default(),
        }
    }

    /// Replace the options.
    pub const fn with_options(mut self, options: SuggestOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub const fn options(&self) -> &SuggestOptions {
        &self.options
    }

    /// Ranked rhymes for `word`.
    ///
    /// Sorted by type (perfect, near, slant, eye) and then by descending
    /// frequency. An empty or all-punctuation word yields an empty list.
    /// `context` is accepted for callers that carry surrounding lyric text;
    /// it does not affect ranking.
    #[tracing::instrument(skip_all, fields(word = %word, language = %language, mood = ?mood))]
    pub fn suggest(
        &self,
        word: &str,
        language: Language,
        mood: Option<Mood>,
        context: Option<&str>,
    ) -> Vec<RhymeSuggestion> {
        let query = text::normalize_word(word);
        if query.is_empty() {
            return Vec::new();
        }
        if let Some(context) = context {
            tracing::trace!(context_len = context.len(), "context hint ignored for ranking");
        }

        let mut candidates = self.curated(&query, language);
        if candidates.is_empty() {
            candidates = self.generated(&query, language);
            tracing::debug!(generated = candidates.len(), "no curated family, used fallback");
        }

        let excluded: HashSet<&str> = mood
            .map(|m| self.tables.exclusions(language, m))
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();

        let mut seen = HashSet::new();
        let mut suggestions: Vec<RhymeSuggestion> = candidates
            .into_iter()
            .filter(|s| text::normalize_word(&s.word) != query)
            .filter(|s| seen.insert(s.word.clone()))
            .filter(|s| !excluded.contains(text::normalize_word(&s.word).as_str()))
            .collect();

        suggestions.sort_by(|a, b| {
            a.rhyme_type
                .bucket()
                .cmp(&b.rhyme_type.bucket())
                .then_with(|| b.frequency.total_cmp(&a.frequency))
        });
        suggestions.truncate(self.options.max_results);
        suggestions
    }

    /// Patterns to look up: curated ones longest first, then the raw last
    /// two and last three letters.
    fn patterns<'a>(&'a self, query: &'a str, language: Language) -> Vec<&'a str> {
        let mut patterns = self.tables.patterns_for(language, query);
        for raw in [text::last_chars(query, 2), text::last_chars(query, 3)] {
            if !patterns.contains(&raw) {
                patterns.push(raw);
            }
        }
        patterns
    }

    fn curated(&self, query: &str, language: Language) -> Vec<RhymeSuggestion> {
        self.patterns(query, language)
            .into_iter()
            .filter_map(|pattern| self.tables.family(language, pattern))
            .flatten()
            .map(|entry| suggestion_from_entry(entry, language))
            .collect()
    }

    fn generated(&self, query: &str, language: Language) -> Vec<RhymeSuggestion> {
        let ending = text::last_chars(query, 2);
        let vowel = text::last_vowel(query, language);
        let final_letter = query.chars().last();

        self.tables
            .fallback_words(language)
            .iter()
            .filter_map(|(candidate, frequency)| {
                let normalized = text::normalize_word(candidate);
                let (rhyme_type, similarity) = if text::last_chars(&normalized, 2) == ending {
                    (RhymeType::Near, NEAR_SIMILARITY)
                } else if vowel.is_some() && text::last_vowel(&normalized, language) == vowel {
                    (RhymeType::Slant, SLANT_SIMILARITY)
                } else if normalized.chars().last() == final_letter {
                    (RhymeType::Eye, EYE_SIMILARITY)
                } else {
                    return None;
                };
                (similarity >= self.options.min_similarity).then(|| RhymeSuggestion {
                    syllables: text::estimate_syllables(&normalized, language),
                    word: candidate.clone(),
                    rhyme_type,
                    frequency: *frequency,
                    gloss: None,
                    context: Vec::new(),
                })
            })
            .collect()
    }
}

fn suggestion_from_entry(entry: &FamilyEntry, language: Language) -> RhymeSuggestion {
    RhymeSuggestion {
        word: entry.word.clone(),
        rhyme_type: entry.rhyme_type,
        syllables: text::estimate_syllables(&entry.word, language),
        frequency: entry.frequency,
        gloss: entry.gloss.clone(),
        context: entry.context.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker() -> SuggestionRanker {
        SuggestionRanker::new(Arc::new(RhymeTables::builtin()))
    }

    fn words(suggestions: &[RhymeSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn day_suggests_way_and_play() {
        let results = ranker().suggest("day", Language::En, None, None);
        let way = results.iter().find(|s| s.word == "way").unwrap();
        let play = results.iter().find(|s| s.word == "play").unwrap();
        assert_eq!(way.rhyme_type, RhymeType::Perfect);
        assert_eq!(play.rhyme_type, RhymeType::Perfect);

        let perfect: Vec<f64> = results
            .iter()
            .filter(|s| s.rhyme_type == RhymeType::Perfect)
            .map(|s| s.frequency)
            .collect();
        assert!(perfect.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn buckets_are_ordered() {
        let results = ranker().suggest("day", Language::En, None, None);
        let buckets: Vec<u8> = results.iter().map(|s| s.rhyme_type.bucket()).collect();
        assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn query_word_is_never_suggested() {
        let ranker = ranker();
        for query in ["day", "Night", "love", "heart", "zzz"] {
            let results = ranker.suggest(query, Language::En, None, None);
            let normalized = text::normalize_word(query);
            assert!(!words(&results).contains(&normalized.as_str()), "{query}");
        }
    }

    #[test]
    fn empty_query_is_empty() {
        assert!(ranker().suggest("", Language::En, None, None).is_empty());
        assert!(ranker().suggest("?!", Language::En, None, None).is_empty());
    }

    #[test]
    fn no_duplicates() {
        let results = ranker().suggest("tonight", Language::En, None, None);
        let unique: HashSet<&str> = words(&results).into_iter().collect();
        assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn results_are_capped() {
        let ranker = ranker().with_options(SuggestOptions {
            max_results: 3,
            ..SuggestOptions::default()
        });
        assert_eq!(ranker.suggest("day", Language::En, None, None).len(), 3);
    }

    #[test]
    fn positive_mood_drops_negative_words() {
        let tables = RhymeTables::empty()
            .with_family_entry(Language::En, "ry", FamilyEntry::perfect("cry", 0.9))
            .with_family_entry(Language::En, "ry", FamilyEntry::perfect("dry", 0.5))
            .with_mood_word(Language::En, Mood::Negative, "cry");
        let ranker = SuggestionRanker::new(Arc::new(tables));

        let neutral = ranker.suggest("try", Language::En, None, None);
        assert_eq!(words(&neutral), vec!["cry", "dry"]);

        let positive = ranker.suggest("try", Language::En, Some(Mood::Positive), None);
        assert_eq!(words(&positive), vec!["dry"]);
    }

    #[test]
    fn builtin_positive_mood_excludes_sad_words() {
        let results = ranker().suggest("rain", Language::En, Some(Mood::Positive), None);
        for bad in ["sad", "cry", "pain", "hurt"] {
            assert!(!words(&results).contains(&bad));
        }
    }

    #[test]
    fn unknown_language_uses_english_tables() {
        let english = ranker().suggest("day", Language::En, None, None);
        let generic = ranker().suggest("day", Language::from_code("xx"), None, None);
        assert_eq!(english, generic);
    }

    #[test]
    fn fallback_generates_classified_candidates() {
        let tables = RhymeTables::empty()
            .with_fallback_word(Language::En, "blast", 0.4)
            .with_fallback_word(Language::En, "stamp", 0.6)
            .with_fallback_word(Language::En, "quilt", 0.9)
            .with_fallback_word(Language::En, "moon", 0.9);
        let results = SuggestionRanker::new(Arc::new(tables)).suggest("vast", Language::En, None, None);
        assert_eq!(words(&results), vec!["blast", "stamp", "quilt"]);
        assert_eq!(results[0].rhyme_type, RhymeType::Near);
        assert_eq!(results[1].rhyme_type, RhymeType::Slant);
        assert_eq!(results[2].rhyme_type, RhymeType::Eye);
    }

    #[test]
    fn similarity_floor_drops_weak_candidates() {
        let tables = RhymeTables::empty()
            .with_fallback_word(Language::En, "blast", 0.4)
            .with_fallback_word(Language::En, "quilt", 0.9);
        let ranker = SuggestionRanker::new(Arc::new(tables)).with_options(SuggestOptions {
            min_similarity: 0.5,
            ..SuggestOptions::default()
        });
        assert_eq!(
            words(&ranker.suggest("vast", Language::En, None, None)),
            vec!["blast"]
        );
    }

    #[test]
    fn curated_families_suppress_fallback() {
        let tables = RhymeTables::empty()
            .with_family_entry(Language::En, "ay", FamilyEntry::perfect("way", 0.9))
            .with_fallback_word(Language::En, "clay", 0.9);
        let results = SuggestionRanker::new(Arc::new(tables)).suggest("day", Language::En, None, None);
        assert_eq!(words(&results), vec!["way"]);
    }

    #[test]
    fn glosses_survive_for_italian() {
        let results = ranker().suggest("cuore", Language::It, None, None);
        assert!(!results.is_empty());
        assert!(results.iter().any(|s| s.gloss.is_some()));
    }

    #[test]
    fn mood_parses_case_insensitively() {
        assert_eq!("Positive".parse::<Mood>().unwrap(), Mood::Positive);
        assert_eq!(
            "happy".parse::<Mood>().unwrap_err(),
            RhymeError::UnknownMood("happy".to_string())
        );
    }
}
