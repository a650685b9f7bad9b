//! Rhyme detection.
//!
//! [`RhymeEngine`] turns lyric text into rhyme groups and a per-line
//! rhyme scheme. Detection is a pipeline of small pure steps:
//!
//! 1. tokenize lines into candidate words ([`crate::text`])
//! 2. key every word through a [`PhoneticProvider`]
//! 3. bucket by key and classify ([`grouping`])
//! 4. find same-line rhymes ([`internal`])
//! 5. label line endings ([`scheme`])
//!
//! The engine holds no mutable state apart from an optional key cache, so
//! one instance can serve many threads.

pub mod grouping;
pub mod internal;
pub mod scheme;
pub mod types;

use std::sync::Arc;

pub use types::{
    RhymeAnalysis, RhymeComparison, RhymeGroup, RhymePosition, RhymeType, SchemeSymbol,
    Transcription, WordOccurrence,
};

use crate::config::Config;
use crate::dictionaries::RhymeTables;
use crate::error::RhymeResult;
use crate::language::Language;
use crate::phonetic::{self, CachedProvider, PhoneticProvider, SuffixRuleProvider};
use crate::text;

/// Cross-line groups weaker than this are dropped by default.
pub const DEFAULT_MIN_STRENGTH: f64 = 0.6;

/// Highlight colours, assigned cyclically in group order.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
];

/// Tuning knobs for [`RhymeEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Cross-line groups below this strength are discarded.
    pub min_strength: f64,
    /// Colour palette; an empty palette falls back to [`DEFAULT_PALETTE`].
    pub palette: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_strength: DEFAULT_MIN_STRENGTH,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl EngineOptions {
    /// Options taken from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self {
            min_strength: config.min_group_strength,
            ..Self::default()
        };
        if let Some(palette) = config.palette.as_ref().filter(|p| !p.is_empty()) {
            options.palette.clone_from(palette);
        }
        options
    }
}

/// Detects rhyme groups and rhyme schemes in lyric text.
#[derive(Debug, Clone)]
pub struct RhymeEngine {
    provider: Arc<dyn PhoneticProvider>,
    options: EngineOptions,
}

impl RhymeEngine {
    /// An engine using suffix-rule keys from `tables`, without a cache.
    pub fn new(tables: Arc<RhymeTables>) -> Self {
        Self {
            provider: Arc::new(SuffixRuleProvider::new(tables)),
            options: EngineOptions::default(),
        }
    }

    /// An engine configured from `config`, caching keys when
    /// `cache_capacity` is non-zero.
    pub fn from_config(config: &Config, tables: Arc<RhymeTables>) -> Self {
        let base = SuffixRuleProvider::new(tables);
        let provider: Arc<dyn PhoneticProvider> = match config.cache_capacity {
            0 => Arc::new(base),
            capacity => Arc::new(CachedProvider::new(base, capacity)),
        };
        Self {
            provider,
            options: EngineOptions::from_config(config),
        }
    }

    /// Replace the phonetic provider.
    pub fn with_provider(mut self, provider: Arc<dyn PhoneticProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Replace the options.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Find rhyme groups in `text`.
    ///
    /// Cross-line groups come first in key discovery order, then internal
    /// groups line by line. Identical input always yields identical output.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), language = %language))]
    pub fn detect_rhymes(&self, text: &str, language: Language) -> Vec<RhymeGroup> {
        let occurrences: Vec<WordOccurrence> = text::tokenize(text)
            .into_iter()
            .map(|token| {
                let key = self.provider.rhyme_key(&token.word, language);
                WordOccurrence::new(token, key)
            })
            .collect();

        let mut cross_line = grouping::cross_line_groups(&occurrences, language);
        let before = cross_line.len();
        cross_line.retain(|g| g.strength >= self.options.min_strength);
        let internal = internal::internal_groups(&occurrences);

        tracing::debug!(
            words = occurrences.len(),
            cross_line = cross_line.len(),
            dropped = before - cross_line.len(),
            internal = internal.len(),
            "grouped rhymes"
        );

        let mut groups: Vec<RhymeGroup> = cross_line
            .into_iter()
            .enumerate()
            .map(|(i, mut g)| {
                g.id = format!("rhyme-{i}");
                g
            })
            .chain(internal.into_iter().enumerate().map(|(j, mut g)| {
                g.id = format!("internal-{j}");
                g
            }))
            .collect();

        for (idx, group) in groups.iter_mut().enumerate() {
            group.color = self.color(idx);
        }

        groups
    }

    /// Label each of `lines` with a rhyme-scheme symbol.
    ///
    /// `lines` must be the lines of the text `groups` came from. Group
    /// positions are validated against `lines`, but extra lines after the
    /// last grouped one are accepted and labelled. Use [`Self::analyze`]
    /// when the text is at hand.
    #[tracing::instrument(skip_all, fields(groups = groups.len(), lines = lines.len()))]
    pub fn assign_rhyme_scheme(
        &self,
        groups: &[RhymeGroup],
        lines: &[&str],
    ) -> RhymeResult<Vec<SchemeSymbol>> {
        scheme::assign_scheme(groups, lines)
    }

    /// Groups, scheme and pattern string for `text` in one pass.
    pub fn analyze(&self, text: &str, language: Language) -> RhymeResult<RhymeAnalysis> {
        let groups = self.detect_rhymes(text, language);
        let lines = text::split_lines(text);
        let scheme = self.assign_rhyme_scheme(&groups, &lines)?;
        let pattern = scheme::pattern_string(&scheme);
        Ok(RhymeAnalysis {
            language,
            line_count: lines.len(),
            groups,
            scheme,
            pattern,
        })
    }

    /// Approximate rendering, stress tail and key of one word.
    pub fn transliterate(&self, word: &str, language: Language) -> Transcription {
        let normalized = text::normalize_word(word);
        let transcription = self.provider.transcribe(&normalized, language);
        let key = self.provider.rhyme_key(&normalized, language);
        Transcription {
            stress_tail: phonetic::stress_tail(&transcription).to_string(),
            word: normalized,
            language,
            transcription,
            key,
        }
    }

    /// Whether two words rhyme, and how the group classifier would label
    /// the pair. Two candidate words rhyme when their rhyme keys match.
    #[tracing::instrument(skip(self))]
    pub fn compare_words(&self, word1: &str, word2: &str, language: Language) -> RhymeComparison {
        let first = self.transliterate(word1, language);
        let second = self.transliterate(word2, language);

        let rhyme = text::is_candidate(&first.word)
            && text::is_candidate(&second.word)
            && first.key == second.key;
        let (rhyme_type, strength) = if rhyme {
            let (kind, strength) = grouping::classify(&[&first.word, &second.word], language);
            (Some(kind), strength)
        } else {
            (None, 0.0)
        };

        RhymeComparison {
            word1: word1.to_string(),
            word2: word2.to_string(),
            language,
            transcription1: first.transcription,
            transcription2: second.transcription,
            stress_tail1: first.stress_tail,
            stress_tail2: second.stress_tail,
            rhyme,
            rhyme_type,
            strength,
        }
    }

    fn color(&self, idx: usize) -> String {
        if self.options.palette.is_empty() {
            return DEFAULT_PALETTE[idx % DEFAULT_PALETTE.len()].to_string();
        }
        self.options.palette[idx % self.options.palette.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::dictionaries::FamilyEntry;
    use crate::error::RhymeError;

    fn engine() -> RhymeEngine {
        RhymeEngine::new(Arc::new(RhymeTables::builtin()))
    }

    fn letters(scheme: &[SchemeSymbol]) -> Vec<String> {
        scheme.iter().map(ToString::to_string).collect()
    }

    const VERSE: &str = "I walk alone into the night\n\
                         Searching for a guiding light\n\
                         \n\
                         My heart beats like a drum\n\
                         Waiting for the dawn to come";

    #[test]
    fn sing_and_ring_rhyme_perfectly() {
        let text = "Line one with sing\nAnother line with ring";
        let engine = engine();
        let groups = engine.detect_rhymes(text, Language::En);

        let sing = groups
            .iter()
            .find(|g| g.words.contains(&"sing".to_string()))
            .unwrap();
        assert_eq!(sing.words, vec!["sing", "ring"]);
        assert_eq!(sing.rhyme_type, RhymeType::Perfect);
        assert!((sing.strength - 1.0).abs() < f64::EPSILON);

        let scheme = engine
            .assign_rhyme_scheme(&groups, &text::split_lines(text))
            .unwrap();
        assert_eq!(letters(&scheme), vec!["A", "A"]);
    }

    #[test]
    fn unrelated_lines_have_no_groups() {
        let engine = engine();
        let groups = engine.detect_rhymes("cat\ndog", Language::En);
        assert!(groups.is_empty());
        let scheme = engine
            .assign_rhyme_scheme(&groups, &["cat", "dog"])
            .unwrap();
        assert_eq!(letters(&scheme), vec!["A", "B"]);
    }

    #[test]
    fn internal_rhyme_in_one_line() {
        let groups = engine().detect_rhymes("the cat sat on the mat", Language::En);
        let internal = groups
            .iter()
            .find(|g| g.rhyme_type == RhymeType::Internal)
            .unwrap();
        let allowed: HashSet<&str> = ["cat", "sat", "mat"].into_iter().collect();
        assert!(internal.words.len() >= 2);
        assert!(internal.words.iter().all(|w| allowed.contains(w.as_str())));
        assert!((internal.strength - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn cross_line_groups_precede_internal_ones() {
        let groups = engine().detect_rhymes("the cat sat on the mat", Language::En);
        let first_internal = groups
            .iter()
            .position(|g| !g.is_cross_line())
            .unwrap();
        assert!(groups[..first_internal].iter().all(RhymeGroup::is_cross_line));
        assert!(groups[first_internal..].iter().all(|g| !g.is_cross_line()));
        assert_eq!(groups[first_internal].id, "internal-0");
        assert_eq!(groups[0].id, "rhyme-0");
    }

    #[test]
    fn detection_is_deterministic() {
        let engine = engine();
        let first = serde_json::to_string(&engine.detect_rhymes(VERSE, Language::En)).unwrap();
        for _ in 0..5 {
            let again =
                serde_json::to_string(&engine.detect_rhymes(VERSE, Language::En)).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn groups_have_two_or_more_long_words() {
        let text = "a an the it is on to be\nso we go up my by me do";
        for group in engine().detect_rhymes(text, Language::En) {
            assert!(group.positions.len() >= 2);
            assert_eq!(group.words.len(), group.positions.len());
            assert!(group.words.iter().all(|w| w.chars().count() > 2));
        }
        for group in engine().detect_rhymes(VERSE, Language::En) {
            assert!(group.positions.len() >= 2);
            assert!(group.words.iter().all(|w| w.chars().count() > 2));
        }
    }

    #[test]
    fn perfect_groups_share_keys() {
        let engine = engine();
        for group in engine.detect_rhymes(VERSE, Language::En) {
            if group.rhyme_type == RhymeType::Perfect {
                for word in &group.words {
                    assert_eq!(engine.provider.rhyme_key(word, Language::En), group.key);
                }
            }
        }
    }

    #[test]
    fn verse_scheme_uses_alphabet_prefix() {
        let analysis = engine().analyze(VERSE, Language::En).unwrap();
        assert_eq!(analysis.line_count, 5);
        assert_eq!(analysis.scheme[2], SchemeSymbol::Blank);
        // night / light share a class; drum / come do not share a key.
        assert_eq!(letters(&analysis.scheme), vec!["A", "A", "-", "B", "C"]);
        assert_eq!(analysis.pattern, "A A - B C");
    }

    #[test]
    fn strength_threshold_filters_weak_groups() {
        let strict = engine().with_options(EngineOptions {
            min_strength: 0.95,
            ..EngineOptions::default()
        });
        // light / bite share a key but only as a weak near rhyme.
        let groups = strict.detect_rhymes("the light\na bite", Language::En);
        assert!(groups.iter().all(|g| g.strength >= 0.95 || !g.is_cross_line()));
        assert!(!groups.iter().any(|g| g.words.contains(&"bite".to_string())));

        let lenient = engine().detect_rhymes("the light\na bite", Language::En);
        assert!(lenient.iter().any(|g| g.words == ["light", "bite"]));
    }

    #[test]
    fn colours_cycle_through_palette() {
        let engine = engine().with_options(EngineOptions {
            palette: vec!["red".to_string(), "blue".to_string()],
            ..EngineOptions::default()
        });
        let text = "sing day cat\nring way hat";
        let groups = engine.detect_rhymes(text, Language::En);
        assert!(groups.len() >= 3);
        assert_eq!(groups[0].color, "red");
        assert_eq!(groups[1].color, "blue");
        assert_eq!(groups[2].color, "red");
    }

    #[test]
    fn empty_palette_falls_back_to_default() {
        let engine = engine().with_options(EngineOptions {
            palette: Vec::new(),
            ..EngineOptions::default()
        });
        let groups = engine.detect_rhymes("sing\nring", Language::En);
        assert_eq!(groups[0].color, DEFAULT_PALETTE[0]);
    }

    #[test]
    fn empty_text_is_empty_result() {
        let engine = engine();
        assert!(engine.detect_rhymes("", Language::En).is_empty());
        let analysis = engine.analyze("", Language::En).unwrap();
        assert_eq!(analysis.scheme, vec![SchemeSymbol::Blank]);
    }

    #[test]
    fn unknown_language_uses_raw_endings() {
        let groups = engine().detect_rhymes("sing\nring", Language::from_code("xx"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "ng");
    }

    #[test]
    fn spanish_stressed_endings_group() {
        let groups = engine().detect_rhymes("mi corazón\nesta canción", Language::Es);
        let group = groups
            .iter()
            .find(|g| g.words.contains(&"canción".to_string()))
            .unwrap();
        assert_eq!(group.words, vec!["corazón", "canción"]);
    }

    #[test]
    fn injected_tables_drive_keys() {
        let tables = RhymeTables::empty()
            .with_suffix_rule(Language::En, "ough", "ʌf")
            .with_suffix_rule(Language::En, "uff", "ʌf")
            .with_family_entry(Language::En, "uff", FamilyEntry::perfect("stuff", 0.5));
        let engine = RhymeEngine::new(Arc::new(tables));
        let groups = engine.detect_rhymes("tough\nenough\nrough\nstuff", Language::En);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "ʌf");
        assert_eq!(groups[0].words.len(), 4);
    }

    #[test]
    fn mismatched_lines_are_an_error() {
        let engine = engine();
        let groups = engine.detect_rhymes("Line one with sing\nAnother line with ring", Language::En);
        let err = engine
            .assign_rhyme_scheme(&groups, &["completely different"])
            .unwrap_err();
        assert!(matches!(err, RhymeError::LineMismatch { .. }));
    }

    #[test]
    fn transliterate_reports_tail_and_key() {
        let t = engine().transliterate("Canción!", Language::Es);
        assert_eq!(t.word, "canción");
        assert_eq!(t.transcription, "canθjˈon");
        assert_eq!(t.stress_tail, "on");
        assert_eq!(t.key, "ˈon");
    }

    #[test]
    fn compare_words_classifies_pair() {
        let engine = engine();
        let cmp = engine.compare_words("sing", "ring", Language::En);
        assert!(cmp.rhyme);
        assert_eq!(cmp.rhyme_type, Some(RhymeType::Perfect));

        let cmp = engine.compare_words("light", "bite", Language::En);
        assert!(cmp.rhyme);
        assert_eq!(cmp.rhyme_type, Some(RhymeType::Near));

        let cmp = engine.compare_words("cat", "dog", Language::En);
        assert!(!cmp.rhyme);
        assert_eq!(cmp.rhyme_type, None);
        assert!(cmp.strength.abs() < f64::EPSILON);
    }

    #[test]
    fn short_words_never_rhyme_in_comparison() {
        let cmp = engine().compare_words("at", "at", Language::En);
        assert!(!cmp.rhyme);
    }

    #[test]
    fn cached_engine_matches_uncached() {
        let tables = Arc::new(RhymeTables::builtin());
        let plain = RhymeEngine::new(Arc::clone(&tables));
        let cached = RhymeEngine::new(Arc::clone(&tables)).with_provider(Arc::new(
            CachedProvider::new(SuffixRuleProvider::new(tables), 2),
        ));
        assert_eq!(
            plain.detect_rhymes(VERSE, Language::En),
            cached.detect_rhymes(VERSE, Language::En)
        );
    }
}
