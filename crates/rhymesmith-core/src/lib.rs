//! Core library for rhymesmith.
//!
//! Rhyme detection and suggestion for lyric text, used by the `rhymesmith`
//! CLI and MCP server and by any downstream consumers.
//!
//! # Modules
//!
//! - [`rhyme`] - Rhyme groups, rhyme schemes and word comparison
//! - [`suggest`] - Ranked rhyme suggestions
//! - [`phonetic`] - Phonetic keys and the key cache
//! - [`dictionaries`] - Suffix rules, rhyme families and word lists
//! - [`text`] - Tokenization and spelling helpers
//! - [`language`] - Supported languages
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use rhymesmith_core::{Language, RhymeEngine, RhymeTables, SuggestionRanker};
//!
//! let tables = Arc::new(RhymeTables::builtin());
//! let engine = RhymeEngine::new(Arc::clone(&tables));
//!
//! let analysis = engine
//!     .analyze("Line one with sing\nAnother line with ring", Language::En)
//!     .unwrap();
//! assert_eq!(analysis.pattern, "AA");
//!
//! let ranker = SuggestionRanker::new(tables);
//! let suggestions = ranker.suggest("day", Language::En, None, None);
//! assert!(suggestions.iter().any(|s| s.word == "way"));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod language;
pub mod phonetic;
pub mod rhyme;
pub mod suggest;
pub mod text;

pub use config::{
    Config, ConfigLoader, ConfigSources, CustomFamily, DEFAULT_MAX_INPUT_BYTES, LogLevel,
};
pub use dictionaries::RhymeTables;
pub use error::{ConfigError, ConfigResult, RhymeError, RhymeResult};
pub use language::Language;
pub use phonetic::{PhoneticProvider, SuffixRuleProvider};
pub use rhyme::{
    EngineOptions, RhymeAnalysis, RhymeComparison, RhymeEngine, RhymeGroup, RhymeType,
    SchemeSymbol, Transcription,
};
pub use suggest::{Mood, RhymeSuggestion, SuggestOptions, SuggestionRanker};
