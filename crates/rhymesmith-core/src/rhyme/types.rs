//! Report structs for rhyme analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::text::{Span, Token};

/// How two or more words rhyme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RhymeType {
    /// Identical sound tail and identical spelled ending.
    Perfect,
    /// Same sound tail, different spelling.
    Near,
    /// Only the last vowel agrees.
    Slant,
    /// Spelled alike, pronounced differently (`love` / `move`).
    Eye,
    /// Two words rhyming inside a single line.
    Internal,
    /// Long words sharing a sound tail.
    Multisyllabic,
}

impl RhymeType {
    /// Returns the type as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Near => "near",
            Self::Slant => "slant",
            Self::Eye => "eye",
            Self::Internal => "internal",
            Self::Multisyllabic => "multisyllabic",
        }
    }

    /// Whether the type can label a suggestion (groups use all six).
    pub const fn is_suggestion_type(&self) -> bool {
        matches!(self, Self::Perfect | Self::Near | Self::Slant | Self::Eye)
    }

    /// Sort rank for suggestion buckets: perfect first, eye last.
    pub const fn bucket(&self) -> u8 {
        match self {
            Self::Perfect => 0,
            Self::Near => 1,
            Self::Multisyllabic => 2,
            Self::Internal => 3,
            Self::Slant => 4,
            Self::Eye => 5,
        }
    }
}

impl std::fmt::Display for RhymeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rhyme-candidate word found in the text, with its phonetic key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOccurrence {
    /// Normalized word (lowercase letters only, more than two of them).
    pub word: String,
    /// Line index (0-based).
    pub line: usize,
    /// Word index within the line.
    pub word_index: usize,
    /// Byte span of the raw token in the full text.
    pub span: Span,
    /// Heuristic phonetic key.
    pub key: String,
}

impl WordOccurrence {
    /// Attach a phonetic key to a token.
    pub fn new(token: Token, key: String) -> Self {
        Self {
            word: token.word,
            line: token.line,
            word_index: token.word_index,
            span: token.span,
            key,
        }
    }
}

/// Where one member of a rhyme group sits in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RhymePosition {
    /// Line index (0-based).
    pub line: usize,
    /// Word index within the line.
    pub word_index: usize,
    /// Normalized word.
    pub word: String,
    /// Byte span of the raw token.
    pub span: Span,
}

impl From<&WordOccurrence> for RhymePosition {
    fn from(occ: &WordOccurrence) -> Self {
        Self {
            line: occ.line,
            word_index: occ.word_index,
            word: occ.word.clone(),
            span: occ.span,
        }
    }
}

/// Words judged to rhyme with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeGroup {
    /// Unique id within one analysis (`rhyme-0`, `internal-0`, ...).
    pub id: String,
    /// Member words in text order, one per position.
    pub words: Vec<String>,
    /// Highlight colour from the cyclic palette.
    pub color: String,
    /// Rhyme classification.
    #[serde(rename = "type")]
    pub rhyme_type: RhymeType,
    /// Confidence in `0.0..=1.0`.
    pub strength: f64,
    /// Phonetic key shared by every member.
    pub key: String,
    /// Member positions, parallel to `words`.
    pub positions: Vec<RhymePosition>,
}

impl RhymeGroup {
    /// Whether this group spans line endings rather than sitting in one line.
    pub const fn is_cross_line(&self) -> bool {
        !matches!(self.rhyme_type, RhymeType::Internal)
    }

    /// Member words sorted and joined; identifies the rhyme class.
    pub fn word_set_key(&self) -> String {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words.join(" ")
    }
}

/// One rhyme-scheme entry per lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SchemeSymbol {
    /// A rhyme-class label (`A`, `B`, ..., `Z`, `AA`, ...).
    Letter(String),
    /// The line has no rhymable content.
    Blank,
}

impl SchemeSymbol {
    /// The label, if any.
    pub fn letter(&self) -> Option<&str> {
        match self {
            Self::Letter(l) => Some(l),
            Self::Blank => None,
        }
    }
}

impl std::fmt::Display for SchemeSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Letter(l) => f.write_str(l),
            Self::Blank => f.write_str("-"),
        }
    }
}

/// Groups and scheme for a whole lyric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeAnalysis {
    /// Language the analysis ran under.
    pub language: Language,
    /// Number of lines in the input.
    pub line_count: usize,
    /// Cross-line groups followed by internal groups.
    pub groups: Vec<RhymeGroup>,
    /// One symbol per line.
    pub scheme: Vec<SchemeSymbol>,
    /// The scheme as a compact string, e.g. `AABB` or `A B - A`.
    pub pattern: String,
}

/// Approximate phonetic rendering of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Transcription {
    /// Normalized word.
    pub word: String,
    /// Language of the rules applied.
    pub language: Language,
    /// Spelling with the matched ending rewritten.
    pub transcription: String,
    /// Segment after the last stress mark, or the final three characters.
    pub stress_tail: String,
    /// Key used for grouping.
    pub key: String,
}

/// Whether two words rhyme, and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeComparison {
    /// First word, as given.
    pub word1: String,
    /// Second word, as given.
    pub word2: String,
    /// Language of the rules applied.
    pub language: Language,
    /// Rendering of the first word.
    pub transcription1: String,
    /// Rendering of the second word.
    pub transcription2: String,
    /// Stress tail of the first word.
    pub stress_tail1: String,
    /// Stress tail of the second word.
    pub stress_tail2: String,
    /// Whether the phonetic keys match.
    pub rhyme: bool,
    /// Classification when the words rhyme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhyme_type: Option<RhymeType>,
    /// Confidence when the words rhyme, else 0.
    pub strength: f64,
}
