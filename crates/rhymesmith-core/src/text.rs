//! Text processing utilities.
//!
//! Provides line splitting, word tokenization with positions, word
//! normalization, and the spelling-level helpers (vowel skeletons, word
//! endings, syllable estimates) used by rhyme classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Words with this many letters or fewer never take part in rhyme analysis.
pub const MIN_WORD_LEN: usize = 2;

/// Byte range of a token in the full input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// A whitespace-delimited token that survived normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased word with all non-letters removed.
    pub word: String,
    /// Line index (0-based).
    pub line: usize,
    /// Index among all whitespace tokens of the line, short ones included.
    pub word_index: usize,
    /// Location of the raw token in the input.
    pub span: Span,
}

/// Split text into lines on `\n`, dropping a trailing `\r` from each.
///
/// A trailing newline produces a final empty line, so the line count always
/// equals the number of `\n` characters plus one.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Lowercase a token and strip every non-letter character.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a normalized word is long enough to rhyme.
pub fn is_candidate(word: &str) -> bool {
    word.chars().count() > MIN_WORD_LEN
}

/// Tokenize every line of `text`, keeping only rhyme candidates.
///
/// Tokens come out in reading order: by line, then by position in the line.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line_start = 0;

    for (line_idx, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        tokens.extend(tokenize_line(line, line_idx, line_start));
        line_start += raw_line.len() + 1;
    }

    tokens
}

/// Tokenize a single line whose first byte sits at `offset` in the full text.
pub fn tokenize_line(line: &str, line_idx: usize, offset: usize) -> Vec<Token> {
    whitespace_tokens(line)
        .enumerate()
        .filter_map(|(word_index, (start, raw))| {
            let word = normalize_word(raw);
            is_candidate(&word).then(|| Token {
                word,
                line: line_idx,
                word_index,
                span: Span {
                    start: offset + start,
                    end: offset + start + raw.len(),
                },
            })
        })
        .collect()
}

/// The last rhyme candidate on a line, if any.
pub fn last_candidate(line: &str, line_idx: usize) -> Option<Token> {
    tokenize_line(line, line_idx, 0).pop()
}

/// Whitespace-delimited runs of `line` with their byte offsets.
fn whitespace_tokens(line: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = line;
    let mut consumed = 0;
    std::iter::from_fn(move || {
        let trimmed = rest.trim_start();
        consumed += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            return None;
        }
        let end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let start = consumed;
        let token = &trimmed[..end];
        consumed += end;
        rest = &trimmed[end..];
        Some((start, token))
    })
}

/// The last `n` characters of `word` (all of it when shorter).
pub fn last_chars(word: &str, n: usize) -> &str {
    let count = word.chars().count();
    if count <= n {
        return word;
    }
    let skip = count - n;
    word.char_indices()
        .nth(skip)
        .map_or(word, |(idx, _)| &word[idx..])
}

/// The vowel letters of `word`, in order.
pub fn vowel_skeleton(word: &str, language: Language) -> String {
    word.chars().filter(|c| language.is_vowel(*c)).collect()
}

/// The final vowel letter of `word`.
pub fn last_vowel(word: &str, language: Language) -> Option<char> {
    word.chars().rev().find(|c| language.is_vowel(*c))
}

/// Estimate syllables by counting vowel groups.
///
/// English words lose a silent final `e` (`time`, `make`) except after
/// `l` (`table`); everything else counts each vowel run once.
pub fn estimate_syllables(word: &str, language: Language) -> usize {
    let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    if chars.is_empty() {
        return 0;
    }

    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;
    for &c in &chars {
        let is_vowel = language.is_vowel(c);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if matches!(language, Language::En | Language::Generic)
        && syllables > 1
        && chars.last() == Some(&'e')
        && chars.len() >= 2
        && chars[chars.len() - 2] != 'l'
        && !language.is_vowel(chars[chars.len() - 2])
    {
        syllables -= 1;
    }

    syllables.max(1)
}
