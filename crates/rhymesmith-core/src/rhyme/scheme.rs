//! Rhyme-scheme letters.

use std::collections::HashMap;

use crate::error::{RhymeError, RhymeResult};
use crate::text;

use super::types::{RhymeGroup, SchemeSymbol};

/// Spreadsheet-style label for the `index`-th rhyme class: `A`..`Z`, `AA`..
pub fn scheme_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    label.into_iter().rev().collect()
}

/// Compact rendering of a scheme.
///
/// Single letters with no blanks collapse to `AABB`; anything else is
/// space-separated with `-` for blank lines.
pub fn pattern_string(scheme: &[SchemeSymbol]) -> String {
    let compact = scheme
        .iter()
        .all(|s| s.letter().is_some_and(|l| l.len() == 1));
    let parts: Vec<String> = scheme.iter().map(ToString::to_string).collect();
    if compact {
        parts.concat()
    } else {
        parts.join(" ")
    }
}

/// Label each line by the rhyme class of its last candidate word.
///
/// Every group position must exist in `lines`; a stale or foreign group
/// yields [`RhymeError::LineMismatch`]. Only group positions are checked:
/// lines past the last grouped line are labelled, not rejected.
pub fn assign_scheme(groups: &[RhymeGroup], lines: &[&str]) -> RhymeResult<Vec<SchemeSymbol>> {
    let tokenized: Vec<_> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| text::tokenize_line(line, idx, 0))
        .collect();

    for group in groups {
        for pos in &group.positions {
            let exists = tokenized.get(pos.line).is_some_and(|tokens| {
                tokens
                    .iter()
                    .any(|t| t.word_index == pos.word_index && t.word == pos.word)
            });
            if !exists {
                return Err(RhymeError::LineMismatch {
                    group: group.id.clone(),
                    line: pos.line,
                    word_index: pos.word_index,
                    word: pos.word.clone(),
                    line_count: lines.len(),
                });
            }
        }
    }

    let mut membership: HashMap<(usize, usize), &RhymeGroup> = HashMap::new();
    for group in groups.iter().filter(|g| g.is_cross_line()) {
        for pos in &group.positions {
            membership.entry((pos.line, pos.word_index)).or_insert(group);
        }
    }

    let mut letters: HashMap<String, String> = HashMap::new();
    let mut next = 0;
    let mut fresh = || {
        let label = scheme_label(next);
        next += 1;
        label
    };

    let scheme = tokenized
        .iter()
        .map(|tokens| {
            let Some(last) = tokens.last() else {
                return SchemeSymbol::Blank;
            };
            let letter = match membership.get(&(last.line, last.word_index)) {
                Some(group) => letters
                    .entry(group.word_set_key())
                    .or_insert_with(&mut fresh)
                    .clone(),
                None => fresh(),
            };
            SchemeSymbol::Letter(letter)
        })
        .collect();

    Ok(scheme)
}
