//! Rhymes inside a single line.

use super::grouping::group_by_key;
use super::types::{RhymeGroup, RhymePosition, RhymeType, WordOccurrence};

/// Strength of every internal group.
pub const INTERNAL_STRENGTH: f64 = 0.7;

/// Per line, each key carried by at least two distinct words.
///
/// A repeated word contributes only its first occurrence in the line.
/// `occurrences` must be in reading order.
pub fn internal_groups(occurrences: &[WordOccurrence]) -> Vec<RhymeGroup> {
    let mut groups = Vec::new();

    for line in occurrences.chunk_by(|a, b| a.line == b.line) {
        for bucket in group_by_key(line) {
            let mut distinct: Vec<&WordOccurrence> = Vec::new();
            for occ in bucket {
                if !distinct.iter().any(|d| d.word == occ.word) {
                    distinct.push(occ);
                }
            }
            if distinct.len() < 2 {
                continue;
            }
            groups.push(RhymeGroup {
                id: String::new(),
                color: String::new(),
                rhyme_type: RhymeType::Internal,
                strength: INTERNAL_STRENGTH,
                key: distinct[0].key.clone(),
                words: distinct.iter().map(|o| o.word.clone()).collect(),
                positions: distinct.iter().map(|o| RhymePosition::from(*o)).collect(),
            });
        }
    }

    groups
}
