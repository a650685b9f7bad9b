//! Cross-line rhyme grouping and pair classification.

use std::collections::HashMap;

use crate::language::Language;
use crate::text;

use super::types::{RhymeGroup, RhymePosition, RhymeType, WordOccurrence};

/// Strength of a group whose members share key and spelled ending.
pub const PERFECT_STRENGTH: f64 = 1.0;
/// Strength of long words sharing a key.
pub const MULTISYLLABIC_STRENGTH: f64 = 0.9;
/// Strength of a shared key with matching vowel skeletons.
pub const NEAR_STRENGTH: f64 = 0.8;
/// Strength of a shared key with nothing else in common.
pub const WEAK_NEAR_STRENGTH: f64 = 0.6;

/// Words longer than this count as multisyllabic.
const MULTISYLLABIC_MIN_LEN: usize = 6;

/// Characters compared for the spelled-ending check.
const ENDING_LEN: usize = 2;

/// Bucket occurrences by exact key, keeping first-seen order of keys and
/// reading order within each bucket.
pub fn group_by_key(occurrences: &[WordOccurrence]) -> Vec<Vec<&WordOccurrence>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<Vec<&WordOccurrence>> = Vec::new();

    for occ in occurrences {
        if let Some(&slot) = index.get(occ.key.as_str()) {
            buckets[slot].push(occ);
        } else {
            index.insert(occ.key.as_str(), buckets.len());
            buckets.push(vec![occ]);
        }
    }

    buckets
}

/// Classify words already known to share a phonetic key.
///
/// Checks run in order: identical last two letters, identical vowel
/// skeletons, all words longer than six letters, and finally a weak near
/// rhyme.
pub fn classify<S: AsRef<str>>(words: &[S], language: Language) -> (RhymeType, f64) {
    let Some((first, rest)) = words.split_first() else {
        return (RhymeType::Near, WEAK_NEAR_STRENGTH);
    };
    let first = first.as_ref();

    let ending = text::last_chars(first, ENDING_LEN);
    if rest
        .iter()
        .all(|w| text::last_chars(w.as_ref(), ENDING_LEN) == ending)
    {
        return (RhymeType::Perfect, PERFECT_STRENGTH);
    }

    let skeleton = text::vowel_skeleton(first, language);
    if rest
        .iter()
        .all(|w| text::vowel_skeleton(w.as_ref(), language) == skeleton)
    {
        return (RhymeType::Near, NEAR_STRENGTH);
    }

    if words
        .iter()
        .all(|w| w.as_ref().chars().count() > MULTISYLLABIC_MIN_LEN)
    {
        return (RhymeType::Multisyllabic, MULTISYLLABIC_STRENGTH);
    }

    (RhymeType::Near, WEAK_NEAR_STRENGTH)
}

/// Every key shared by two or more occurrences, classified.
///
/// Ids and colours are left empty for the caller to assign.
pub fn cross_line_groups(occurrences: &[WordOccurrence], language: Language) -> Vec<RhymeGroup> {
    group_by_key(occurrences)
        .into_iter()
        .filter(|bucket| bucket.len() >= 2)
        .map(|bucket| {
            let words: Vec<String> = bucket.iter().map(|o| o.word.clone()).collect();
            let (rhyme_type, strength) = classify(&words, language);
            RhymeGroup {
                id: String::new(),
                color: String::new(),
                rhyme_type,
                strength,
                key: bucket[0].key.clone(),
                positions: bucket.iter().map(|o| RhymePosition::from(*o)).collect(),
                words,
            }
        })
        .collect()
}
