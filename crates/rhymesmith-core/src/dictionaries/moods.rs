//! Mood word lists for suggestion filtering.
//!
//! A positive-mood request drops words from the negative list and vice
//! versa. Entries are lowercase; callers compare normalized words.

use crate::language::Language;
use crate::suggest::Mood;

/// English words that read as negative.
pub const EN_NEGATIVE: &[&str] = &[
    "sad", "cry", "pain", "hurt", "tears", "die", "death", "lonely", "broken", "fear", "blame",
    "shame", "lost", "dark", "cold", "alone", "goodbye", "insane",
];

/// English words that read as positive.
pub const EN_POSITIVE: &[&str] = &[
    "happy", "joy", "smile", "laugh", "glad", "bright", "shine", "delight", "fun", "sun", "free",
    "grace", "dance", "play", "light", "love",
];

const IT_NEGATIVE: &[&str] = &["dolore", "ferita", "lacrime", "tormento", "niente", "male"];
const IT_POSITIVE: &[&str] = &["amore", "sole", "sognare", "volare", "cantare", "ballare"];

const ES_NEGATIVE: &[&str] = &["llorar", "herida", "perdida", "lágrimas", "cansado", "olvidado"];
const ES_POSITIVE: &[&str] = &["alegría", "amar", "bailar", "cantar", "soñar", "sol"];

const FR_NEGATIVE: &[&str] = &["douleur", "peur", "pleurs", "pleurer", "souffrance", "larmes"];
const FR_POSITIVE: &[&str] = &["bonheur", "amour", "chanter", "danser", "rêver", "chance"];

const DE_NEGATIVE: &[&str] = &["schmerz", "einsamkeit", "allein", "tränen", "diebe"];
const DE_POSITIVE: &[&str] = &["liebe", "freiheit", "lacht", "sonne", "pracht", "scherz"];

/// Words to drop for a requested mood.
///
/// [`Mood::Neutral`] excludes nothing.
pub const fn builtin_exclusions(language: Language, mood: Mood) -> &'static [&'static str] {
    let (negative, positive) = match language.dictionary_language() {
        Language::It => (IT_NEGATIVE, IT_POSITIVE),
        Language::Es => (ES_NEGATIVE, ES_POSITIVE),
        Language::Fr => (FR_NEGATIVE, FR_POSITIVE),
        Language::De => (DE_NEGATIVE, DE_POSITIVE),
        Language::En | Language::Generic => (EN_NEGATIVE, EN_POSITIVE),
    };
    match mood {
        Mood::Positive => negative,
        Mood::Negative => positive,
        Mood::Neutral => &[],
    }
}
