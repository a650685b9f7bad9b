//! Common lyric vocabulary for the near-rhyme fallback generator.
//!
//! When a query word's ending matches no curated family, candidates are
//! drawn from these lists and scored on spelling similarity alone.

use crate::language::Language;

/// `(word, frequency)` pairs.
pub type FallbackList = &'static [(&'static str, f64)];

/// English.
pub const EN_WORDS: FallbackList = &[
    ("love", 0.98),
    ("heart", 0.95),
    ("time", 0.94),
    ("life", 0.92),
    ("night", 0.92),
    ("day", 0.9),
    ("world", 0.88),
    ("dream", 0.85),
    ("soul", 0.8),
    ("fire", 0.8),
    ("rain", 0.78),
    ("home", 0.8),
    ("road", 0.7),
    ("light", 0.85),
    ("eyes", 0.86),
    ("mind", 0.8),
    ("free", 0.78),
    ("sky", 0.8),
    ("sea", 0.6),
    ("song", 0.75),
    ("true", 0.8),
    ("real", 0.75),
    ("gold", 0.55),
    ("cold", 0.65),
    ("alone", 0.75),
    ("forever", 0.7),
    ("together", 0.7),
    ("again", 0.8),
    ("feel", 0.85),
    ("know", 0.9),
    ("way", 0.9),
    ("run", 0.7),
    ("sun", 0.75),
    ("fun", 0.5),
    ("back", 0.7),
    ("dark", 0.65),
    ("lost", 0.65),
    ("still", 0.6),
    ("wild", 0.5),
    ("smile", 0.6),
    ("tears", 0.55),
    ("hold", 0.65),
];

/// Italian.
pub const IT_WORDS: FallbackList = &[
    ("amore", 0.98),
    ("cuore", 0.95),
    ("vita", 0.95),
    ("notte", 0.85),
    ("sole", 0.85),
    ("mare", 0.82),
    ("cielo", 0.8),
    ("tempo", 0.8),
    ("sogno", 0.75),
    ("mondo", 0.8),
    ("luna", 0.65),
    ("occhi", 0.7),
    ("stelle", 0.6),
    ("strada", 0.55),
    ("casa", 0.6),
    ("libero", 0.5),
    ("sempre", 0.8),
    ("niente", 0.65),
    ("insieme", 0.6),
    ("lacrime", 0.45),
];

/// Spanish.
pub const ES_WORDS: FallbackList = &[
    ("amor", 0.98),
    ("corazón", 0.95),
    ("vida", 0.95),
    ("noche", 0.88),
    ("sol", 0.8),
    ("mar", 0.8),
    ("cielo", 0.78),
    ("tiempo", 0.8),
    ("sueño", 0.75),
    ("mundo", 0.8),
    ("luna", 0.7),
    ("ojos", 0.7),
    ("fuego", 0.6),
    ("camino", 0.6),
    ("siempre", 0.82),
    ("nada", 0.7),
    ("juntos", 0.5),
    ("lágrimas", 0.45),
    ("libre", 0.5),
    ("alma", 0.7),
];

/// French.
pub const FR_WORDS: FallbackList = &[
    ("amour", 0.98),
    ("cœur", 0.95),
    ("vie", 0.95),
    ("nuit", 0.88),
    ("soleil", 0.8),
    ("mer", 0.75),
    ("ciel", 0.78),
    ("temps", 0.8),
    ("rêve", 0.72),
    ("monde", 0.8),
    ("lune", 0.6),
    ("yeux", 0.75),
    ("feu", 0.6),
    ("chemin", 0.6),
    ("toujours", 0.85),
    ("rien", 0.7),
    ("ensemble", 0.55),
    ("larmes", 0.5),
    ("libre", 0.5),
    ("âme", 0.6),
];

/// German.
pub const DE_WORDS: FallbackList = &[
    ("Liebe", 0.98),
    ("Herz", 0.95),
    ("Leben", 0.92),
    ("Nacht", 0.9),
    ("Sonne", 0.8),
    ("Meer", 0.7),
    ("Himmel", 0.78),
    ("Zeit", 0.88),
    ("Traum", 0.75),
    ("Welt", 0.82),
    ("Mond", 0.6),
    ("Augen", 0.72),
    ("Feuer", 0.6),
    ("Weg", 0.65),
    ("immer", 0.8),
    ("nichts", 0.7),
    ("zusammen", 0.55),
    ("Tränen", 0.5),
    ("frei", 0.6),
    ("Seele", 0.65),
];

/// Built-in fallback vocabulary. Generic text uses the English list.
pub const fn builtin_words(language: Language) -> FallbackList {
    match language.dictionary_language() {
        Language::It => IT_WORDS,
        Language::Es => ES_WORDS,
        Language::Fr => FR_WORDS,
        Language::De => DE_WORDS,
        Language::En | Language::Generic => EN_WORDS,
    }
}
