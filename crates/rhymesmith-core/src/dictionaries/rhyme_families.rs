//! Curated rhyme families keyed by word ending.
//!
//! Each family maps an orthographic pattern (`"ay"`, `"ight"`, `"ón"`) to
//! hand-picked rhyming words with a rhyme type and a rough commonness score
//! in lyrics (1.0 = everywhere, 0.1 = rare). A query word picks up every
//! family whose pattern it ends with.

use crate::language::Language;
use crate::rhyme::RhymeType;

/// A static family member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    /// Surface form of the suggested word.
    pub word: &'static str,
    /// How well the word rhymes with the family pattern.
    pub rhyme_type: RhymeType,
    /// Commonness score in `0.0..=1.0`.
    pub frequency: f64,
    /// Short meaning hint, mostly for non-English entries.
    pub gloss: Option<&'static str>,
    /// Words that commonly appear alongside this one in lyrics.
    pub context: &'static [&'static str],
}

impl Seed {
    const fn new(word: &'static str, rhyme_type: RhymeType, frequency: f64) -> Self {
        Self {
            word,
            rhyme_type,
            frequency,
            gloss: None,
            context: &[],
        }
    }

    const fn gloss(self, gloss: &'static str) -> Self {
        Self {
            gloss: Some(gloss),
            ..self
        }
    }

    const fn context(self, context: &'static [&'static str]) -> Self {
        Self { context, ..self }
    }
}

const fn p(word: &'static str, frequency: f64) -> Seed {
    Seed::new(word, RhymeType::Perfect, frequency)
}

const fn n(word: &'static str, frequency: f64) -> Seed {
    Seed::new(word, RhymeType::Near, frequency)
}

const fn s(word: &'static str, frequency: f64) -> Seed {
    Seed::new(word, RhymeType::Slant, frequency)
}

const fn e(word: &'static str, frequency: f64) -> Seed {
    Seed::new(word, RhymeType::Eye, frequency)
}

/// A pattern and its members.
pub type Family = (&'static str, &'static [Seed]);

/// English families.
pub const EN_FAMILIES: &[Family] = &[
    (
        "ay",
        &[
            p("day", 0.97).context(&["night", "sun"]),
            p("way", 0.95).context(&["road", "home"]),
            p("say", 0.93),
            p("play", 0.9).context(&["game", "song"]),
            p("away", 0.88),
            p("today", 0.86),
            p("stay", 0.85),
            p("okay", 0.7),
            p("gray", 0.6),
            p("pray", 0.55),
            p("ray", 0.5),
            p("sway", 0.4),
            p("yesterday", 0.45),
            n("rain", 0.5),
            s("game", 0.4),
        ],
    ),
    (
        "ight",
        &[
            p("night", 0.96).context(&["day", "moon"]),
            p("light", 0.94),
            p("right", 0.9),
            p("fight", 0.8),
            p("bright", 0.75),
            p("tonight", 0.8),
            p("sight", 0.6),
            p("tight", 0.6),
            p("flight", 0.5),
            p("might", 0.55),
            p("delight", 0.35),
            p("white", 0.6),
            n("time", 0.5),
            s("life", 0.6),
        ],
    ),
    (
        "ine",
        &[
            p("mine", 0.9),
            p("line", 0.8),
            p("fine", 0.8),
            p("shine", 0.75),
            p("sign", 0.6),
            p("wine", 0.55),
            p("divine", 0.4),
            p("design", 0.35),
            n("time", 0.6),
            n("mind", 0.55),
            e("machine", 0.2),
        ],
    ),
    (
        "ove",
        &[
            p("love", 0.98).context(&["heart", "forever"]),
            p("above", 0.7),
            p("dove", 0.4),
            p("glove", 0.35),
            p("shove", 0.3),
            n("enough", 0.55),
            s("of", 0.3),
            e("move", 0.5),
            e("prove", 0.35),
        ],
    ),
    (
        "art",
        &[
            p("heart", 0.95).context(&["love", "soul"]),
            p("start", 0.85),
            p("part", 0.8),
            p("apart", 0.7),
            p("art", 0.5),
            p("smart", 0.45),
            p("chart", 0.3),
            s("dark", 0.6),
        ],
    ),
    (
        "ain",
        &[
            p("rain", 0.9).context(&["clouds", "storm"]),
            p("pain", 0.85),
            p("again", 0.88),
            p("remain", 0.5),
            p("train", 0.55),
            p("chain", 0.45),
            p("brain", 0.4),
            p("insane", 0.35),
            n("same", 0.6),
            s("name", 0.5),
        ],
    ),
    (
        "ire",
        &[
            p("fire", 0.93),
            p("desire", 0.7),
            p("higher", 0.65),
            p("wire", 0.4),
            p("inspire", 0.35),
            p("entire", 0.3),
            p("tire", 0.3),
            n("liar", 0.35),
            e("choir", 0.25),
        ],
    ),
    (
        "ing",
        &[
            p("sing", 0.9),
            p("thing", 0.88),
            p("bring", 0.8),
            p("ring", 0.7),
            p("king", 0.6),
            p("wing", 0.55),
            p("spring", 0.55),
            p("everything", 0.8),
            p("swing", 0.45),
            p("sting", 0.3),
            s("win", 0.5),
        ],
    ),
    (
        "ind",
        &[
            p("mind", 0.9),
            p("find", 0.88),
            p("kind", 0.7),
            p("behind", 0.75),
            p("blind", 0.55),
            n("time", 0.5),
            e("wind", 0.6),
        ],
    ),
    (
        "ue",
        &[
            p("true", 0.92),
            p("blue", 0.85),
            p("you", 0.98),
            p("through", 0.8),
            p("new", 0.82),
            p("do", 0.8),
            p("clue", 0.3),
            p("due", 0.3),
            n("soon", 0.5),
        ],
    ),
    (
        "ee",
        &[
            p("see", 0.93),
            p("free", 0.88),
            p("tree", 0.6),
            p("key", 0.55),
            p("degree", 0.25),
            p("agree", 0.4),
            p("sea", 0.65),
            p("believe", 0.7),
            n("dream", 0.6),
        ],
    ),
    (
        "eel",
        &[
            p("feel", 0.93),
            p("real", 0.88),
            p("heal", 0.6),
            p("deal", 0.55),
            p("steel", 0.4),
            p("wheel", 0.45),
            p("reveal", 0.35),
            s("still", 0.5),
        ],
    ),
    (
        "ace",
        &[
            p("place", 0.88),
            p("face", 0.87),
            p("grace", 0.6),
            p("space", 0.65),
            p("race", 0.5),
            p("embrace", 0.4),
            n("chase", 0.45),
            s("safe", 0.4),
        ],
    ),
    (
        "ear",
        &[
            p("near", 0.8),
            p("fear", 0.82),
            p("clear", 0.75),
            p("year", 0.78),
            p("here", 0.9),
            p("tear", 0.55),
            p("appear", 0.45),
            p("dear", 0.5),
            p("disappear", 0.4),
            e("bear", 0.35),
            e("heart", 0.5),
        ],
    ),
    (
        "one",
        &[
            p("alone", 0.88),
            p("stone", 0.6),
            p("phone", 0.6),
            p("bone", 0.45),
            n("known", 0.55),
            n("home", 0.7),
            e("one", 0.9),
            e("gone", 0.7),
            e("done", 0.7),
        ],
    ),
    (
        "ame",
        &[
            p("name", 0.9),
            p("game", 0.82),
            p("same", 0.85),
            p("flame", 0.6),
            p("blame", 0.6),
            p("frame", 0.35),
            p("shame", 0.5),
            p("came", 0.75),
            p("claim", 0.4),
            n("rain", 0.45),
        ],
    ),
    (
        "ound",
        &[
            p("sound", 0.87),
            p("ground", 0.8),
            p("found", 0.82),
            p("around", 0.86),
            p("round", 0.6),
            p("bound", 0.4),
            p("profound", 0.25),
            n("down", 0.7),
        ],
    ),
    (
        "ad",
        &[
            p("sad", 0.7),
            p("bad", 0.75),
            p("glad", 0.5),
            p("mad", 0.55),
            p("had", 0.8),
            p("dad", 0.4),
            s("back", 0.5),
        ],
    ),
    (
        "at",
        &[
            p("that", 0.95),
            p("cat", 0.5),
            p("hat", 0.4),
            p("flat", 0.45),
            p("sat", 0.35),
            p("bat", 0.3),
            p("mat", 0.25),
            s("back", 0.4),
            e("what", 0.8),
        ],
    ),
    (
        "ie",
        &[
            p("lie", 0.8),
            p("die", 0.75),
            p("cry", 0.8),
            p("sky", 0.85),
            p("fly", 0.8),
            p("why", 0.85),
            p("high", 0.75),
            p("goodbye", 0.7),
            p("eye", 0.6),
            p("tie", 0.4),
            n("time", 0.5),
        ],
    ),
];

/// Italian families.
pub const IT_FAMILIES: &[Family] = &[
    (
        "ore",
        &[
            p("amore", 0.98).gloss("love"),
            p("cuore", 0.95).gloss("heart"),
            p("dolore", 0.8).gloss("pain"),
            p("fiore", 0.7).gloss("flower"),
            p("colore", 0.6).gloss("colour"),
            p("ore", 0.5).gloss("hours"),
            p("sapore", 0.4).gloss("taste"),
            p("rumore", 0.45).gloss("noise"),
            p("calore", 0.5).gloss("warmth"),
            n("mare", 0.6).gloss("sea"),
        ],
    ),
    (
        "ento",
        &[
            p("vento", 0.85).gloss("wind"),
            p("momento", 0.88).gloss("moment"),
            p("tormento", 0.55).gloss("torment"),
            p("lento", 0.6).gloss("slow"),
            p("sento", 0.8).gloss("I feel"),
            p("argento", 0.35).gloss("silver"),
            s("tempo", 0.7).gloss("time"),
        ],
    ),
    (
        "are",
        &[
            p("mare", 0.9).gloss("sea"),
            p("amare", 0.88).gloss("to love"),
            p("cantare", 0.8).gloss("to sing"),
            p("volare", 0.75).gloss("to fly"),
            p("pensare", 0.7).gloss("to think"),
            p("sognare", 0.72).gloss("to dream"),
            n("ballare", 0.55).gloss("to dance"),
        ],
    ),
    (
        "ita",
        &[
            p("vita", 0.97).gloss("life"),
            p("infinita", 0.6).gloss("infinite"),
            p("ferita", 0.55).gloss("wound"),
            p("dita", 0.4).gloss("fingers"),
            p("salita", 0.35).gloss("climb"),
            p("partita", 0.45).gloss("match"),
            s("via", 0.6).gloss("away"),
        ],
    ),
    (
        "ole",
        &[
            p("sole", 0.92).gloss("sun"),
            p("parole", 0.85).gloss("words"),
            p("vuole", 0.7).gloss("wants"),
            p("scuole", 0.3).gloss("schools"),
            p("viole", 0.25).gloss("violets"),
            n("amore", 0.6).gloss("love"),
        ],
    ),
    (
        "one",
        &[
            p("canzone", 0.85).gloss("song"),
            p("emozione", 0.8).gloss("emotion"),
            p("passione", 0.75).gloss("passion"),
            p("ragione", 0.6).gloss("reason"),
            p("illusione", 0.5).gloss("illusion"),
            p("stagione", 0.45).gloss("season"),
        ],
    ),
];

/// Spanish families.
pub const ES_FAMILIES: &[Family] = &[
    (
        "ón",
        &[
            p("corazón", 0.97).gloss("heart"),
            p("canción", 0.9).gloss("song"),
            p("razón", 0.8).gloss("reason"),
            p("pasión", 0.78).gloss("passion"),
            p("ilusión", 0.6).gloss("hope"),
            p("perdón", 0.6).gloss("forgiveness"),
            p("emoción", 0.55).gloss("emotion"),
            n("amor", 0.7).gloss("love"),
        ],
    ),
    (
        "ar",
        &[
            p("amar", 0.9).gloss("to love"),
            p("mar", 0.88).gloss("sea"),
            p("cantar", 0.8).gloss("to sing"),
            p("soñar", 0.78).gloss("to dream"),
            p("llorar", 0.65).gloss("to cry"),
            p("bailar", 0.7).gloss("to dance"),
            p("lugar", 0.6).gloss("place"),
            n("volver", 0.6).gloss("to return"),
        ],
    ),
    (
        "ía",
        &[
            p("día", 0.92).gloss("day"),
            p("mía", 0.8).gloss("mine"),
            p("alegría", 0.7).gloss("joy"),
            p("fantasía", 0.55).gloss("fantasy"),
            p("poesía", 0.5).gloss("poetry"),
            p("melodía", 0.6).gloss("melody"),
            p("todavía", 0.55).gloss("still"),
            s("vida", 0.7).gloss("life"),
        ],
    ),
    (
        "ado",
        &[
            p("pasado", 0.8).gloss("past"),
            p("amado", 0.7).gloss("beloved"),
            p("lado", 0.85).gloss("side"),
            p("cansado", 0.5).gloss("tired"),
            p("olvidado", 0.55).gloss("forgotten"),
            n("callado", 0.4).gloss("silent"),
        ],
    ),
    (
        "ente",
        &[
            p("gente", 0.85).gloss("people"),
            p("mente", 0.8).gloss("mind"),
            p("presente", 0.6).gloss("present"),
            p("frente", 0.65).gloss("forehead"),
            p("diferente", 0.55).gloss("different"),
            s("siempre", 0.8).gloss("always"),
        ],
    ),
    (
        "ida",
        &[
            p("vida", 0.97).gloss("life"),
            p("herida", 0.6).gloss("wound"),
            p("perdida", 0.55).gloss("lost"),
            p("salida", 0.5).gloss("exit"),
            p("querida", 0.6).gloss("darling"),
            s("día", 0.6).gloss("day"),
        ],
    ),
];

/// French families.
pub const FR_FAMILIES: &[Family] = &[
    (
        "our",
        &[
            p("amour", 0.97).gloss("love"),
            p("jour", 0.9).gloss("day"),
            p("toujours", 0.88).gloss("always"),
            p("retour", 0.6).gloss("return"),
            p("autour", 0.55).gloss("around"),
            p("tour", 0.45).gloss("turn"),
            p("velours", 0.25).gloss("velvet"),
            n("sourd", 0.3).gloss("deaf"),
        ],
    ),
    (
        "eur",
        &[
            p("cœur", 0.96).gloss("heart"),
            p("bonheur", 0.85).gloss("happiness"),
            p("douleur", 0.7).gloss("pain"),
            p("fleur", 0.65).gloss("flower"),
            p("peur", 0.75).gloss("fear"),
            p("couleur", 0.55).gloss("colour"),
            p("chaleur", 0.5).gloss("warmth"),
            p("pleurs", 0.45).gloss("tears"),
        ],
    ),
    (
        "ie",
        &[
            p("vie", 0.95).gloss("life"),
            p("envie", 0.75).gloss("desire"),
            p("folie", 0.6).gloss("madness"),
            p("mélodie", 0.5).gloss("melody"),
            p("pluie", 0.6).gloss("rain"),
            s("nuit", 0.85).gloss("night"),
        ],
    ),
    (
        "ance",
        &[
            p("chance", 0.75).gloss("luck"),
            p("France", 0.5),
            p("enfance", 0.55).gloss("childhood"),
            p("souffrance", 0.45).gloss("suffering"),
            p("danse", 0.6).gloss("dance"),
            n("silence", 0.7).gloss("silence"),
        ],
    ),
    (
        "er",
        &[
            p("aimer", 0.92).gloss("to love"),
            p("chanter", 0.8).gloss("to sing"),
            p("rêver", 0.75).gloss("to dream"),
            p("danser", 0.7).gloss("to dance"),
            p("oublier", 0.6).gloss("to forget"),
            p("pleurer", 0.55).gloss("to cry"),
            e("hiver", 0.5).gloss("winter"),
        ],
    ),
];

/// German families.
pub const DE_FAMILIES: &[Family] = &[
    (
        "erz",
        &[
            p("Herz", 0.97).gloss("heart"),
            p("Schmerz", 0.85).gloss("pain"),
            p("Scherz", 0.4).gloss("joke"),
            p("Nerz", 0.15).gloss("mink"),
            n("abwärts", 0.3).gloss("downwards"),
        ],
    ),
    (
        "ein",
        &[
            p("sein", 0.9).gloss("to be"),
            p("allein", 0.85).gloss("alone"),
            p("Wein", 0.6).gloss("wine"),
            p("klein", 0.65).gloss("small"),
            p("mein", 0.88).gloss("my"),
            p("dein", 0.85).gloss("your"),
            p("Schein", 0.45).gloss("glow"),
            n("Zeit", 0.7).gloss("time"),
        ],
    ),
    (
        "acht",
        &[
            p("Nacht", 0.95).gloss("night"),
            p("Macht", 0.6).gloss("power"),
            p("lacht", 0.55).gloss("laughs"),
            p("gedacht", 0.6).gloss("thought"),
            p("sacht", 0.25).gloss("gently"),
            p("Pracht", 0.3).gloss("splendour"),
        ],
    ),
    (
        "eit",
        &[
            p("Zeit", 0.95).gloss("time"),
            p("Ewigkeit", 0.6).gloss("eternity"),
            p("weit", 0.7).gloss("far"),
            p("bereit", 0.6).gloss("ready"),
            p("Einsamkeit", 0.5).gloss("loneliness"),
            p("Freiheit", 0.65).gloss("freedom"),
            n("allein", 0.5).gloss("alone"),
        ],
    ),
    (
        "iebe",
        &[
            p("Liebe", 0.97).gloss("love"),
            p("Triebe", 0.3).gloss("urges"),
            p("bliebe", 0.3).gloss("would stay"),
            p("Diebe", 0.2).gloss("thieves"),
            s("Tiefe", 0.4).gloss("depth"),
        ],
    ),
    (
        "and",
        &[
            p("Hand", 0.9).gloss("hand"),
            p("Land", 0.8).gloss("country"),
            p("Sand", 0.55).gloss("sand"),
            p("Strand", 0.6).gloss("beach"),
            p("Wand", 0.45).gloss("wall"),
            p("verstand", 0.5).gloss("understood"),
        ],
    ),
];

/// Built-in families for a language. Generic text uses the English tables.
pub const fn builtin_families(language: Language) -> &'static [Family] {
    match language.dictionary_language() {
        Language::It => IT_FAMILIES,
        Language::Es => ES_FAMILIES,
        Language::Fr => FR_FAMILIES,
        Language::De => DE_FAMILIES,
        Language::En | Language::Generic => EN_FAMILIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_in_range() {
        for lang in Language::SUPPORTED {
            for (pattern, seeds) in builtin_families(*lang) {
                for seed in *seeds {
                    assert!(
                        (0.0..=1.0).contains(&seed.frequency),
                        "{lang}/{pattern}: {} has frequency {}",
                        seed.word,
                        seed.frequency
                    );
                }
            }
        }
    }

    #[test]
    fn suggestion_types_exclude_group_only_kinds() {
        for lang in Language::SUPPORTED {
            for (_, seeds) in builtin_families(*lang) {
                for seed in *seeds {
                    assert!(seed.rhyme_type.is_suggestion_type(), "{}", seed.word);
                }
            }
        }
    }

    #[test]
    fn day_family_lists_way_and_play() {
        let (_, seeds) = EN_FAMILIES
            .iter()
            .find(|(pattern, _)| *pattern == "ay")
            .unwrap();
        assert!(seeds.iter().any(|s| s.word == "way"));
        assert!(seeds.iter().any(|s| s.word == "play"));
    }
}
