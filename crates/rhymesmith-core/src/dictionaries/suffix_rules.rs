//! Orthographic suffix → approximate phonetic tail rewrites.
//!
//! These tables are a spelling heuristic, not a pronunciation dictionary.
//! Plenty of real words come out wrong (`bear` gets the vowel of `near`);
//! that is expected. A tail may carry a primary-stress mark `ˈ` before the
//! stressed vowel when the ending fixes the stress (Spanish `-ón`, `-ar`).
//!
//! Order inside a table does not matter: [`super::RhymeTables`] sorts each
//! table longest-suffix-first when it is built.

use crate::language::Language;

/// English endings.
pub const EN_RULES: &[(&str, &str)] = &[
    ("eight", "eɪt"),
    ("ight", "aɪt"),
    ("ite", "aɪt"),
    ("tion", "ʃən"),
    ("sion", "ʒən"),
    ("cian", "ʃən"),
    ("ould", "ʊd"),
    ("ness", "nəs"),
    ("less", "ləs"),
    ("ment", "mənt"),
    ("ance", "əns"),
    ("ence", "əns"),
    ("able", "əbəl"),
    ("ible", "əbəl"),
    ("ture", "tʃər"),
    ("ious", "iəs"),
    ("ous", "əs"),
    ("ful", "fəl"),
    ("ing", "ɪŋ"),
    ("ine", "aɪn"),
    ("ign", "aɪn"),
    ("ire", "aɪər"),
    ("eart", "ɑrt"),
    ("art", "ɑrt"),
    ("ear", "ɪər"),
    ("eer", "ɪər"),
    ("air", "ɛər"),
    ("are", "ɛər"),
    ("ore", "ɔr"),
    ("oor", "ɔr"),
    ("our", "aʊər"),
    ("ower", "aʊər"),
    ("ound", "aʊnd"),
    ("ain", "eɪn"),
    ("ane", "eɪn"),
    ("ame", "eɪm"),
    ("aim", "eɪm"),
    ("ake", "eɪk"),
    ("ate", "eɪt"),
    ("ay", "eɪ"),
    ("eigh", "eɪ"),
    ("igh", "aɪ"),
    ("ie", "aɪ"),
    ("ee", "iː"),
    ("ea", "iː"),
    ("eal", "iːl"),
    ("eel", "iːl"),
    ("ew", "uː"),
    ("oo", "uː"),
    ("ue", "uː"),
    ("ove", "ʌv"),
    ("all", "ɔːl"),
    ("ell", "ɛl"),
    ("ill", "ɪl"),
    ("ind", "aɪnd"),
    ("er", "ər"),
    ("ly", "li"),
];

/// Italian endings. Italian spelling is close to phonemic, so most rules
/// only mark digraphs.
pub const IT_RULES: &[(&str, &str)] = &[
    ("zione", "tsjone"),
    ("sione", "zjone"),
    ("mente", "mente"),
    ("ezza", "ettsa"),
    ("ore", "ore"),
    ("ato", "ato"),
    ("ata", "ata"),
    ("ito", "ito"),
    ("ita", "ita"),
    ("uto", "uto"),
    ("are", "are"),
    ("ere", "ere"),
    ("ire", "ire"),
    ("ano", "ano"),
    ("ino", "ino"),
    ("one", "one"),
    ("ento", "ento"),
    ("cia", "tʃa"),
    ("gia", "dʒa"),
    ("cio", "tʃo"),
    ("gio", "dʒo"),
    ("chi", "ki"),
    ("che", "ke"),
    ("ghi", "gi"),
    ("ghe", "ge"),
    ("gli", "ʎi"),
    ("gna", "ɲa"),
    ("gno", "ɲo"),
    ("sce", "ʃe"),
    ("sci", "ʃi"),
    ("tà", "ˈta"),
    ("ò", "ˈɔ"),
    ("ù", "ˈu"),
];

/// Spanish endings.
pub const ES_RULES: &[(&str, &str)] = &[
    ("ción", "θjˈon"),
    ("sión", "sjˈon"),
    ("ón", "ˈon"),
    ("dad", "ðˈað"),
    ("tad", "tˈað"),
    ("mente", "mente"),
    ("ado", "aðo"),
    ("ada", "aða"),
    ("ido", "iðo"),
    ("ida", "iða"),
    ("ando", "ando"),
    ("endo", "endo"),
    ("ente", "ente"),
    ("ar", "ˈar"),
    ("er", "ˈer"),
    ("ir", "ˈir"),
    ("ía", "ˈia"),
    ("llo", "ʎo"),
    ("lla", "ʎa"),
    ("ño", "ɲo"),
    ("ña", "ɲa"),
    ("que", "ke"),
    ("qui", "ki"),
    ("gue", "ge"),
    ("gui", "gi"),
    ("ce", "θe"),
    ("ci", "θi"),
    ("za", "θa"),
    ("zo", "θo"),
    ("je", "xe"),
    ("jo", "xo"),
    ("ja", "xa"),
];

/// French endings. French stress always falls on the final syllable, so no
/// stress marks are needed.
pub const FR_RULES: &[(&str, &str)] = &[
    ("tion", "sjɔ̃"),
    ("aient", "ɛ"),
    ("ment", "mɑ̃"),
    ("ance", "ɑ̃s"),
    ("ence", "ɑ̃s"),
    ("ière", "jɛʁ"),
    ("ique", "ik"),
    ("elle", "ɛl"),
    ("ette", "ɛt"),
    ("ille", "ij"),
    ("eaux", "o"),
    ("ours", "uʁ"),
    ("eur", "œʁ"),
    ("eux", "ø"),
    ("eau", "o"),
    ("aux", "o"),
    ("ais", "ɛ"),
    ("ait", "ɛ"),
    ("ain", "ɛ̃"),
    ("ein", "ɛ̃"),
    ("ant", "ɑ̃"),
    ("our", "uʁ"),
    ("oir", "waʁ"),
    ("ois", "wa"),
    ("oit", "wa"),
    ("age", "aʒ"),
    ("ée", "e"),
    ("er", "e"),
    ("ez", "e"),
    ("é", "e"),
    ("on", "ɔ̃"),
    ("oi", "wa"),
    ("in", "ɛ̃"),
    ("ie", "i"),
];

/// German endings.
pub const DE_RULES: &[(&str, &str)] = &[
    ("tion", "tsjoːn"),
    ("heit", "haɪt"),
    ("keit", "kaɪt"),
    ("lich", "lɪç"),
    ("ung", "ʊŋ"),
    ("eit", "aɪt"),
    ("ein", "aɪn"),
    ("ich", "ɪç"),
    ("ach", "ax"),
    ("acht", "axt"),
    ("och", "ɔx"),
    ("uch", "ʊx"),
    ("erz", "ɛʁts"),
    ("ehr", "eːɐ"),
    ("ahr", "aːɐ"),
    ("ohr", "oːɐ"),
    ("ieb", "iːp"),
    ("iebe", "iːbə"),
    ("and", "ant"),
    ("und", "ʊnt"),
    ("ig", "ɪç"),
    ("en", "ən"),
    ("er", "ɐ"),
    ("el", "əl"),
    ("ei", "aɪ"),
    ("ie", "iː"),
    ("eu", "ɔʏ"),
    ("äu", "ɔʏ"),
    ("au", "aʊ"),
    ("tz", "ts"),
    ("ss", "s"),
    ("ß", "s"),
];

/// Built-in rule table for a language. Generic text has no rules and always
/// falls back to raw word endings.
pub const fn builtin_rules(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN_RULES,
        Language::It => IT_RULES,
        Language::Es => ES_RULES,
        Language::Fr => FR_RULES,
        Language::De => DE_RULES,
        Language::Generic => &[],
    }
}
