//! Dictionary-free lemmatizer following WordNet's noun morphology.
//!
//! Every lemma produced here is a fixed point: lemmatizing it again
//! returns it unchanged.

use std::borrow::Cow;

/// Irregular plurals and forms the suffix rules would mangle.
const IRREGULAR: &[(&str, &str)] = &[
    ("calves", "calf"),
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mice", "mouse"),
    ("quizzes", "quiz"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("thieves", "thief"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Words ending in `s` that are already base forms.
const INVARIANT: &[&str] = &[
    "afterwards",
    "alias",
    "always",
    "atlas",
    "backwards",
    "besides",
    "bias",
    "canvas",
    "chaos",
    "christmas",
    "downstairs",
    "economics",
    "electronics",
    "headquarters",
    "indoors",
    "lens",
    "mathematics",
    "news",
    "nowadays",
    "outdoors",
    "overseas",
    "perhaps",
    "politics",
    "series",
    "sometimes",
    "species",
    "thanks",
    "towards",
    "upstairs",
    "whereas",
];

/// Singular nouns ending in `ie`, so `movies` is not read as `movy`.
const IE_NOUNS: &[&str] = &[
    "auntie", "beanie", "birdie", "bookie", "brownie", "calorie", "collie", "cookie", "cutie",
    "doggie", "foodie", "freebie", "genie", "goalie", "goodie", "hippie", "hoodie", "junkie",
    "magpie", "movie", "necktie", "newbie", "nightie", "pinkie", "prairie", "rookie", "roomie",
    "rotisserie", "selfie", "smoothie", "sweetie", "techie", "veggie", "walkie", "zombie",
];

/// Singular nouns ending in `e` after a sibilant, so `niches` keeps its `e`.
const SIBILANT_E_NOUNS: &[&str] = &[
    "ache", "avalanche", "cache", "cliche", "creche", "headache", "microfiche", "moustache",
    "mustache", "niche", "quiche",
];

/// Singular nouns ending in `s` whose plural adds `es` (`buses` → `bus`).
const S_NOUNS: &[&str] = &[
    "alias", "atlas", "bias", "bonus", "bus", "campus", "canvas", "census", "chorus", "circus",
    "focus", "gas", "lens", "status", "virus",
];

/// Suffixes whose trailing `es` is dropped (`boxes` → `box`).
const ES_SUFFIXES: &[&str] = &["sses", "zzes", "ches", "shes", "xes"];

/// Returns the base form of a lowercase ASCII word.
pub(crate) fn lemmatize(word: &str) -> Cow<'_, str> {
    let lemma = apply_rules(word);
    match irregular(&lemma) {
        Some(base) => Cow::Borrowed(base),
        None => lemma,
    }
}

fn apply_rules(word: &str) -> Cow<'_, str> {
    if let Some(base) = irregular(word) {
        return Cow::Borrowed(base);
    }
    if word.len() <= 3 || INVARIANT.contains(&word) {
        return Cow::Borrowed(word);
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return Cow::Borrowed(word);
    }
    // Dropping only the `s` is right whenever the singular is listed.
    let without_s = &word[..word.len() - 1];
    if let Some(stem) = word.strip_suffix("ies") {
        if IE_NOUNS.contains(&without_s) {
            return Cow::Borrowed(without_s);
        }
        if word.len() > 4 {
            return Cow::Owned(format!("{stem}y"));
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if word.ends_with("ses") && S_NOUNS.contains(&stem) {
            return Cow::Borrowed(stem);
        }
        if ES_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
            if SIBILANT_E_NOUNS.contains(&without_s) {
                return Cow::Borrowed(without_s);
            }
            return Cow::Borrowed(stem);
        }
    }
    match word.strip_suffix('s') {
        Some(stem) => Cow::Borrowed(stem),
        None => Cow::Borrowed(word),
    }
}

fn irregular(word: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, base)| *base)
}
