//! English stopword policy with a negation-preserving exception list.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Generic English stopwords. Contractions appear in their split form
/// (`don`, `t`) because the normalizer turns apostrophes into spaces.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Polarity-bearing words that are never removed, whether or not they
/// appear in [`ENGLISH`].
pub(crate) const NEGATION_KEEP: &[&str] = &[
    "no",
    "not",
    "never",
    "without",
    "however",
    "unfortunately",
    "neither",
    "none",
    "nobody",
    "nowhere",
    "nothing",
    "but",
    "although",
    "yet",
    "will",
    "nor",
];

static REMOVABLE: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let keep: HashSet<&str> = NEGATION_KEEP.iter().copied().collect();
    ENGLISH
        .iter()
        .copied()
        .filter(|w| !keep.contains(w))
        .collect()
});

/// Returns `true` if `token` should be dropped from normalized text.
pub(crate) fn is_removable(token: &str) -> bool {
    REMOVABLE.contains(token)
}

#[cfg(test)]
pub(crate) fn english() -> &'static [&'static str] {
    ENGLISH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_words_are_kept() {
        for word in NEGATION_KEEP {
            assert!(!is_removable(word), "{word} must be kept");
        }
    }

    #[test]
    fn ordinary_stopwords_are_removed() {
        for word in ["the", "is", "at", "all", "very", "don", "t"] {
            assert!(is_removable(word), "{word} should be removed");
        }
    }

    #[test]
    fn content_words_are_kept() {
        for word in ["good", "battery", "broke", "love"] {
            assert!(!is_removable(word), "{word} should be kept");
        }
    }
}
