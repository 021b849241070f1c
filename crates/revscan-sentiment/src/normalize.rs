//! Review text normalization.
//!
//! Output is lowercase lemmas separated by single spaces, with generic
//! stopwords removed but negation cues kept so that "not good" and "good"
//! stay distinguishable.

use revscan_core::ReviewCorpus;

use crate::lemmatize::lemmatize;
use crate::stopwords::is_removable;

/// Classifier-ready text for one review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedDocument(String);

impl NormalizedDocument {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }
}

impl std::fmt::Display for NormalizedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes one review body.
///
/// Non-letters become spaces, the text is lowercased and split on
/// whitespace, stopwords outside the negation list are dropped, and each
/// remaining token is lemmatized. A lemma that lands on a stopword is
/// dropped as well. The result may be empty.
#[must_use]
pub fn normalize(text: &str) -> NormalizedDocument {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    let lemmas: Vec<String> = cleaned
        .split_whitespace()
        .filter(|token| !is_removable(token))
        .map(|token| lemmatize(token).into_owned())
        .filter(|lemma| !is_removable(lemma))
        .collect();

    NormalizedDocument(lemmas.join(" "))
}

/// Normalizes every review in corpus order. Never drops a row.
#[must_use]
pub fn normalize_corpus(corpus: &ReviewCorpus) -> Vec<NormalizedDocument> {
    corpus.texts().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use revscan_core::RawReview;

    use super::*;
    use crate::stopwords::{english, NEGATION_KEEP};

    #[test]
    fn punctuation_digits_and_case_are_cleaned() {
        let doc = normalize("GREAT value!!! 10/10, would buy again :)");
        assert_eq!(doc.as_str(), "great value would buy");
    }

    #[test]
    fn plurals_are_lemmatized() {
        assert_eq!(normalize("The batteries and cables").as_str(), "battery cable");
    }

    #[test]
    fn output_has_no_stopwords_outside_negation_list() {
        let keep: HashSet<&str> = NEGATION_KEEP.iter().copied().collect();
        let mut text = english().join(" ");
        text.push_str(" never without however unfortunately although yet nobody nowhere");
        text.push_str(" neither none nothing");
        text.push_str(" charger screen sound");

        let doc = normalize(&text);

        for token in doc.tokens() {
            assert!(
                keep.contains(token) || !english().contains(&token),
                "stopword {token:?} leaked into {doc}"
            );
        }
        for word in NEGATION_KEEP {
            assert!(doc.tokens().any(|t| t == *word), "{word} missing from {doc}");
        }
        assert!(doc.tokens().any(|t| t == "charger"));
    }

    #[test]
    fn negation_is_preserved() {
        let negated = normalize("not good at all");
        let plain = normalize("good");
        assert_eq!(negated.as_str(), "not good");
        assert_ne!(negated, plain);
        assert!(negated.tokens().any(|t| t == "not"));
    }

    #[test]
    fn contraction_fragments_are_removed() {
        assert_eq!(normalize("I don't like it").as_str(), "like");
    }

    #[test]
    fn normalizing_clean_output_is_a_fixed_point() {
        let samples = [
            "Absolutely love these headphones! The batteries last for days.",
            "Not worth the money. Stopped working after 2 weeks; customer service never replied.",
            "It's okay, however the boxes arrived crushed and the instructions were missing.",
            "Nothing special but works as described",
            "Glasses, watches, dishes & knives - all broken :(",
        ];
        for sample in samples {
            let once = normalize(sample);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn text_without_content_words_normalizes_to_empty() {
        let doc = normalize("!!! 12345 ... the and of");
        assert!(doc.is_empty());
        assert_eq!(doc.tokens().count(), 0);
    }

    #[test]
    fn corpus_normalization_keeps_alignment_including_empty_rows() {
        let corpus = ReviewCorpus::from_reviews(vec![
            RawReview::new("5.0", "Great product"),
            RawReview::new("1.0", "!!!"),
            RawReview::new("3.0", "It is what it is"),
        ]);

        let docs = normalize_corpus(&corpus);

        assert_eq!(docs.len(), corpus.len());
        assert_eq!(docs[0].as_str(), "great product");
        assert!(docs[1].is_empty());
        assert!(docs[2].is_empty());
    }
}
