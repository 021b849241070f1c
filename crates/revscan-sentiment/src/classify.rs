//! Per-review classification against the loaded artifacts.

use revscan_core::SentimentLabel;

use crate::artifacts::SentimentArtifacts;
use crate::error::SentimentError;
use crate::normalize::NormalizedDocument;

/// Labels each document, preserving input order.
///
/// An empty normalized document still gets a label; it vectorizes to all
/// zeros and takes whatever class the intercept alone selects.
///
/// # Errors
///
/// Returns [`SentimentError::EmptyInput`] for an empty slice and
/// [`SentimentError::Misaligned`] if the vectorizer or model returns a
/// different number of items than it was given.
pub fn classify(
    documents: &[NormalizedDocument],
    artifacts: &SentimentArtifacts,
) -> Result<Vec<SentimentLabel>, SentimentError> {
    if documents.is_empty() {
        return Err(SentimentError::EmptyInput { stage: "classify" });
    }

    let vectors = artifacts.vectorizer().transform(documents);
    if vectors.len() != documents.len() {
        return Err(SentimentError::Misaligned {
            stage: "vectorize",
            expected: documents.len(),
            got: vectors.len(),
        });
    }

    let classes = artifacts.model().predict(&vectors);
    if classes.len() != vectors.len() {
        return Err(SentimentError::Misaligned {
            stage: "predict",
            expected: vectors.len(),
            got: classes.len(),
        });
    }

    let labels: Vec<SentimentLabel> = classes
        .into_iter()
        .map(SentimentLabel::from_raw_class)
        .collect();

    tracing::debug!(
        documents = documents.len(),
        positive = labels
            .iter()
            .filter(|l| **l == SentimentLabel::Positive)
            .count(),
        "classified reviews"
    );

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::artifacts::{FeatureVector, LinearClassifier, SentimentModel, TfidfVectorizer};
    use crate::normalize::normalize;

    fn artifacts() -> SentimentArtifacts {
        let vectorizer = TfidfVectorizer::from_json(
            r#"{"vocabulary": {"great": 0, "terrible": 1, "not": 2}, "idf": [1.0, 1.0, 1.0]}"#,
        )
        .unwrap();
        let model = LinearClassifier::new(vec![3.0, -3.0, -2.0], -0.1, [0, 1]);
        SentimentArtifacts::new(Arc::new(vectorizer), Arc::new(model))
    }

    struct ShortModel;

    impl SentimentModel for ShortModel {
        fn predict(&self, vectors: &[FeatureVector]) -> Vec<i64> {
            vec![1; vectors.len().saturating_sub(1)]
        }
    }

    #[test]
    fn labels_follow_input_order() {
        let docs = vec![
            normalize("Great sound, great price"),
            normalize("Terrible, broke in a week"),
            normalize("great"),
        ];
        let labels = classify(&docs, &artifacts()).unwrap();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Positive
            ]
        );
    }

    #[test]
    fn empty_document_falls_back_to_intercept() {
        let docs = vec![normalize("!!! ???")];
        assert!(docs[0].is_empty());
        let labels = classify(&docs, &artifacts()).unwrap();
        assert_eq!(labels, vec![SentimentLabel::Negative]);
    }

    #[test]
    fn refuses_empty_input() {
        let err = classify(&[], &artifacts()).unwrap_err();
        assert!(matches!(err, SentimentError::EmptyInput { stage: "classify" }));
    }

    #[test]
    fn reports_model_that_drops_rows() {
        let base = artifacts();
        let broken = SentimentArtifacts::new(
            Arc::new(
                TfidfVectorizer::from_json(r#"{"vocabulary": {"great": 0}, "idf": [1.0]}"#)
                    .unwrap(),
            ),
            Arc::new(ShortModel),
        );
        let docs = vec![normalize("great"), normalize("great")];
        assert!(classify(&docs, &base).is_ok());
        let err = classify(&docs, &broken).unwrap_err();
        assert!(matches!(
            err,
            SentimentError::Misaligned {
                stage: "predict",
                expected: 2,
                got: 1
            }
        ));
    }
}
