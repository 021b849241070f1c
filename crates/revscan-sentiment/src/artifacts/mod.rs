//! Frozen model artifacts and the capability traits the pipeline uses.
//!
//! Artifacts are JSON exports of a fitted TF-IDF vectorizer and a fitted
//! linear classifier. They are loaded once at startup, validated against
//! each other, and shared read-only afterwards.

mod linear;
mod tfidf;

use std::path::Path;
use std::sync::Arc;

use crate::error::SentimentError;
use crate::normalize::NormalizedDocument;

pub use linear::LinearClassifier;
pub use tfidf::TfidfVectorizer;

/// Sparse view of a fixed-width feature vector.
///
/// `entries` hold `(index, weight)` pairs in ascending index order; every
/// other position is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Builds a vector, sorting entries by index and dropping any index
    /// outside `0..dim`.
    #[must_use]
    pub fn new(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(idx, _)| idx < dim);
        entries.sort_unstable_by_key(|&(idx, _)| idx);
        Self { dim, entries }
    }

    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    #[must_use]
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for &(idx, weight) in &self.entries {
            dense[idx] = weight;
        }
        dense
    }

    /// Dot product with a dense weight vector of the same width.
    #[must_use]
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(idx, w)| weights.get(idx).map(|c| c * w))
            .sum()
    }
}

/// Maps normalized documents onto the fixed feature space.
pub trait TextVectorizer: Send + Sync {
    /// Width of every vector this vectorizer produces.
    fn dimension(&self) -> usize;

    /// One vector per document, in input order. Terms outside the
    /// vocabulary contribute nothing.
    fn transform(&self, documents: &[NormalizedDocument]) -> Vec<FeatureVector>;
}

/// Binary classifier over the vectorizer's feature space.
pub trait SentimentModel: Send + Sync {
    /// Raw class id per vector, in input order.
    fn predict(&self, vectors: &[FeatureVector]) -> Vec<i64>;
}

/// The loaded vectorizer and classifier, shareable across runs.
#[derive(Clone)]
pub struct SentimentArtifacts {
    vectorizer: Arc<dyn TextVectorizer>,
    model: Arc<dyn SentimentModel>,
}

impl SentimentArtifacts {
    pub fn new(vectorizer: Arc<dyn TextVectorizer>, model: Arc<dyn SentimentModel>) -> Self {
        Self { vectorizer, model }
    }

    /// Loads both artifacts from disk and checks that the classifier's
    /// weight vector matches the vocabulary width.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ArtifactLoad`] if either file is missing or
    /// malformed, or if the two artifacts disagree on dimensionality.
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self, SentimentError> {
        let vectorizer = TfidfVectorizer::load(vectorizer_path)?;
        let model = LinearClassifier::load(model_path)?;

        if model.dimension() != vectorizer.dimension() {
            return Err(SentimentError::ArtifactLoad {
                artifact: "classifier",
                path: model_path.display().to_string(),
                reason: format!(
                    "classifier expects {} features but vocabulary has {}",
                    model.dimension(),
                    vectorizer.dimension()
                ),
            });
        }

        tracing::info!(
            vectorizer = %vectorizer_path.display(),
            model = %model_path.display(),
            features = vectorizer.dimension(),
            "loaded sentiment artifacts"
        );

        Ok(Self::new(Arc::new(vectorizer), Arc::new(model)))
    }

    /// Loads the artifacts named in the application config.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_app_config(config: &revscan_core::AppConfig) -> Result<Self, SentimentError> {
        Self::load(&config.vectorizer_path, &config.model_path)
    }

    #[must_use]
    pub fn vectorizer(&self) -> &dyn TextVectorizer {
        self.vectorizer.as_ref()
    }

    #[must_use]
    pub fn model(&self) -> &dyn SentimentModel {
        self.model.as_ref()
    }
}

pub(crate) fn read_artifact(artifact: &'static str, path: &Path) -> Result<String, SentimentError> {
    std::fs::read_to_string(path).map_err(|e| SentimentError::ArtifactLoad {
        artifact,
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_vector_sorts_and_bounds_entries() {
        let v = FeatureVector::new(3, vec![(2, 0.5), (0, 1.0), (7, 9.0)]);
        assert_eq!(v.entries(), &[(0, 1.0), (2, 0.5)]);
        assert_eq!(v.to_dense(), vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn feature_vector_dot_product() {
        let v = FeatureVector::new(3, vec![(0, 2.0), (2, 1.0)]);
        assert!((v.dot(&[0.5, 100.0, -3.0]) - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_vector() {
        let v = FeatureVector::zeros(4);
        assert!(v.is_zero());
        assert_eq!(v.dim(), 4);
        assert_eq!(v.dot(&[1.0, 1.0, 1.0, 1.0]), 0.0);
    }
}
