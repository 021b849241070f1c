use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{read_artifact, FeatureVector, TextVectorizer};
use crate::error::SentimentError;
use crate::normalize::NormalizedDocument;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Norm {
    L1,
    L2,
}

#[derive(Debug, Deserialize)]
struct TfidfArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default = "default_norm")]
    norm: Option<Norm>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

#[allow(clippy::unnecessary_wraps)]
fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Fitted TF-IDF transform with a frozen vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    /// Parses and validates a vectorizer export.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the JSON is malformed, the
    /// vocabulary is empty, an index falls outside the IDF table, or the
    /// n-gram range is unusable.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let artifact: TfidfArtifact = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_artifact(artifact)
    }

    /// Reads a vectorizer export from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ArtifactLoad`] if the file cannot be read
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, SentimentError> {
        let raw = read_artifact("vectorizer", path)?;
        Self::from_json(&raw).map_err(|reason| SentimentError::ArtifactLoad {
            artifact: "vectorizer",
            path: path.display().to_string(),
            reason,
        })
    }

    fn from_artifact(artifact: TfidfArtifact) -> Result<Self, String> {
        let TfidfArtifact {
            vocabulary,
            idf,
            ngram_range,
            sublinear_tf,
            norm,
        } = artifact;

        if vocabulary.is_empty() {
            return Err("vocabulary is empty".to_string());
        }
        if idf.len() != vocabulary.len() {
            return Err(format!(
                "idf has {} entries but vocabulary has {} terms",
                idf.len(),
                vocabulary.len()
            ));
        }
        if let Some((term, idx)) = vocabulary.iter().find(|&(_, &idx)| idx >= idf.len()) {
            return Err(format!("term {term:?} has out-of-range index {idx}"));
        }
        if idf.iter().any(|w| !w.is_finite()) {
            return Err("idf contains non-finite weights".to_string());
        }
        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(format!("invalid ngram_range ({min_n}, {max_n})"));
        }

        Ok(Self {
            vocabulary,
            idf,
            ngram_range,
            sublinear_tf,
            norm,
        })
    }

    /// Vectorizes one document.
    #[must_use]
    pub fn transform_one(&self, text: &str) -> FeatureVector {
        let tokens: Vec<&str> = TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&idx) = self.vocabulary.get(&term) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (idx, tf * self.idf[idx])
            })
            .collect();

        let scale = match self.norm {
            Some(Norm::L2) => entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => entries.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            None => 1.0,
        };
        if scale > 0.0 {
            for (_, w) in &mut entries {
                *w /= scale;
            }
        }

        FeatureVector::new(self.dimension(), entries)
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn transform(&self, documents: &[NormalizedDocument]) -> Vec<FeatureVector> {
        documents
            .iter()
            .map(|doc| self.transform_one(doc.as_str()))
            .collect()
    }
}
