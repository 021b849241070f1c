use std::path::Path;

use serde::Deserialize;

use super::{read_artifact, FeatureVector, SentimentModel};
use crate::error::SentimentError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coefficients {
    Flat(Vec<f64>),
    Rows(Vec<Vec<f64>>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Intercept {
    Scalar(f64),
    List(Vec<f64>),
}

#[derive(Debug, Deserialize)]
struct LinearArtifact {
    coef: Coefficients,
    intercept: Intercept,
    #[serde(default = "default_classes")]
    classes: Vec<i64>,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

/// Binary logistic-regression decision function.
///
/// Accepts `coef` either flat or as a single-row matrix and `intercept`
/// either as a number or a one-element list, matching common exports.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    coef: Vec<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LinearClassifier {
    #[must_use]
    pub fn new(coef: Vec<f64>, intercept: f64, classes: [i64; 2]) -> Self {
        Self {
            coef,
            intercept,
            classes,
        }
    }

    /// Parses and validates a classifier export.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the JSON is malformed or the
    /// weights do not describe a single binary decision function.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let artifact: LinearArtifact = serde_json::from_str(json).map_err(|e| e.to_string())?;

        let coef = match artifact.coef {
            Coefficients::Flat(row) => row,
            Coefficients::Rows(mut rows) => {
                if rows.len() != 1 {
                    return Err(format!("expected one coefficient row, found {}", rows.len()));
                }
                rows.remove(0)
            }
        };
        if coef.is_empty() {
            return Err("coef is empty".to_string());
        }

        let intercept = match artifact.intercept {
            Intercept::Scalar(b) => b,
            Intercept::List(list) => match list.as_slice() {
                [b] => *b,
                other => return Err(format!("expected one intercept, found {}", other.len())),
            },
        };

        let classes: [i64; 2] = artifact
            .classes
            .try_into()
            .map_err(|c: Vec<i64>| format!("expected two classes, found {}", c.len()))?;

        if !intercept.is_finite() || coef.iter().any(|w| !w.is_finite()) {
            return Err("weights contain non-finite values".to_string());
        }

        Ok(Self::new(coef, intercept, classes))
    }

    /// Reads a classifier export from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ArtifactLoad`] if the file cannot be read
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, SentimentError> {
        let raw = read_artifact("classifier", path)?;
        Self::from_json(&raw).map_err(|reason| SentimentError::ArtifactLoad {
            artifact: "classifier",
            path: path.display().to_string(),
            reason,
        })
    }

    /// Number of features the weights cover.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coef.len()
    }

    #[must_use]
    pub fn decision(&self, vector: &FeatureVector) -> f64 {
        vector.dot(&self.coef) + self.intercept
    }
}

impl SentimentModel for LinearClassifier {
    fn predict(&self, vectors: &[FeatureVector]) -> Vec<i64> {
        vectors
            .iter()
            .map(|v| {
                if self.decision(v) > 0.0 {
                    self.classes[1]
                } else {
                    self.classes[0]
                }
            })
            .collect()
    }
}
