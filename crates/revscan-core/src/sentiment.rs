//! Sentiment labels and the product-level verdict.

use serde::{Deserialize, Serialize};

/// Raw classifier output that maps to [`SentimentLabel::Positive`].
///
/// This is a property of the trained artifact; every other class id is
/// treated as negative.
pub const POSITIVE_CLASS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    #[must_use]
    pub fn from_raw_class(class: i64) -> Self {
        if class == POSITIVE_CLASS {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Good,
    Bad,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Good => write!(f, "good"),
            Verdict::Bad => write!(f, "bad"),
        }
    }
}

/// Percentages and verdict derived from one run's labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub verdict: Verdict,
}

impl AggregateResult {
    /// Two-line human summary: the backing percentage, then the verdict.
    #[must_use]
    pub fn summary(&self) -> (String, String) {
        match self.verdict {
            Verdict::Good => (
                format!("{:.2}% of the reviews are positive", self.positive_pct),
                "The product is good".to_string(),
            ),
            Verdict::Bad => (
                format!("{:.2}% of the reviews are negative", self.negative_pct),
                "The product is bad".to_string(),
            ),
        }
    }
}
