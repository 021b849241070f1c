//! Folds per-review labels into a product verdict.

use revscan_core::{AggregateResult, SentimentLabel, Verdict};

use crate::error::SentimentError;

/// Computes positive/negative percentages and the majority verdict.
///
/// The verdict is `good` only when positives strictly outnumber negatives;
/// a tie is `bad`.
///
/// # Errors
///
/// Returns [`SentimentError::EmptyInput`] when `labels` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(labels: &[SentimentLabel]) -> Result<AggregateResult, SentimentError> {
    if labels.is_empty() {
        return Err(SentimentError::EmptyInput { stage: "aggregate" });
    }

    let total = labels.len();
    let positive = labels
        .iter()
        .filter(|l| **l == SentimentLabel::Positive)
        .count();
    let negative = total - positive;

    let verdict = if positive > negative {
        Verdict::Good
    } else {
        Verdict::Bad
    };

    Ok(AggregateResult {
        positive_pct: positive as f64 / total as f64 * 100.0,
        negative_pct: negative as f64 / total as f64 * 100.0,
        verdict,
    })
}
