//! Review sentiment pipeline orchestration.

use revscan_core::{AggregateResult, ReviewCorpus, SentimentLabel};
use revscan_scraper::{Harvester, PageFetcher, StopReason};

use crate::aggregate::aggregate;
use crate::artifacts::SentimentArtifacts;
use crate::classify::classify;
use crate::error::SentimentError;
use crate::normalize::{normalize_corpus, NormalizedDocument};

/// Everything one run produced, positionally aligned: `documents[i]` and
/// `labels[i]` belong to the `i`-th review of `corpus`.
#[derive(Debug, Clone)]
pub struct ReviewSentimentReport {
    pub corpus: ReviewCorpus,
    pub documents: Vec<NormalizedDocument>,
    pub labels: Vec<SentimentLabel>,
    pub result: AggregateResult,
    /// Review pages fetched successfully. `0` when the corpus was supplied
    /// directly.
    pub pages_fetched: u32,
    pub stop_reason: Option<StopReason>,
}

/// Normalizes, classifies, and aggregates an already harvested corpus.
///
/// # Errors
///
/// Returns [`SentimentError::EmptyCorpus`] before touching the artifacts
/// when the corpus has no reviews, and propagates classification errors.
pub fn analyze_corpus(
    corpus: ReviewCorpus,
    artifacts: &SentimentArtifacts,
) -> Result<ReviewSentimentReport, SentimentError> {
    if corpus.is_empty() {
        return Err(SentimentError::EmptyCorpus);
    }

    let documents = normalize_corpus(&corpus);
    let labels = classify(&documents, artifacts)?;
    let result = aggregate(&labels)?;

    tracing::info!(
        reviews = corpus.len(),
        positive_pct = result.positive_pct,
        negative_pct = result.negative_pct,
        verdict = %result.verdict,
        "sentiment analysis complete"
    );

    Ok(ReviewSentimentReport {
        corpus,
        documents,
        labels,
        result,
        pages_fetched: 0,
        stop_reason: None,
    })
}

/// Runs the full pipeline for one product: harvest, normalize, classify,
/// aggregate.
///
/// Page fetch failures only shorten the corpus; they never fail the run.
///
/// # Errors
///
/// Returns [`SentimentError::EmptyCorpus`] when no review text was
/// harvested, and propagates classification errors.
pub async fn run_review_sentiment<F: PageFetcher>(
    harvester: &Harvester<F>,
    artifacts: &SentimentArtifacts,
    product_url: &str,
    max_pages: u32,
) -> Result<ReviewSentimentReport, SentimentError> {
    let harvest = harvester.harvest_with_report(product_url, max_pages).await;

    if harvest.corpus.is_empty() {
        tracing::info!(
            product_url,
            pages_fetched = harvest.pages_fetched,
            "no reviews found"
        );
        return Err(SentimentError::EmptyCorpus);
    }

    let mut report = analyze_corpus(harvest.corpus, artifacts)?;
    report.pages_fetched = harvest.pages_fetched;
    report.stop_reason = Some(harvest.stop_reason);
    Ok(report)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
