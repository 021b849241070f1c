//! `analyze`: one product URL in, one verdict out.

use std::path::Path;
use std::time::Duration;

use revscan_core::AppConfig;
use revscan_scraper::{write_corpus_csv, Harvester, ProxyFetcher};
use revscan_sentiment::{run_review_sentiment, SentimentArtifacts, SentimentError};

/// Runs the review sentiment pipeline for `url` and prints the summary.
///
/// Artifacts are loaded before any network traffic; a missing or broken
/// artifact aborts the command. An empty harvest prints
/// `no reviews found` and is not treated as a failure.
///
/// # Errors
///
/// Returns an error if the artifacts or the HTTP client cannot be set up,
/// the audit file cannot be written, or classification fails.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    url: &str,
    max_pages: u32,
    audit_csv: Option<&Path>,
) -> anyhow::Result<()> {
    let artifacts = SentimentArtifacts::from_app_config(config)
        .map_err(|e| anyhow::anyhow!("sentiment model unavailable: {e}"))?;
    let fetcher = ProxyFetcher::from_app_config(config)?;
    let harvester = Harvester::new(fetcher, Duration::from_millis(config.page_delay_ms));

    if let Some(path) = audit_csv {
        remove_stale_audit(path)?;
    }

    let report = match run_review_sentiment(&harvester, &artifacts, url, max_pages).await {
        Ok(report) => report,
        Err(SentimentError::EmptyCorpus) => {
            println!("no reviews found");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(path) = audit_csv {
        write_corpus_csv(path, &report.corpus)?;
        tracing::info!(path = %path.display(), rows = report.corpus.len(), "wrote audit csv");
    }

    let (pct_line, verdict_line) = report.result.summary();
    println!("{pct_line}");
    println!("{verdict_line}");
    println!(
        "({} reviews from {} page(s))",
        report.corpus.len(),
        report.pages_fetched
    );

    Ok(())
}

/// Deletes the previous run's audit file so an empty harvest never leaves
/// stale rows behind.
fn remove_stale_audit(path: &Path) -> anyhow::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed previous audit csv");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::anyhow!(
            "failed to remove previous audit file {}: {e}",
            path.display()
        )),
    }
}
