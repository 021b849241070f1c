//! Paginated review harvesting.

mod catalog;

use std::time::Duration;

use revscan_core::{RawReview, ReviewCorpus};

use crate::extract::parse_review_page;
use crate::fetch::PageFetcher;
use crate::pagination::page_url;

pub use catalog::CatalogLimits;

/// Why a harvest stopped requesting pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page request failed; earlier pages are kept.
    FetchFailed,
    /// The configured page bound was reached.
    MaxPagesReached,
    /// The last page carried no next-page control.
    NoNextPage,
}

/// Outcome of one product harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    pub corpus: ReviewCorpus,
    /// Pages that returned a document.
    pub pages_fetched: u32,
    pub stop_reason: StopReason,
}

/// Drives a [`PageFetcher`] over paginated review listings and category
/// catalogs.
///
/// Pages are requested strictly in order, separated by a fixed politeness
/// delay. Failed pages are never retried.
pub struct Harvester<F> {
    fetcher: F,
    page_delay: Duration,
}

impl<F: PageFetcher> Harvester<F> {
    #[must_use]
    pub fn new(fetcher: F, page_delay: Duration) -> Self {
        Self {
            fetcher,
            page_delay,
        }
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Harvests up to `max_pages` review pages for `product_url`.
    ///
    /// Returns the deduplicated corpus, which may be empty.
    pub async fn harvest(&self, product_url: &str, max_pages: u32) -> ReviewCorpus {
        self.harvest_with_report(product_url, max_pages).await.corpus
    }

    /// Like [`Self::harvest`], also reporting how many pages were fetched
    /// and why harvesting stopped.
    ///
    /// Stops at the first of: a [`crate::FetchFailure`], `max_pages`
    /// reached, or a page without the next-page control. A `max_pages` of
    /// `0` is treated as `1`.
    pub async fn harvest_with_report(&self, product_url: &str, max_pages: u32) -> HarvestReport {
        let max_pages = max_pages.max(1);
        let mut collected: Vec<RawReview> = Vec::new();
        let mut pages_fetched = 0u32;
        let mut stop_reason = StopReason::MaxPagesReached;

        for page in 1..=max_pages {
            if page > 1 {
                self.pause().await;
            }

            let url = page_url(product_url, page);
            tracing::info!(url = %url, page, "fetching review page");

            let document = match self.fetcher.fetch(&url).await {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!(url = %url, page, error = %e, "review page fetch failed; stopping");
                    stop_reason = StopReason::FetchFailed;
                    break;
                }
            };
            pages_fetched += 1;

            let parsed = parse_review_page(&document.html);
            tracing::debug!(
                page,
                count = parsed.reviews.len(),
                has_next = parsed.has_next,
                "extracted reviews"
            );
            collected.extend(parsed.reviews);

            if !parsed.has_next {
                stop_reason = StopReason::NoNextPage;
                break;
            }
        }

        let corpus = ReviewCorpus::from_reviews(collected);
        tracing::info!(
            product_url,
            pages_fetched,
            reviews = corpus.len(),
            ?stop_reason,
            "harvest finished"
        );

        HarvestReport {
            corpus,
            pages_fetched,
            stop_reason,
        }
    }

    async fn pause(&self) {
        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }
    }
}
