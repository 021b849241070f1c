//! Category catalog harvesting: search page → product pages → flat rows.

use revscan_core::CategoryTarget;

use crate::extract::{extract_detailed_reviews, extract_product_info, extract_product_links};
use crate::fetch::PageFetcher;
use crate::types::{CatalogRow, DetailedReview};

use super::Harvester;

/// Per-run caps for a catalog harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLimits {
    pub max_products_per_category: usize,
    pub max_reviews_per_product: usize,
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            max_products_per_category: 20,
            max_reviews_per_product: 5,
        }
    }
}

impl<F: PageFetcher> Harvester<F> {
    /// Harvests every category in order and flattens the result into rows.
    ///
    /// Each product contributes one row per review, or a single placeholder
    /// row when it exposes none. Failed category or product pages are
    /// logged and skipped; the run always continues with the next item.
    pub async fn harvest_catalog(
        &self,
        categories: &[CategoryTarget],
        limits: CatalogLimits,
    ) -> Vec<CatalogRow> {
        let mut rows = Vec::new();

        for category in categories {
            tracing::info!(category = %category.name, "harvesting category");

            let links = match self.fetcher.fetch(&category.url).await {
                Ok(document) => extract_product_links(
                    &document.html,
                    &category.url,
                    limits.max_products_per_category,
                ),
                Err(e) => {
                    tracing::warn!(
                        category = %category.name,
                        error = %e,
                        "category page fetch failed; skipping category"
                    );
                    continue;
                }
            };
            tracing::info!(category = %category.name, count = links.len(), "found products");

            for (idx, product_url) in links.iter().enumerate() {
                if idx > 0 {
                    self.pause().await;
                }
                rows.extend(
                    self.harvest_product(&category.name, product_url, limits.max_reviews_per_product)
                        .await,
                );
            }
        }

        tracing::info!(rows = rows.len(), "catalog harvest finished");
        rows
    }

    async fn harvest_product(
        &self,
        category: &str,
        product_url: &str,
        max_reviews: usize,
    ) -> Vec<CatalogRow> {
        let document = match self.fetcher.fetch(product_url).await {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(product_url, error = %e, "product page fetch failed; skipping");
                return Vec::new();
            }
        };

        let product = extract_product_info(&document.html, product_url);
        let reviews = extract_detailed_reviews(&document.html, max_reviews);
        tracing::debug!(
            product_url,
            title = %product.title,
            price = %product.price,
            reviews = reviews.len(),
            "processed product"
        );

        if reviews.is_empty() {
            return vec![CatalogRow::new(category, &product, DetailedReview::placeholder())];
        }

        reviews
            .into_iter()
            .map(|review| CatalogRow::new(category, &product, review))
            .collect()
    }
}
