//! `catalog`: harvest every configured category into a timestamped CSV.

use std::path::Path;
use std::time::Duration;

use revscan_core::{load_categories, AppConfig};
use revscan_scraper::{write_catalog_csv, CatalogLimits, Harvester, ProxyFetcher};

/// Harvests the categories listed in `categories_path` and writes one CSV
/// into `out_dir`.
///
/// # Errors
///
/// Returns an error if the category file is missing or invalid, the HTTP
/// client cannot be built, or the CSV cannot be written. Individual page
/// failures are logged and skipped.
pub(crate) async fn run_catalog(
    config: &AppConfig,
    categories_path: &Path,
    out_dir: &Path,
    limits: CatalogLimits,
) -> anyhow::Result<()> {
    let file = load_categories(categories_path)?;
    tracing::info!(
        path = %categories_path.display(),
        categories = file.categories.len(),
        "loaded categories"
    );

    let fetcher = ProxyFetcher::from_app_config(config)?;
    let harvester = Harvester::new(fetcher, Duration::from_millis(config.page_delay_ms));

    let rows = harvester.harvest_catalog(&file.categories, limits).await;

    match write_catalog_csv(out_dir, &rows)? {
        Some(path) => println!("wrote {} rows to {}", rows.len(), path.display()),
        None => println!("no products found; nothing written"),
    }

    Ok(())
}
