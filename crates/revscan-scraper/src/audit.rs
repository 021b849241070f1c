//! CSV output for harvested data.
//!
//! The audit file is incidental to the verdict: it records what was
//! harvested so a run can be inspected afterwards.

use std::path::{Path, PathBuf};

use revscan_core::ReviewCorpus;

use crate::error::ScraperError;
use crate::types::CatalogRow;

/// Writes the corpus to `path` with header `rating,review`, replacing any
/// previous file.
///
/// # Errors
///
/// Returns [`ScraperError::Io`] if the parent directory cannot be created and
/// [`ScraperError::Csv`] if the file cannot be written.
pub fn write_corpus_csv(path: &Path, corpus: &ReviewCorpus) -> Result<(), ScraperError> {
    ensure_parent(path)?;
    let csv_err = |source| ScraperError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(["rating", "review"]).map_err(csv_err)?;
    for review in corpus {
        writer
            .write_record([review.rating.as_str(), review.text.as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ScraperError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), rows = corpus.len(), "wrote corpus audit file");
    Ok(())
}

/// Writes catalog rows to `catalog_YYYYMMDD_HHMMSS.csv` inside `out_dir`.
///
/// Returns `None` without touching the filesystem when `rows` is empty.
///
/// # Errors
///
/// Returns [`ScraperError::Io`] if `out_dir` cannot be created and
/// [`ScraperError::Csv`] if the file cannot be written.
pub fn write_catalog_csv(
    out_dir: &Path,
    rows: &[CatalogRow],
) -> Result<Option<PathBuf>, ScraperError> {
    if rows.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(out_dir).map_err(|e| ScraperError::Io {
        path: out_dir.display().to_string(),
        source: e,
    })?;

    let filename = format!("catalog_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let path = out_dir.join(filename);
    let csv_err = |source| ScraperError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(&path).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ScraperError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "wrote catalog file");
    Ok(Some(path))
}

fn ensure_parent(path: &Path) -> Result<(), ScraperError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| ScraperError::Io {
                path: parent.display().to_string(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use revscan_core::RawReview;

    use super::*;
    use crate::types::{DetailedReview, ProductInfo};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("revscan-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn corpus_csv_has_header_and_quoted_rows() {
        let dir = scratch_dir("corpus");
        let path = dir.join("nested").join("reviews.csv");
        let corpus = ReviewCorpus::from_reviews(vec![
            RawReview::new("5.0", "Great, really great"),
            RawReview::new("N/A", "meh"),
        ]);

        write_corpus_csv(&path, &corpus).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "rating,review\n5.0,\"Great, really great\"\nN/A,meh\n");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corpus_csv_replaces_previous_file() {
        let dir = scratch_dir("corpus-replace");
        let path = dir.join("reviews.csv");
        let first = ReviewCorpus::from_reviews(vec![RawReview::new("1.0", "old")]);
        let second = ReviewCorpus::from_reviews(vec![RawReview::new("2.0", "new")]);

        write_corpus_csv(&path, &first).unwrap();
        write_corpus_csv(&path, &second).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("old"));
        assert!(written.contains("new"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn catalog_csv_skips_empty_rows() {
        let dir = scratch_dir("catalog-empty");
        assert!(write_catalog_csv(&dir, &[]).unwrap().is_none());
        assert!(!dir.exists());
    }

    #[test]
    fn catalog_csv_writes_timestamped_file_with_header() {
        let dir = scratch_dir("catalog");
        let product = ProductInfo {
            title: "Plug".to_string(),
            price: "19.".to_string(),
            rating: "4.5".to_string(),
            review_count: "100".to_string(),
            url: "https://shop.test/dp/B0PLUG0001".to_string(),
        };
        let rows = vec![CatalogRow::new("Plugs", &product, DetailedReview::placeholder())];

        let path = write_catalog_csv(&dir, &rows).unwrap().expect("file written");

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("catalog_") && name.ends_with(".csv"), "{name}");
        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("category,product_title,product_price,product_rating,product_review_count,product_url,review_rating,review_date,review_title,review_content,review_helpful")
        );
        assert_eq!(
            lines.next(),
            Some("Plugs,Plug,19.,4.5,100,https://shop.test/dp/B0PLUG0001,N/A,N/A,N/A,N/A,0")
        );
        let _ = std::fs::remove_dir_all(&dir);
    }
}
