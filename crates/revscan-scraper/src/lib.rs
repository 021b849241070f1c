//! Review harvesting for revscan.
//!
//! Fetches product pages through a scraping proxy, extracts review records
//! from the returned HTML, and follows pagination until the site stops
//! offering a next page.

pub mod audit;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod harvest;
pub mod pagination;
pub mod types;

pub use audit::{write_catalog_csv, write_corpus_csv};
pub use error::{FetchFailure, ScraperError};
pub use fetch::{PageDocument, PageFetcher, ProxyFetcher};
pub use harvest::{CatalogLimits, HarvestReport, Harvester, StopReason};
pub use types::{CatalogRow, DetailedReview, ProductInfo};
