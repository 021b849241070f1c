pub mod app_config;
pub mod categories;
pub mod config;
pub mod error;
pub mod reviews;
pub mod sentiment;

pub use app_config::{AppConfig, DEFAULT_MAX_PAGES};
pub use categories::{load_categories, CategoriesFile, CategoryTarget};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use reviews::{RawReview, ReviewCorpus, NOT_AVAILABLE};
pub use sentiment::{AggregateResult, SentimentLabel, Verdict, POSITIVE_CLASS};
