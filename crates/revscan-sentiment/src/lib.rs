//! Review sentiment for revscan.
//!
//! Normalizes harvested review text, vectorizes it against a frozen TF-IDF
//! vocabulary, classifies each review with a pre-trained linear model, and
//! aggregates the labels into a product verdict.

pub mod aggregate;
pub mod artifacts;
pub mod classify;
pub mod error;
pub mod normalize;
pub mod pipeline;

mod lemmatize;
mod stopwords;

pub use aggregate::aggregate;
pub use artifacts::{
    FeatureVector, LinearClassifier, SentimentArtifacts, SentimentModel, TextVectorizer,
    TfidfVectorizer,
};
pub use classify::classify;
pub use error::SentimentError;
pub use normalize::{normalize, normalize_corpus, NormalizedDocument};
pub use pipeline::{analyze_corpus, run_review_sentiment, ReviewSentimentReport};
