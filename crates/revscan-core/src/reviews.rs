//! Harvested review records and the deduplicated corpus built from them.

use std::collections::HashSet;

/// Placeholder recorded when a field is missing from the page.
pub const NOT_AVAILABLE: &str = "N/A";

/// One review as extracted from a product page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawReview {
    /// Star rating text (e.g. `"4.0"`), or [`NOT_AVAILABLE`].
    pub rating: String,
    /// Review body. Never empty once inside a [`ReviewCorpus`].
    pub text: String,
}

impl RawReview {
    #[must_use]
    pub fn new(rating: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rating: rating.into(),
            text: text.into(),
        }
    }
}

/// Ordered, deduplicated set of reviews from one harvest.
///
/// Rows with blank text are dropped and exact `(rating, text)` duplicates are
/// collapsed onto their first occurrence. The corpus is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCorpus {
    reviews: Vec<RawReview>,
}

impl ReviewCorpus {
    #[must_use]
    pub fn from_reviews(reviews: Vec<RawReview>) -> Self {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let reviews = reviews
            .into_iter()
            .filter(|r| !r.text.trim().is_empty())
            .filter(|r| seen.insert((r.rating.clone(), r.text.clone())))
            .collect();
        Self { reviews }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Review bodies in corpus order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.reviews.iter().map(|r| r.text.as_str())
    }
}

impl<'a> IntoIterator for &'a ReviewCorpus {
    type Item = &'a RawReview;
    type IntoIter = std::slice::Iter<'a, RawReview>;

    fn into_iter(self) -> Self::IntoIter {
        self.reviews.iter()
    }
}
