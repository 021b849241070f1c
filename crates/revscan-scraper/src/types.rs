//! Catalog record shapes.
//!
//! Every text field uses [`revscan_core::NOT_AVAILABLE`] when the page does
//! not carry it, except the counters which default to `"0"`.

use serde::Serialize;

/// Product-level facts read from a product detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub review_count: String,
    pub url: String,
}

/// A review with every field the product page exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedReview {
    pub rating: String,
    pub date: String,
    pub title: String,
    pub content: String,
    pub helpful: String,
}

impl DetailedReview {
    /// Placeholder used for products that expose no reviews.
    #[must_use]
    pub fn placeholder() -> Self {
        use revscan_core::NOT_AVAILABLE;
        Self {
            rating: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
            title: NOT_AVAILABLE.to_string(),
            content: NOT_AVAILABLE.to_string(),
            helpful: "0".to_string(),
        }
    }
}

/// One flattened output row of a catalog harvest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub category: String,
    pub product_title: String,
    pub product_price: String,
    pub product_rating: String,
    pub product_review_count: String,
    pub product_url: String,
    pub review_rating: String,
    pub review_date: String,
    pub review_title: String,
    pub review_content: String,
    pub review_helpful: String,
}

impl CatalogRow {
    #[must_use]
    pub fn new(category: &str, product: &ProductInfo, review: DetailedReview) -> Self {
        Self {
            category: category.to_owned(),
            product_title: product.title.clone(),
            product_price: product.price.clone(),
            product_rating: product.rating.clone(),
            product_review_count: product.review_count.clone(),
            product_url: product.url.clone(),
            review_rating: review.rating,
            review_date: review.date,
            review_title: review.title,
            review_content: review.content,
            review_helpful: review.helpful,
        }
    }
}
