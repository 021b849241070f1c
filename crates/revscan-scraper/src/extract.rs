//! HTML extraction for review listings, search results and product pages.
//!
//! All functions are pure: they take the raw HTML of one page and return
//! owned records. Missing fields fall back to [`NOT_AVAILABLE`].

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use revscan_core::{RawReview, NOT_AVAILABLE};
use scraper::{ElementRef, Html, Selector};

use crate::types::{DetailedReview, ProductInfo};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}

static REVIEW_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"li[data-hook="review"]"#));
static STAR_HOOK_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"i[data-hook="review-star-rating"]"#));
static STAR_CLASS_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"i[class*="a-icon-star"]"#));
static ICON_ALT_SEL: LazyLock<Selector> = LazyLock::new(|| selector("span.a-icon-alt"));
static BODY_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"span[data-hook="review-body"]"#));
static NEXT_PAGE_SEL: LazyLock<Selector> = LazyLock::new(|| selector("li.a-last"));
static DATE_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"span[data-hook="review-date"]"#));
static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"a[data-hook="review-title"]"#));
static HELPFUL_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"span[data-hook="helpful-vote-statement"]"#));
static SEARCH_RESULT_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"div[data-component-type="s-search-result"]"#));
static CLASSED_ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| selector("a[class][href]"));
static PRODUCT_TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| selector("span#productTitle"));
static PRICE_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"span[class*="a-price-whole"]"#));
static REVIEW_COUNT_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector("span#acrCustomerReviewText"));

static REVIEWED_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Reviewed in .* on ").expect("valid regex"));
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static ASIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dp/([A-Z0-9]{10})").expect("valid regex"));
static PRODUCT_LINK_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"a-link-normal.*s-no-outline").expect("valid regex"));

/// Reviews and pagination state read from one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPage {
    pub reviews: Vec<RawReview>,
    /// Whether the page offers a next-page control.
    pub has_next: bool,
}

/// Parses a review listing page in one pass.
#[must_use]
pub fn parse_review_page(html: &str) -> ReviewPage {
    let document = Html::parse_document(html);
    let reviews = document
        .select(&REVIEW_SEL)
        .filter_map(|review| {
            // A review without a body carries no sentiment signal.
            let text = first_text(review, &BODY_SEL).filter(|t| !t.is_empty())?;
            Some(RawReview::new(star_rating(review), text))
        })
        .collect();
    let has_next = document.select(&NEXT_PAGE_SEL).next().is_some();
    ReviewPage { reviews, has_next }
}

/// Extracts up to `max_reviews` reviews with date, title and helpful votes.
///
/// Unlike [`parse_review_page`], reviews without a body are kept with a
/// [`NOT_AVAILABLE`] content field.
#[must_use]
pub fn extract_detailed_reviews(html: &str, max_reviews: usize) -> Vec<DetailedReview> {
    let document = Html::parse_document(html);
    document
        .select(&REVIEW_SEL)
        .take(max_reviews)
        .map(|review| {
            let date = first_text(review, &DATE_SEL).map_or_else(
                || NOT_AVAILABLE.to_string(),
                |d| REVIEWED_PREFIX_RE.replace(&d, "").into_owned(),
            );
            let helpful = first_text(review, &HELPFUL_SEL)
                .and_then(|h| DIGITS_RE.find(&h).map(|m| m.as_str().to_owned()))
                .unwrap_or_else(|| "0".to_string());

            DetailedReview {
                rating: star_rating(review),
                date,
                title: text_or_na(first_text(review, &TITLE_SEL)),
                content: text_or_na(first_text(review, &BODY_SEL)),
                helpful,
            }
        })
        .collect()
}

/// Collects canonical product URLs from a category search page.
///
/// Only the first `max_products` search results are inspected. Relative
/// links are resolved against `page_url`; each product is reduced to
/// `{origin}/dp/{ASIN}` and kept once, in page order.
#[must_use]
pub fn extract_product_links(html: &str, page_url: &str, max_products: usize) -> Vec<String> {
    let Ok(base) = reqwest::Url::parse(page_url) else {
        tracing::warn!(page_url, "category URL does not parse; no product links");
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for result in document.select(&SEARCH_RESULT_SEL).take(max_products) {
        let Some(href) = result
            .select(&CLASSED_ANCHOR_SEL)
            .find(|a| {
                a.value()
                    .attr("class")
                    .is_some_and(|class| PRODUCT_LINK_CLASS_RE.is_match(class))
            })
            .and_then(|a| a.value().attr("href"))
        else {
            continue;
        };

        let Ok(full) = base.join(href) else {
            continue;
        };
        let Some(asin) = ASIN_RE
            .captures(full.as_str())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_owned())
        else {
            continue;
        };

        let product_url = format!("{}/dp/{asin}", base.origin().ascii_serialization());
        if seen.insert(product_url.clone()) {
            links.push(product_url);
        }
    }

    links
}

/// Reads product-level facts from a product detail page.
#[must_use]
pub fn extract_product_info(html: &str, product_url: &str) -> ProductInfo {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let rating = first_text(root, &ICON_ALT_SEL)
        .and_then(|t| first_word(&t))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let review_count = first_text(root, &REVIEW_COUNT_SEL)
        .and_then(|t| first_word(&t))
        .unwrap_or_else(|| "0".to_string());

    ProductInfo {
        title: text_or_na(first_text(root, &PRODUCT_TITLE_SEL)),
        price: text_or_na(first_text(root, &PRICE_SEL)),
        rating,
        review_count,
        url: product_url.to_owned(),
    }
}

/// Star rating of one review element: the first word of its icon alt text
/// (`"4.0 out of 5 stars"` → `"4.0"`).
fn star_rating(review: ElementRef<'_>) -> String {
    review
        .select(&STAR_HOOK_SEL)
        .next()
        .or_else(|| review.select(&STAR_CLASS_SEL).next())
        .and_then(|star| first_text(star, &ICON_ALT_SEL))
        .and_then(|alt| first_word(&alt))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(element_text)
}

/// Text content with each text node trimmed and joined by single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_word(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_owned)
}

fn text_or_na(text: Option<String>) -> String {
    text.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
