use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use revscan_core::{RawReview, Verdict};
use revscan_scraper::{FetchFailure, PageDocument};

use super::*;
use crate::artifacts::{FeatureVector, LinearClassifier, SentimentModel, TfidfVectorizer};

struct CountingModel {
    inner: LinearClassifier,
    calls: Arc<AtomicUsize>,
}

impl SentimentModel for CountingModel {
    fn predict(&self, vectors: &[FeatureVector]) -> Vec<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.predict(vectors)
    }
}

fn artifacts_with_counter() -> (SentimentArtifacts, Arc<AtomicUsize>) {
    let vectorizer = TfidfVectorizer::from_json(
        r#"{
            "vocabulary": {"love": 0, "great": 1, "broke": 2, "not": 3, "work": 4},
            "idf": [1.0, 1.0, 1.5, 1.2, 1.0]
        }"#,
    )
    .unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let model = CountingModel {
        inner: LinearClassifier::new(vec![2.0, 2.0, -2.5, -1.5, 0.2], -0.05, [0, 1]),
        calls: Arc::clone(&calls),
    };
    (
        SentimentArtifacts::new(Arc::new(vectorizer), Arc::new(model)),
        calls,
    )
}

struct PagedFetcher {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl PagedFetcher {
    fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, html)| ((*url).to_string(), html.clone()))
                .collect(),
            requested: Mutex::new(Vec::new()),
        }
    }
}

impl PageFetcher for PagedFetcher {
    async fn fetch(&self, url: &str) -> Result<PageDocument, FetchFailure> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(html) => Ok(PageDocument::new(url, html.clone())),
            None => Err(FetchFailure::UnexpectedStatus {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

fn review_page(reviews: &[(&str, &str)], has_next: bool) -> String {
    let mut html = String::from("<html><body><ul>");
    for (rating, text) in reviews {
        html.push_str(&format!(
            r#"<li data-hook="review">
                <i data-hook="review-star-rating"><span class="a-icon-alt">{rating} out of 5 stars</span></i>
                <span data-hook="review-body"><span>{text}</span></span>
            </li>"#
        ));
    }
    html.push_str("</ul>");
    if has_next {
        html.push_str(r#"<ul class="a-pagination"><li class="a-last"><a>Next page</a></li></ul>"#);
    }
    html.push_str("</body></html>");
    html
}

#[test]
fn empty_corpus_fails_before_classification() {
    let (artifacts, calls) = artifacts_with_counter();
    let err = analyze_corpus(ReviewCorpus::default(), &artifacts).unwrap_err();
    assert!(matches!(err, SentimentError::EmptyCorpus));
    assert_eq!(err.to_string(), "no reviews found");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn stages_stay_aligned_with_corpus() {
    let (artifacts, calls) = artifacts_with_counter();
    let corpus = ReviewCorpus::from_reviews(vec![
        RawReview::new("5.0", "I love it, works great"),
        RawReview::new("1.0", "It broke and did not work"),
        RawReview::new("3.0", "..."),
        RawReview::new("5.0", "I love it, works great"),
    ]);
    assert_eq!(corpus.len(), 3);

    let report = analyze_corpus(corpus, &artifacts).unwrap();
    assert_eq!(report.documents.len(), report.corpus.len());
    assert_eq!(report.labels.len(), report.corpus.len());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.labels[0], SentimentLabel::Positive);
    assert_eq!(report.labels[1], SentimentLabel::Negative);
    // "..." normalizes to nothing and lands on the intercept.
    assert!(report.documents[2].is_empty());
    assert_eq!(report.labels[2], SentimentLabel::Negative);
    assert_eq!(report.result.verdict, Verdict::Bad);
    assert_eq!(report.pages_fetched, 0);
    assert!(report.stop_reason.is_none());
}

#[tokio::test]
async fn harvests_two_pages_and_reports_verdict() {
    let url = "https://shop.example/product-reviews/B000000001";
    let page1 = review_page(
        &[("5.0", "Love it, great value"), ("4.0", "Great speaker")],
        true,
    );
    let page2 = review_page(&[("1.0", "Broke after a day")], false);
    let url1 = format!("{url}?pageNumber=1");
    let url2 = format!("{url}?pageNumber=2");
    let fetcher = PagedFetcher::new(&[(url1.as_str(), page1), (url2.as_str(), page2)]);
    let harvester = Harvester::new(fetcher, Duration::ZERO);
    let (artifacts, _) = artifacts_with_counter();

    let report = run_review_sentiment(&harvester, &artifacts, url, 10)
        .await
        .unwrap();

    assert_eq!(harvester.fetcher().requested.lock().unwrap().len(), 2);
    assert_eq!(report.pages_fetched, 2);
    assert_eq!(report.stop_reason, Some(StopReason::NoNextPage));
    assert_eq!(report.corpus.len(), 3);
    assert_eq!(report.result.verdict, Verdict::Good);
    assert_eq!(report.result.summary().0, "66.67% of the reviews are positive");
}

#[tokio::test]
async fn failed_first_page_is_empty_corpus() {
    let fetcher = PagedFetcher::new(&[]);
    let harvester = Harvester::new(fetcher, Duration::ZERO);
    let (artifacts, calls) = artifacts_with_counter();

    let err = run_review_sentiment(&harvester, &artifacts, "https://shop.example/r/X", 4)
        .await
        .unwrap_err();

    assert!(matches!(err, SentimentError::EmptyCorpus));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(harvester.fetcher().requested.lock().unwrap().len(), 1);
}
