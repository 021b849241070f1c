//! Page fetching through the scraping proxy.
//!
//! The proxy receives the real target as a percent-encoded `url` query
//! parameter along with the auth token and a geography hint, and answers
//! with the rendered HTML of the target page.

use std::future::Future;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Url};

use crate::error::{FetchFailure, ScraperError};

/// Characters left unescaped when embedding a URL in the proxy query.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Raw HTML for one fetched page.
///
/// Parsing happens in [`crate::extract`], which keeps the document
/// `Send` across await points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    /// The target URL this document was fetched for (not the proxy URL).
    pub url: String,
    pub html: String,
}

impl PageDocument {
    #[must_use]
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Fetches one logical page.
///
/// Implementations must not retry and must not surface failures other than
/// as a [`FetchFailure`].
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<PageDocument, FetchFailure>> + Send;
}

/// [`PageFetcher`] that routes every request through the scraping proxy.
pub struct ProxyFetcher {
    client: Client,
    base_url: Url,
    token: String,
    geo_code: String,
}

impl ProxyFetcher {
    /// Creates a `ProxyFetcher` with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidProxyUrl`] if `base_url` is not an
    /// absolute http(s) URL, and [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        token: &str,
        geo_code: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let invalid = |reason: String| ScraperError::InvalidProxyUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: parsed,
            token: token.to_owned(),
            geo_code: geo_code.to_owned(),
        })
    }

    /// Builds a fetcher from the application config.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_app_config(config: &revscan_core::AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.proxy_base_url,
            &config.proxy_token,
            &config.proxy_geo_code,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Wraps `target_url` into the proxy request URL.
    #[must_use]
    pub fn proxied_url(&self, target_url: &str) -> String {
        let mut url = self.base_url.clone();
        let query = format!(
            "token={}&url={}&geoCode={}",
            utf8_percent_encode(&self.token, QUERY_VALUE),
            utf8_percent_encode(target_url, QUERY_VALUE),
            utf8_percent_encode(&self.geo_code, QUERY_VALUE),
        );
        url.set_query(Some(&query));
        url.to_string()
    }
}

impl PageFetcher for ProxyFetcher {
    async fn fetch(&self, url: &str) -> Result<PageDocument, FetchFailure> {
        let request_url = self.proxied_url(url);

        let response = self
            .client
            .get(&request_url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| FetchFailure::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchFailure::from_reqwest(url, e))?;

        tracing::debug!(url, bytes = html.len(), "fetched page");
        Ok(PageDocument::new(url, html))
    }
}
