use thiserror::Error;

/// A single page request that did not produce a usable document.
///
/// The harvester treats every variant as a pagination stop signal.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request for {url} timed out")]
    Timeout { url: String },

    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },
}

impl FetchFailure {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchFailure::Timeout {
                url: url.to_owned(),
            }
        } else {
            FetchFailure::Transport {
                url: url.to_owned(),
                source: err,
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid proxy base URL \"{base_url}\": {reason}")]
    InvalidProxyUrl { base_url: String, reason: String },

    #[error("CSV write error for {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
