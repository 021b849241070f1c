use std::path::PathBuf;

/// Review pages fetched per product when `REVSCAN_MAX_PAGES` is unset.
pub const DEFAULT_MAX_PAGES: u32 = 4;

#[derive(Clone)]
pub struct AppConfig {
    pub proxy_base_url: String,
    pub proxy_token: String,
    pub proxy_geo_code: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_pages: u32,
    pub page_delay_ms: u64,
    pub vectorizer_path: PathBuf,
    pub model_path: PathBuf,
    pub categories_path: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("proxy_base_url", &self.proxy_base_url)
            .field("proxy_token", &"[redacted]")
            .field("proxy_geo_code", &self.proxy_geo_code)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_pages", &self.max_pages)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("vectorizer_path", &self.vectorizer_path)
            .field("model_path", &self.model_path)
            .field("categories_path", &self.categories_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
