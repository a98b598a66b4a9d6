use crate::catalog::DEFAULT_PAGE_SIZE;
use std::path::PathBuf;
use std::time::Duration;
use storefront_client::ClientConfig;
use storefront_client::config::DEFAULT_CATALOG_URL;

/// Local storage database file name inside `work_dir`
const STORAGE_FILE: &str = "storefront.redb";

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_BASE_URL | https://fakestoreapi.com | Catalog API base URL |
/// | WORK_DIR | ./data | Directory holding the local storage database |
/// | PAGE_SIZE | 8 | Products shown before "load more" |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
/// | LOADING_DELAY_MS | 0 | Cosmetic pause after a successful fetch |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for rolling log files |
///
/// # Example
///
/// ```ignore
/// CATALOG_BASE_URL=http://localhost:3000 PAGE_SIZE=12 cargo run -p storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
    pub work_dir: PathBuf,
    pub page_size: usize,
    /// Seconds
    pub request_timeout: u64,
    pub loading_delay: Duration,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            catalog_base_url: std::env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_URL.into()),
            work_dir: std::env::var("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            request_timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            loading_delay: Duration::from_millis(
                std::env::var("LOADING_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0),
            ),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Defaults with a custom catalog and work dir
    ///
    /// Mostly for tests
    pub fn with_overrides(catalog_base_url: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_base_url: catalog_base_url.into(),
            work_dir: work_dir.into(),
            ..Self::from_env()
        }
    }

    /// Path of the local storage database
    pub fn storage_path(&self) -> PathBuf {
        self.work_dir.join(STORAGE_FILE)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.catalog_base_url).with_timeout(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides("http://127.0.0.1:9", "/tmp/shop");
        assert_eq!(config.catalog_base_url, "http://127.0.0.1:9");
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/shop/storefront.redb"));
        assert_eq!(config.client_config().base_url, "http://127.0.0.1:9");
    }
}
