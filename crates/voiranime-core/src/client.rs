//! HTTP client for voiranime
//!
//! The site sits behind Cloudflare; requests carry a caller-supplied
//! `cf_clearance` cookie and fixed browser headers. There is no retry or
//! throttling layer: a request is made once and any non-success status is
//! surfaced to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use tracing::{debug, warn};

use crate::error::{Result, VoiranimeError};

/// Base URL for voiranime
pub const BASE_URL: &str = "https://v3.voiranime.com";

/// Name of the Cloudflare clearance cookie
const CLEARANCE_COOKIE: &str = "cf_clearance";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

/// Default Accept header for full page loads
const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

/// Default Accept-Language header for French content
const DEFAULT_ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7";

/// Configuration for the voiranime HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Value of the `cf_clearance` cookie (empty disables the cookie)
    pub clearance: String,
    /// Base URL of the site (overridable for tests)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            clearance: String::new(),
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client carrying the Cloudflare clearance session
pub struct VoiranimeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL requests are resolved against
    base_url: String,
}

impl VoiranimeClient {
    /// Create a new client with the given clearance key and default
    /// configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new(clearance: &str) -> Result<Self> {
        Self::with_config(ClientConfig {
            clearance: clearance.to_string(),
            ..ClientConfig::default()
        })
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the base URL is malformed or the HTTP client
    /// cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let jar = Arc::new(Jar::default());
        if !config.clearance.is_empty() {
            let url = base_url
                .parse::<reqwest::Url>()
                .map_err(|_| VoiranimeError::InvalidUrl(base_url.clone()))?;
            jar.add_cookie_str(
                &format!("{}={}", CLEARANCE_COOKIE, config.clearance),
                &url,
            );
        }

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(reqwest::header::ACCEPT, DEFAULT_ACCEPT.parse().unwrap());
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    DEFAULT_ACCEPT_LANGUAGE.parse().unwrap(),
                );
                headers
            })
            .cookie_provider(jar)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch the HTML content of a site path.
    ///
    /// # Arguments
    /// * `path` - Absolute path on the site (e.g., "/anime/one-piece/")
    ///
    /// # Returns
    /// The HTML content as a string
    ///
    /// # Errors
    /// - `VoiranimeError::Http` - network failure
    /// - `VoiranimeError::Blocked` - non-success status; the Cloudflare
    ///   challenge was not cleared
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Fetching page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(url = %url, status = %status, "Request blocked");
            return Err(VoiranimeError::Blocked(status));
        }

        Ok(response.text().await?)
    }
}
