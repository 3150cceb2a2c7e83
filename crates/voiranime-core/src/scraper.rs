//! Main voiranime scraper API
//!
//! This module provides the high-level API for the site. It combines the
//! HTTP client with the parsers: one fetch per operation, one parser per
//! page kind.

use tracing::debug;

use crate::client::VoiranimeClient;
use crate::error::{Result, VoiranimeError};
use crate::parser::{parse_anime_detail, parse_recent_episodes};
use crate::types::{Anime, RecentEpisode};

/// Build the detail-page path for an anime slug.
///
/// # Examples
/// ```
/// use voiranime_core::scraper::anime_path;
///
/// assert_eq!(anime_path("one-piece"), "/anime/one-piece/");
/// ```
pub fn anime_path(slug: &str) -> String {
    format!("/anime/{}/", slug)
}

/// High-level scraper API for voiranime
///
/// # Example
/// ```no_run
/// use voiranime_core::VoiranimeScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = VoiranimeScraper::new("cf-clearance-key")?;
///
///     let recent = scraper.get_recent_episodes().await?;
///     println!("{} titres mis à jour", recent.len());
///
///     Ok(())
/// }
/// ```
pub struct VoiranimeScraper {
    client: VoiranimeClient,
}

impl VoiranimeScraper {
    /// Create a new scraper with the given Cloudflare clearance key.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(clearance: &str) -> Result<Self> {
        let client = VoiranimeClient::new(clearance)?;
        Ok(Self { client })
    }

    /// Create a new scraper with a pre-configured client.
    ///
    /// Useful for tests or custom client configuration.
    pub fn with_client(client: VoiranimeClient) -> Self {
        Self { client }
    }

    /// Fetch the homepage and return the "latest updates" listing.
    ///
    /// # Returns
    /// * `Ok(Vec<RecentEpisode>)` in page order
    /// * `Err(VoiranimeError::Blocked)` if the clearance was rejected
    /// * `Err(VoiranimeError::ElementNotFound)` if the page layout changed
    pub async fn get_recent_episodes(&self) -> Result<Vec<RecentEpisode>> {
        let html = self.client.fetch("/").await?;
        let episodes = parse_recent_episodes(&html)?;
        debug!(count = episodes.len(), "Parsed recent episodes");
        Ok(episodes)
    }

    /// Fetch one anime's detail page and return its full record.
    ///
    /// The slug only drives URL construction; the parser itself never sees
    /// it.
    ///
    /// # Arguments
    /// * `slug` - URL-safe identifier of the anime (e.g., "one-piece")
    ///
    /// # Returns
    /// * `Ok(Anime)` with metadata and episodes
    /// * `Err(VoiranimeError::InvalidSlug)` if the slug is empty or
    ///   whitespace-only
    pub async fn get_anime(&self, slug: &str) -> Result<Anime> {
        let trimmed = slug.trim();
        if trimmed.is_empty() {
            return Err(VoiranimeError::InvalidSlug(slug.to_string()));
        }

        let html = self.client.fetch(&anime_path(trimmed)).await?;
        let anime = parse_anime_detail(&html)?;
        debug!(
            title = %anime.display_title(),
            episodes = anime.episodes.len(),
            "Parsed anime detail"
        );
        Ok(anime)
    }
}
