//! Data types for the voiranime scraper
//!
//! This module contains the record types produced by the parsers. All types
//! implement Serialize and Deserialize for JSON compatibility. Records are
//! constructed once by a parser and never mutated afterwards.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::normalize::{parse_episode_number, parse_rating};

/// Display name used when an anime has no romaji title
pub const NO_TITLE: &str = "Pas de titre";

/// One anime title with its full metadata and episode list
///
/// Every field derived from a labeled metadata row is optional: the site
/// omits rows freely, and an absent row is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    /// Title in the original script (e.g., Japanese)
    pub native_title: Option<String>,
    /// Romanized title, preferred for display
    pub romaji_title: Option<String>,
    /// English title
    pub english_title: Option<String>,
    /// Site rating (e.g., 4.5)
    pub rating: Option<f64>,
    /// Media type (TV, OVA, Movie, ...)
    pub media_type: Option<String>,
    /// Airing status as displayed by the site
    pub status: Option<String>,
    /// Producing studios
    pub studios: Option<String>,
    /// First air date
    pub start_date: Option<NaiveDate>,
    /// Genres, in page order
    pub genres: Option<Vec<String>>,
    /// Cover image URL
    pub thumbnail_url: String,
    /// Trailer embed URL, when the page carries one
    pub trailer_url: Option<String>,
    /// Synopsis text
    pub synopsis: String,
    /// Episodes in document order (typically newest first)
    pub episodes: Vec<Episode>,
}

impl Anime {
    /// Display name: the romaji title, or a fixed placeholder when absent.
    ///
    /// The english title is never used as a fallback here.
    pub fn display_title(&self) -> &str {
        self.romaji_title.as_deref().unwrap_or(NO_TITLE)
    }
}

impl fmt::Display for Anime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_title())
    }
}

/// One episode of an anime, as listed on its detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode ordinal, derived from the episode label text
    pub number: u32,
    /// Episode title as displayed
    pub title: String,
    /// Link to the episode page (relative or absolute)
    pub href: String,
    /// Publish time exactly as displayed by the site, not parsed
    pub publish_time: String,
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// One entry of the site-wide "latest updates" listing
///
/// Denormalized: bundles the fields of an anime and of its most recent
/// episode needed for display, without referencing full records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEpisode {
    /// Anime title, trimmed
    pub anime_title: String,
    /// Link to the anime detail page
    pub anime_href: String,
    /// Site rating of the anime
    pub anime_rating: f64,
    /// Ordinal of the most recent episode
    pub episode_number: u32,
    /// Link to that episode
    pub episode_href: String,
    /// Publish time as displayed, with newlines removed
    pub episode_publish_time: String,
}

impl RecentEpisode {
    /// Build a record from the six raw strings extracted by the listing
    /// parser, applying the field derivations: titles and hrefs are trimmed,
    /// the rating is parsed as a decimal, the episode label goes through the
    /// episode-number normalizer, and the publish time loses embedded
    /// newlines.
    pub fn from_raw(
        title: &str,
        href: &str,
        rating: &str,
        episode_label: &str,
        episode_href: &str,
        publish_time: &str,
    ) -> Result<Self> {
        Ok(Self {
            anime_title: title.trim().to_string(),
            anime_href: href.trim().to_string(),
            anime_rating: parse_rating(rating)?,
            episode_number: parse_episode_number(episode_label)?,
            episode_href: episode_href.trim().to_string(),
            episode_publish_time: publish_time.replace('\n', "").trim().to_string(),
        })
    }
}

impl fmt::Display for RecentEpisode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.anime_title, self.episode_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VoiranimeError;

    fn sample_anime() -> Anime {
        Anime {
            native_title: None,
            romaji_title: None,
            english_title: None,
            rating: Some(4.5),
            media_type: Some("TV".to_string()),
            status: Some("Ongoing".to_string()),
            studios: None,
            start_date: None,
            genres: None,
            thumbnail_url: "https://cdn.example/op.jpg".to_string(),
            trailer_url: None,
            synopsis: "Pirates.".to_string(),
            episodes: Vec::new(),
        }
    }

    #[test]
    fn test_display_title_prefers_romaji() {
        let mut anime = sample_anime();
        anime.romaji_title = Some("One Piece".to_string());
        anime.english_title = Some("One Piece (EN)".to_string());
        assert_eq!(anime.display_title(), "One Piece");
    }

    #[test]
    fn test_display_title_placeholder_ignores_english() {
        let mut anime = sample_anime();
        anime.english_title = Some("One Piece (EN)".to_string());
        assert_eq!(anime.display_title(), NO_TITLE);
        assert_eq!(anime.to_string(), "Pas de titre");
    }

    #[test]
    fn test_recent_episode_from_raw_trims_and_parses() {
        let recent = RecentEpisode::from_raw(
            "  One Piece \n",
            " /anime/one-piece/ ",
            " 4.65 ",
            " 1071 \n",
            " /anime/one-piece/1071/ ",
            "\n il y a 2 jours \n",
        )
        .unwrap();

        assert_eq!(recent.anime_title, "One Piece");
        assert_eq!(recent.anime_href, "/anime/one-piece/");
        assert_eq!(recent.anime_rating, 4.65);
        assert_eq!(recent.episode_number, 1071);
        assert_eq!(recent.episode_href, "/anime/one-piece/1071/");
        assert_eq!(recent.episode_publish_time, "il y a 2 jours");
        assert_eq!(recent.to_string(), "One Piece - 1071");
    }

    #[test]
    fn test_recent_episode_from_raw_bad_rating() {
        let result = RecentEpisode::from_raw("t", "h", "N/A", "12", "h", "now");
        assert!(matches!(result, Err(VoiranimeError::InvalidFormat(_))));
    }

    #[test]
    fn test_recent_episode_from_raw_bad_label() {
        let result = RecentEpisode::from_raw("t", "h", "4.5", "finale", "h", "now");
        assert!(matches!(result, Err(VoiranimeError::InvalidFormat(_))));
    }

    #[test]
    fn test_episode_serialization_round_trip() {
        let episode = Episode {
            number: 12,
            title: "One Piece - 12".to_string(),
            href: "/anime/one-piece/12/".to_string(),
            publish_time: "2 days ago".to_string(),
        };

        let json = serde_json::to_string(&episode).unwrap();
        let back: Episode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, episode);
    }
}
