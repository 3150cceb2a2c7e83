//! Voiranime Scraper Core Library
//!
//! This crate provides the core scraping functionality for voiranime, a
//! French anime streaming index sitting behind Cloudflare.
//!
//! # Features
//! - Latest-updates listing parsed into typed records
//! - Anime detail pages with metadata and full episode lists
//! - HTTP client carrying the caller's Cloudflare clearance cookie

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, VoiranimeClient};
pub use error::{Result, VoiranimeError};
pub use scraper::VoiranimeScraper;
pub use types::{Anime, Episode, RecentEpisode};
