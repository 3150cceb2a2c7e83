//! Listing parser for the voiranime homepage
//!
//! Parses the "latest updates" listing into `RecentEpisode` records.

use scraper::{ElementRef, Html};

use crate::error::Result;
use crate::types::RecentEpisode;

use super::{compile_selector, require_attr, select_first, select_one};

/// Parse the homepage listing into recent-episode records, in document
/// order.
///
/// The parse is fail-fast: an entry missing any required sub-element aborts
/// the whole call with `ElementNotFound`, and no partial sequence is
/// returned. A listing with zero entries is valid and yields an empty vec.
///
/// # Arguments
/// * `html` - Raw HTML content of the homepage
///
/// # Returns
/// * `Ok(Vec<RecentEpisode>)` with one record per listed title
/// * `Err(VoiranimeError)` if the page does not have the expected shape
pub fn parse_recent_episodes(html: &str) -> Result<Vec<RecentEpisode>> {
    let document = Html::parse_document(html);

    let container = select_first(&document, "div#loop-content")?;

    let entry_selector = compile_selector("div.page-item-detail")?;
    let mut episodes = Vec::new();

    for entry in container.select(&entry_selector) {
        episodes.push(parse_listing_entry(entry)?);
    }

    Ok(episodes)
}

/// Parse one `div.page-item-detail` entry.
fn parse_listing_entry(entry: ElementRef<'_>) -> Result<RecentEpisode> {
    let summary = select_one(entry, "div.item-summary")?;

    let title_link = select_one(summary, "a")?;
    let anime_href = require_attr(title_link, "href", "div.item-summary a")?;
    let anime_title = title_link.text().collect::<String>();

    let rating = select_one(summary, "span.score")?.text().collect::<String>();

    let chapter_item = select_one(summary, "div.chapter-item")?;
    let chapter = select_one(chapter_item, "span.chapter")?;
    let episode_label = chapter.text().collect::<String>();
    let episode_link = select_one(chapter, "a")?;
    let episode_href = require_attr(episode_link, "href", "span.chapter a")?;
    let publish_time = select_one(chapter_item, "span.post-on")?
        .text()
        .collect::<String>();

    RecentEpisode::from_raw(
        &anime_title,
        &anime_href,
        &rating,
        &episode_label,
        &episode_href,
        &publish_time,
    )
}
