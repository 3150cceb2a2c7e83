//! Detail parser for voiranime anime pages
//!
//! Parses one anime's detail page into an `Anime` record with its full
//! episode list.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};

use crate::error::Result;
use crate::types::{Anime, Episode};

use super::normalize::{parse_episode_number, parse_rating, parse_start_date};
use super::{compile_selector, require_attr, select_first, select_one};

/// Parse an anime detail page.
///
/// Required structure: the summary panel (`div.tab-summary`) with its image
/// block and content block, the synopsis block, and the episode-list
/// container. Any of these missing aborts with `ElementNotFound`; a
/// non-numeric rating, an unparsable start date, or an episode label
/// without digits aborts with `InvalidFormat`. A missing trailer is not an
/// error.
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page
///
/// # Returns
/// * `Ok(Anime)` with all metadata and episodes in document order
/// * `Err(VoiranimeError)` if the page does not have the expected shape
pub fn parse_anime_detail(html: &str) -> Result<Anime> {
    let document = Html::parse_document(html);

    let tab_summary = select_first(&document, "div.tab-summary")?;
    let summary_image = select_one(tab_summary, "div.summary_image")?;
    let thumbnail_url = extract_thumbnail(summary_image)?;
    let trailer_url = extract_trailer(summary_image)?;

    let content = select_one(tab_summary, "div.post-content")?;
    let rating = parse_rating(&select_one(content, "span.score")?.text().collect::<String>())?;
    let metadata = collect_metadata(content)?;

    let synopsis = select_first(&document, "div.description-summary")?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let episodes = parse_episode_list(&document)?;

    Ok(Anime {
        native_title: metadata.native_title,
        romaji_title: metadata.romaji_title,
        english_title: metadata.english_title,
        rating: Some(rating),
        media_type: metadata.media_type,
        status: metadata.status,
        studios: metadata.studios,
        start_date: metadata.start_date,
        genres: metadata.genres,
        thumbnail_url,
        trailer_url,
        synopsis,
        episodes,
    })
}

/// Cover image source, required.
fn extract_thumbnail(summary_image: ElementRef<'_>) -> Result<String> {
    let img = select_one(summary_image, "img")?;
    require_attr(img, "src", "div.summary_image img")
}

/// Trailer embed source. The iframe is optional: its absence yields no
/// trailer rather than an error.
fn extract_trailer(summary_image: ElementRef<'_>) -> Result<Option<String>> {
    let iframe_selector = compile_selector("iframe")?;
    Ok(summary_image
        .select(&iframe_selector)
        .next()
        .and_then(|iframe| iframe.value().attr("src"))
        .map(|src| src.to_string()))
}

/// Fields collected from the labeled metadata rows. Rows are optional; a
/// missing row leaves its field unset.
#[derive(Default)]
struct Metadata {
    native_title: Option<String>,
    romaji_title: Option<String>,
    english_title: Option<String>,
    media_type: Option<String>,
    status: Option<String>,
    studios: Option<String>,
    start_date: Option<NaiveDate>,
    genres: Option<Vec<String>>,
}

/// Walk the content block's labeled rows and collect recognized fields.
///
/// Labels are normalized (lowercased, trimmed, internal spaces removed)
/// before matching; unrecognized labels are ignored so unknown rows do not
/// break the parse.
fn collect_metadata(content: ElementRef<'_>) -> Result<Metadata> {
    let row_selector = compile_selector("div.post-content_item")?;
    let mut metadata = Metadata::default();

    for row in content.select(&row_selector) {
        let label = select_one(row, "h5")?
            .text()
            .collect::<String>()
            .to_lowercase()
            .trim()
            .replace(' ', "");
        let value = select_one(row, "div.summary-content")?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        match label.as_str() {
            "native" => metadata.native_title = Some(value),
            "romaji" => metadata.romaji_title = Some(value),
            "english" => metadata.english_title = Some(value),
            "type" => metadata.media_type = Some(value),
            "status" => metadata.status = Some(value),
            "studios" => metadata.studios = Some(value),
            "startdate" => metadata.start_date = Some(parse_start_date(&value)?),
            "genre(s)" => {
                metadata.genres = Some(
                    value
                        .split(',')
                        .map(|genre| genre.trim().to_string())
                        .collect(),
                )
            }
            _ => {}
        }
    }

    Ok(metadata)
}

/// Parse the episode-list container into episodes, in document order.
fn parse_episode_list(document: &Html) -> Result<Vec<Episode>> {
    let container = select_first(document, "ul.version-chap")?;

    let entry_selector = compile_selector("li.wp-manga-chapter")?;
    let mut episodes = Vec::new();

    for entry in container.select(&entry_selector) {
        episodes.push(parse_episode_entry(entry)?);
    }

    Ok(episodes)
}

/// Parse one `li.wp-manga-chapter` entry. The episode number derives from
/// the link-text segment after the last hyphen.
fn parse_episode_entry(entry: ElementRef<'_>) -> Result<Episode> {
    let link = select_one(entry, "a")?;
    let href = require_attr(link, "href", "li.wp-manga-chapter a")?;
    let text = link.text().collect::<String>();

    let label = text.rsplit('-').next().unwrap_or(&text).trim();
    let number = parse_episode_number(label)?;

    let publish_time = select_one(entry, "i")?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    Ok(Episode {
        number,
        title: text.trim().to_string(),
        href,
        publish_time,
    })
}
