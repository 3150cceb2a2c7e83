//! HTML parsers for voiranime pages
//!
//! This module contains parsers for extracting data from the site's HTML:
//! - `listing`: parse the homepage "latest updates" listing
//! - `detail`: parse an anime detail page
//! - `normalize`: shared text normalization (episode numbers, ratings, dates)

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, VoiranimeError};

pub mod detail;
pub mod listing;
pub mod normalize;

// Re-export main parsing functions
pub use detail::parse_anime_detail;
pub use listing::parse_recent_episodes;
pub use normalize::{parse_episode_number, parse_rating, parse_start_date};

/// Compile a CSS selector, surfacing a broken selector as an error instead
/// of panicking.
pub(crate) fn compile_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| VoiranimeError::Selector(format!("{}: {:?}", css, e)))
}

/// First element matching `css` anywhere in the document, or
/// `ElementNotFound` when the page does not have the expected shape.
pub(crate) fn select_first<'a>(document: &'a Html, css: &str) -> Result<ElementRef<'a>> {
    let selector = compile_selector(css)?;
    document
        .select(&selector)
        .next()
        .ok_or_else(|| VoiranimeError::ElementNotFound(css.to_string()))
}

/// First descendant of `scope` matching `css`, or `ElementNotFound`.
pub(crate) fn select_one<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    let selector = compile_selector(css)?;
    scope
        .select(&selector)
        .next()
        .ok_or_else(|| VoiranimeError::ElementNotFound(css.to_string()))
}

/// Value of an attribute on `element`, or `ElementNotFound` naming the
/// attribute and the element it was expected on.
pub(crate) fn require_attr(element: ElementRef<'_>, attr: &str, context: &str) -> Result<String> {
    element
        .value()
        .attr(attr)
        .map(|value| value.to_string())
        .ok_or_else(|| VoiranimeError::ElementNotFound(format!("{}[{}]", context, attr)))
}
