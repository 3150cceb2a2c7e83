//! Text normalization shared by the parsers
//!
//! Free text scraped from the site gets converted here: episode labels to
//! integers, rating text to decimals, start dates to calendar dates.

use chrono::NaiveDate;

use crate::error::{Result, VoiranimeError};

/// Format of the "Start Date" metadata row (e.g., "Jan 05, 2020")
const START_DATE_FORMAT: &str = "%b %d, %Y";

/// Normalize a free-text episode label into an integer ordinal.
///
/// Embedded newlines and surrounding whitespace are stripped, then leading
/// zeros are dropped one at a time. The loop keeps at least one character so
/// that "0" parses to 0 instead of becoming empty.
///
/// # Arguments
/// * `label` - Episode label text (e.g., "007", " 1071\n")
///
/// # Returns
/// * `Ok(number)` with the parsed ordinal
/// * `Err(VoiranimeError::InvalidFormat)` if the label has no numeric content
///
/// # Examples
/// ```
/// use voiranime_core::parser::normalize::parse_episode_number;
///
/// assert_eq!(parse_episode_number("007").unwrap(), 7);
/// assert_eq!(parse_episode_number("0").unwrap(), 0);
/// assert_eq!(parse_episode_number(" 23\n").unwrap(), 23);
/// assert!(parse_episode_number("abc").is_err());
/// ```
pub fn parse_episode_number(label: &str) -> Result<u32> {
    let cleaned = label.replace('\n', "");
    let mut rest = cleaned.trim();

    while rest.len() > 1 && rest.starts_with('0') {
        rest = &rest[1..];
    }

    rest.parse::<u32>()
        .map_err(|_| VoiranimeError::InvalidFormat(format!("episode number: {:?}", label)))
}

/// Parse a rating string as a decimal.
///
/// # Examples
/// ```
/// use voiranime_core::parser::normalize::parse_rating;
///
/// assert_eq!(parse_rating(" 4.5 ").unwrap(), 4.5);
/// assert!(parse_rating("N/A").is_err());
/// ```
pub fn parse_rating(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| VoiranimeError::InvalidFormat(format!("rating: {:?}", trimmed)))
}

/// Parse a start date in the site's "Mon Day, Year" format.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use voiranime_core::parser::normalize::parse_start_date;
///
/// assert_eq!(
///     parse_start_date("Jan 05, 2020").unwrap(),
///     NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()
/// );
/// assert!(parse_start_date("05/01/2020").is_err());
/// ```
pub fn parse_start_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, START_DATE_FORMAT)
        .map_err(|_| VoiranimeError::InvalidFormat(format!("start date: {:?}", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_episode_number_plain() {
        assert_eq!(parse_episode_number("23").unwrap(), 23);
        assert_eq!(parse_episode_number("1071").unwrap(), 1071);
    }

    #[test]
    fn test_parse_episode_number_zero_padded() {
        assert_eq!(parse_episode_number("007").unwrap(), 7);
        assert_eq!(parse_episode_number("011").unwrap(), 11);
        assert_eq!(parse_episode_number("0001").unwrap(), 1);
    }

    #[test]
    fn test_parse_episode_number_zero() {
        assert_eq!(parse_episode_number("0").unwrap(), 0);
        assert_eq!(parse_episode_number("000").unwrap(), 0);
    }

    #[test]
    fn test_parse_episode_number_whitespace_and_newlines() {
        assert_eq!(parse_episode_number(" 12 ").unwrap(), 12);
        assert_eq!(parse_episode_number("\n042\n").unwrap(), 42);
    }

    #[test]
    fn test_parse_episode_number_no_digits() {
        assert!(parse_episode_number("abc").is_err());
        assert!(parse_episode_number("").is_err());
        assert!(parse_episode_number("episode twelve").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.5").unwrap(), 4.5);
        assert_eq!(parse_rating(" 3 ").unwrap(), 3.0);
        assert!(parse_rating("quatre").is_err());
        assert!(parse_rating("").is_err());
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(
            parse_start_date("Jan 05, 2020").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()
        );
        assert_eq!(
            parse_start_date("Oct 20, 1999").unwrap(),
            NaiveDate::from_ymd_opt(1999, 10, 20).unwrap()
        );
        assert!(parse_start_date("2020-01-05").is_err());
        assert!(parse_start_date("Janvier 5, 2020").is_err());
    }

    proptest! {
        #[test]
        fn zero_padded_labels_round_trip(n in 0u32..10_000_000, pad in 0usize..4) {
            let label = format!("{}{}", "0".repeat(pad), n);
            prop_assert_eq!(parse_episode_number(&label).unwrap(), n);
        }
    }
}
