//! Configuration constants and validation functions for the harvester.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::{HarvesterError, Result};

/// Print view of a single tariff chapter on the HM Customs Gibraltar portal.
///
/// `{chapter}` is replaced by the two-digit chapter code.
pub const TARIFF_URL_TEMPLATE: &str =
    "https://www.hmcustoms.gov.gi/portal/services/tariff/print.jsf?c={chapter}";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Pause after each harvested chapter, in milliseconds.
pub const CHAPTER_DELAY_MS: u64 = 300;

/// First chapter of the tariff schedule.
pub const FIRST_CHAPTER: u32 = 1;

/// Last chapter of the tariff schedule.
pub const LAST_CHAPTER: u32 = 99;

/// Default output path for the hierarchy table.
pub const DEFAULT_HIERARCHY_OUTFILE: &str = "gibraltar_tariff_hierarchy.csv";

/// Default output path for the chapter title table.
pub const DEFAULT_CHAPTERS_OUTFILE: &str = "gibraltar_chapters.csv";

/// Prefix of the chapter title line, e.g. `CHAPTER 01 - LIVE ANIMALS`.
pub const CHAPTER_TITLE_PREFIX: &str = "CHAPTER ";

/// Table header lines repeated on every printed chapter page.
pub const BOILERPLATE_LINES: [&str; 3] = ["Chapter", "Heading", "Article Description"];

/// Runtime settings for a harvest run.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// URL template containing a `{chapter}` placeholder.
    pub url_template: String,
    /// Chapters to fetch, in order.
    pub chapters: RangeInclusive<u32>,
    /// Pause after each successfully harvested chapter.
    pub delay: Duration,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            url_template: TARIFF_URL_TEMPLATE.to_string(),
            chapters: FIRST_CHAPTER..=LAST_CHAPTER,
            delay: Duration::from_millis(CHAPTER_DELAY_MS),
        }
    }
}

/// Validate that a chapter number lies within the tariff schedule.
///
/// # Examples
/// ```
/// use gibraltar_tariff_harvester::config::validate_chapter;
///
/// assert!(validate_chapter(1).is_ok());
/// assert!(validate_chapter(99).is_ok());
/// assert!(validate_chapter(0).is_err());
/// assert!(validate_chapter(100).is_err());
/// ```
pub fn validate_chapter(chapter: u32) -> Result<()> {
    if (FIRST_CHAPTER..=LAST_CHAPTER).contains(&chapter) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidChapter(chapter))
    }
}

/// Format a chapter number as its two-digit code.
///
/// # Examples
/// ```
/// use gibraltar_tariff_harvester::config::chapter_code;
///
/// assert_eq!(chapter_code(1), "01");
/// assert_eq!(chapter_code(85), "85");
/// ```
pub fn chapter_code(chapter: u32) -> String {
    format!("{chapter:02}")
}

/// Build the print URL for a chapter from a URL template.
///
/// # Panics
/// Debug builds panic if the chapter is outside 1..=99.
pub fn chapter_url(template: &str, chapter: u32) -> String {
    debug_assert!(
        validate_chapter(chapter).is_ok(),
        "chapter should be validated before calling chapter_url"
    );
    template.replace("{chapter}", &chapter_code(chapter))
}
