//! Chapter page downloading.
//!
//! Each chapter of the tariff has a print view whose visible text lists the
//! headings, subheadings and codes of that chapter in reading order.

use reqwest::blocking::Client;

use crate::config::{chapter_url, validate_chapter};
use crate::error::Result;
use crate::html::html_to_text;
use crate::http::download_text;

/// Download a chapter's print view and return its visible text.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url_template` - URL template with a `{chapter}` placeholder
/// * `chapter` - Chapter number, 1 to 99
///
/// # Returns
/// One trimmed line per text block of the page
pub fn download_chapter_text(client: &Client, url_template: &str, chapter: u32) -> Result<String> {
    validate_chapter(chapter)?;
    let url = chapter_url(url_template, chapter);
    tracing::debug!(chapter, url = %url, "Downloading chapter");

    let html = download_text(client, &url, chapter)?;
    Ok(html_to_text(&html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarvesterError;
    use crate::http::create_client;

    #[test]
    fn test_download_chapter_text_rejects_invalid_chapter() {
        let client = create_client().unwrap();
        let err = download_chapter_text(&client, "http://127.0.0.1:9/?c={chapter}", 100)
            .unwrap_err();
        assert!(matches!(err, HarvesterError::InvalidChapter(100)));
    }
}
