//! Main harvester service that ties all components together.

use std::thread;

use reqwest::blocking::Client;

use crate::config::{chapter_code, validate_chapter, HarvestConfig};
use crate::error::{HarvesterError, Result};
use crate::extract::extract_chapter;
use crate::http::create_client;
use crate::page::download_chapter_text;
use crate::types::{ChapterOutcome, TariffHarvest};

/// Progress notifications emitted while harvesting.
#[derive(Debug)]
pub enum HarvestEvent<'a> {
    /// About to fetch a chapter.
    Fetching { chapter: u32, code: &'a str },

    /// Chapter fetched and extracted.
    Harvested {
        chapter: u32,
        code: &'a str,
        records: usize,
    },

    /// Chapter fetch failed and is skipped.
    Skipped {
        chapter: u32,
        code: &'a str,
        error: &'a HarvesterError,
    },
}

/// Harvest the tariff with a fresh HTTP client.
///
/// # Arguments
/// * `config` - URL template, chapter range and delay
/// * `on_event` - Called for every progress event
///
/// # Returns
/// Chapter titles, globally deduplicated records and the skipped chapters
pub fn harvest_tariff(
    config: &HarvestConfig,
    on_event: impl FnMut(HarvestEvent<'_>),
) -> Result<TariffHarvest> {
    let client = create_client()?;
    harvest_with_client(&client, config, on_event)
}

/// Harvest every chapter in `config.chapters` in order.
///
/// Failed chapter fetches are recorded as skipped and the run moves on.
/// Any other error aborts the harvest.
pub fn harvest_with_client(
    client: &Client,
    config: &HarvestConfig,
    mut on_event: impl FnMut(HarvestEvent<'_>),
) -> Result<TariffHarvest> {
    let mut harvest = TariffHarvest::new();

    for chapter in config.chapters.clone() {
        let code = chapter_code(chapter);
        on_event(HarvestEvent::Fetching {
            chapter,
            code: &code,
        });

        let outcome = harvest_chapter(client, &config.url_template, chapter)?;
        let harvested = match &outcome {
            ChapterOutcome::Harvested(extraction) => {
                on_event(HarvestEvent::Harvested {
                    chapter,
                    code: &code,
                    records: extraction.records.len(),
                });
                true
            }
            ChapterOutcome::Skipped(error) => {
                tracing::warn!(chapter, error = %error, "Skipping chapter");
                on_event(HarvestEvent::Skipped {
                    chapter,
                    code: &code,
                    error,
                });
                false
            }
        };
        harvest.add_outcome(chapter, &code, outcome);

        if harvested && !config.delay.is_zero() {
            thread::sleep(config.delay);
        }
    }

    let collected = harvest.records.len();
    harvest.dedupe();
    tracing::info!(
        chapters = harvest.chapters.len(),
        skipped = harvest.skipped.len(),
        collected,
        records = harvest.records.len(),
        "Harvest finished"
    );

    Ok(harvest)
}

/// Fetch and extract a single chapter.
///
/// Fetch failures become [`ChapterOutcome::Skipped`]; only errors that
/// should abort the whole run are returned as `Err`.
pub fn harvest_chapter(client: &Client, url_template: &str, chapter: u32) -> Result<ChapterOutcome> {
    validate_chapter(chapter)?;

    match download_chapter_text(client, url_template, chapter) {
        Ok(text) => {
            let extraction = extract_chapter(&text, chapter);
            tracing::debug!(
                chapter,
                title = %extraction.title,
                records = extraction.records.len(),
                "Extracted chapter"
            );
            Ok(ChapterOutcome::Harvested(extraction))
        }
        Err(e) if e.is_chapter_failure() => Ok(ChapterOutcome::Skipped(e)),
        Err(e) => Err(e),
    }
}
