//! Core data types for the harvester.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::HarvesterError;

/// Column order of the hierarchy table.
pub const HIERARCHY_COLUMNS: [&str; 7] = [
    "chapter",
    "heading",
    "heading_description",
    "subheading",
    "subheading_description",
    "code",
    "description",
];

/// Column order of the chapter title table.
pub const CHAPTER_COLUMNS: [&str; 2] = ["chapter", "chapter_title"];

/// One tariff code together with its full ancestor chain.
///
/// Equality and hashing cover all seven fields, so the record doubles as
/// its own deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TariffRecord {
    /// Two-digit chapter code (e.g., "01").
    pub chapter: String,

    /// Four-digit heading, empty when none was seen yet.
    pub heading: String,

    pub heading_description: String,

    /// Five-digit subheading, empty when none is active.
    pub subheading: String,

    pub subheading_description: String,

    /// Tariff code in `DDDDDDDDDD-DD-DD` form, `*` allowed as digit.
    pub code: String,

    pub description: String,
}

/// Title line of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterTitle {
    /// Two-digit chapter code.
    pub chapter: String,

    /// Title line, or empty if the page had none.
    pub chapter_title: String,
}

/// Result of extracting one chapter's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterExtraction {
    /// Title line, or empty.
    pub title: String,

    /// Deduplicated records in order of first appearance.
    pub records: Vec<TariffRecord>,
}

/// What happened to a single chapter during a harvest.
#[derive(Debug)]
pub enum ChapterOutcome {
    /// Page fetched and extracted.
    Harvested(ChapterExtraction),

    /// Fetch failed; the chapter contributes nothing to the output.
    Skipped(HarvesterError),
}

/// Chapter that was skipped, with the reason.
#[derive(Debug)]
pub struct SkippedChapter {
    pub chapter: u32,
    pub error: HarvesterError,
}

/// Everything collected over a harvest run.
#[derive(Debug, Default)]
pub struct TariffHarvest {
    /// One entry per successfully fetched chapter, in chapter order.
    pub chapters: Vec<ChapterTitle>,

    /// Records across all chapters.
    pub records: Vec<TariffRecord>,

    /// Chapters whose fetch failed.
    pub skipped: Vec<SkippedChapter>,
}

impl TariffHarvest {
    /// Create an empty harvest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one chapter.
    pub fn add_outcome(&mut self, chapter: u32, chapter_code: &str, outcome: ChapterOutcome) {
        match outcome {
            ChapterOutcome::Harvested(extraction) => {
                self.chapters.push(ChapterTitle {
                    chapter: chapter_code.to_string(),
                    chapter_title: extraction.title,
                });
                self.records.extend(extraction.records);
            }
            ChapterOutcome::Skipped(error) => {
                self.skipped.push(SkippedChapter { chapter, error });
            }
        }
    }

    /// Drop records whose full 7-tuple was already seen.
    pub fn dedupe(&mut self) {
        let records = std::mem::take(&mut self.records);
        self.records = dedupe_records(records);
    }
}

/// Remove duplicate records, keeping the first occurrence of each.
pub fn dedupe_records(records: impl IntoIterator<Item = TariffRecord>) -> Vec<TariffRecord> {
    let mut seen: HashSet<TariffRecord> = HashSet::new();
    let mut unique = Vec::new();
    for record in records {
        if seen.insert(record.clone()) {
            unique.push(record);
        }
    }
    unique
}
