//! Line-by-line reconstruction of chapter → heading → subheading → code.
//!
//! Printed tariff pages flatten the schedule into a sequence of short lines.
//! A 4-digit line opens a heading, a 5-digit line extending the heading opens
//! a subheading, and the line following either is taken as its description.
//! Every other line is scanned for tariff codes, which inherit whatever
//! heading and subheading are active at that point.

use std::collections::HashSet;

use super::code::{find_codes, starts_with_code};
use super::lines::split_lines;
use crate::config::{chapter_code, BOILERPLATE_LINES, CHAPTER_TITLE_PREFIX};
use crate::types::{ChapterExtraction, TariffRecord};

/// Characters stripped from the front of a code's trailing description.
const DESCRIPTION_SEPARATORS: [char; 5] = [' ', '-', '–', '—', ':'];

/// Active heading and subheading while walking a chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyState {
    pub heading: String,
    pub heading_description: String,
    pub subheading: String,
    pub subheading_description: String,
}

impl HierarchyState {
    /// Open a new heading, clearing everything below it.
    pub fn enter_heading(&mut self, heading: &str, description: Option<&str>) {
        *self = Self {
            heading: heading.to_string(),
            heading_description: description.unwrap_or_default().to_string(),
            ..Self::default()
        };
    }

    /// Open a new subheading under the current heading.
    pub fn enter_subheading(&mut self, subheading: &str, description: Option<&str>) {
        self.subheading = subheading.to_string();
        self.subheading_description = description.unwrap_or_default().to_string();
    }

    /// A heading line is exactly four digits.
    pub fn is_heading_line(&self, line: &str) -> bool {
        line.len() == 4 && is_all_digits(line) && !starts_with_code(line)
    }

    /// A subheading line is exactly five digits and extends the current heading.
    ///
    /// With no heading active the prefix is empty, so any five-digit line
    /// qualifies.
    pub fn is_subheading_line(&self, line: &str) -> bool {
        line.len() == 5
            && is_all_digits(line)
            && line.starts_with(self.heading.as_str())
            && !starts_with_code(line)
    }

    /// Build a record for a code found under the current state.
    pub fn record(&self, chapter: &str, code: &str, description: &str) -> TariffRecord {
        TariffRecord {
            chapter: chapter.to_string(),
            heading: self.heading.clone(),
            heading_description: self.heading_description.clone(),
            subheading: self.subheading.clone(),
            subheading_description: self.subheading_description.clone(),
            code: code.to_string(),
            description: description.to_string(),
        }
    }
}

/// Find the chapter title line, e.g. `CHAPTER 01 - LIVE ANIMALS`.
///
/// Returns the first trimmed line that starts with `CHAPTER ` and contains
/// the two-digit chapter code, or an empty string.
pub fn extract_chapter_title(text: &str, chapter: u32) -> String {
    let code = chapter_code(chapter);
    split_lines(text)
        .into_iter()
        .map(str::trim)
        .find(|line| line.starts_with(CHAPTER_TITLE_PREFIX) && line.contains(code.as_str()))
        .unwrap_or_default()
        .to_string()
}

/// Extract all tariff records of one chapter.
///
/// Records are deduplicated on all seven fields, first occurrence wins, and
/// come out in the order they first appear in the text.
pub fn extract_hierarchy(text: &str, chapter: u32) -> Vec<TariffRecord> {
    let chapter = chapter_code(chapter);
    let lines = split_lines(text);

    let mut state = HierarchyState::default();
    let mut seen: HashSet<TariffRecord> = HashSet::new();
    let mut records = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() || is_skipped_line(line) {
            i += 1;
            continue;
        }

        if state.is_heading_line(line) {
            let description = description_after(&lines, i);
            state.enter_heading(line, description);
            i += if description.is_some() { 2 } else { 1 };
            continue;
        }

        if state.is_subheading_line(line) {
            let description = description_after(&lines, i);
            state.enter_subheading(line, description);
            i += if description.is_some() { 2 } else { 1 };
            continue;
        }

        for found in find_codes(line) {
            let trailing = found.rest.trim().trim_start_matches(DESCRIPTION_SEPARATORS);
            let description = if trailing.is_empty() {
                code_description_after(&lines, i).unwrap_or_default()
            } else {
                trailing
            };

            let record = state.record(&chapter, found.code, description);
            if seen.insert(record.clone()) {
                records.push(record);
            }
        }

        i += 1;
    }

    records
}

/// Extract title and records of one chapter.
pub fn extract_chapter(text: &str, chapter: u32) -> ChapterExtraction {
    ChapterExtraction {
        title: extract_chapter_title(text, chapter),
        records: extract_hierarchy(text, chapter),
    }
}

/// Title lines and repeated table headers carry no hierarchy.
fn is_skipped_line(line: &str) -> bool {
    line.starts_with(CHAPTER_TITLE_PREFIX) || BOILERPLATE_LINES.contains(&line)
}

/// Description of a heading or subheading: the next line, unless it is
/// empty, numeric, or starts with a code.
fn description_after<'a>(lines: &[&'a str], index: usize) -> Option<&'a str> {
    let next = lines.get(index + 1).copied()?.trim();
    (!next.is_empty() && !is_all_digits(next) && !starts_with_code(next)).then_some(next)
}

/// Fallback description of a bare code: the next line, unless it is empty
/// or starts with a code. The line is not consumed.
fn code_description_after<'a>(lines: &[&'a str], index: usize) -> Option<&'a str> {
    let next = lines.get(index + 1).copied()?.trim();
    (!next.is_empty() && !starts_with_code(next)).then_some(next)
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
