//! End-to-end integration tests for the extraction pipeline.
//!
//! Tests the path from a saved chapter print view through text extraction
//! and hierarchy reconstruction to the CSV tables.

use std::fs;
use std::path::Path;

use gibraltar_tariff_harvester::extract::extract_chapter;
use gibraltar_tariff_harvester::html::html_to_text;
use gibraltar_tariff_harvester::output::{write_chapters_csv, write_hierarchy_csv};
use gibraltar_tariff_harvester::types::{ChapterExtraction, ChapterOutcome, TariffHarvest};
use pretty_assertions::assert_eq;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Run the extraction pipeline on the chapter 01 fixture.
fn run_pipeline() -> ChapterExtraction {
    let html = load_fixture("chapter_01.html");
    let text = html_to_text(&html);
    extract_chapter(&text, 1)
}

#[test]
fn test_pipeline_title() {
    let chapter = run_pipeline();
    assert_eq!(chapter.title, "CHAPTER 01 - LIVE ANIMALS");
}

#[test]
fn test_pipeline_record_count() {
    let chapter = run_pipeline();

    // The duplicated 0102210000-00-00 row is reported once.
    assert_eq!(
        chapter.records.len(),
        8,
        "Expected 8 records, got {:#?}",
        chapter.records
    );
}

#[test]
fn test_pipeline_codes_in_page_order() {
    let chapter = run_pipeline();
    let codes: Vec<&str> = chapter.records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "0101210000-00-00",
            "0101290000-00-00",
            "0101300000-00-00",
            "0101900000-00-00",
            "0102210000-00-00",
            "01023*0000-00-00",
            "0103100000-00-00",
            "0103910000-00-00",
        ]
    );
}

#[test]
fn test_pipeline_hierarchy_context() {
    let chapter = run_pipeline();

    let horses = &chapter.records[0];
    assert_eq!(horses.chapter, "01");
    assert_eq!(horses.heading, "0101");
    assert_eq!(
        horses.heading_description,
        "Live horses, asses, mules and hinnies"
    );
    assert_eq!(horses.subheading, "01012");
    assert_eq!(horses.subheading_description, "Horses:");
    assert_eq!(horses.description, "Pure-bred breeding animals");

    let buffalo = &chapter.records[5];
    assert_eq!(buffalo.heading, "0102");
    assert_eq!(buffalo.subheading, "01023");
    assert_eq!(buffalo.subheading_description, "Buffalo:");
    assert_eq!(buffalo.description, "All buffalo");

    let swine = &chapter.records[6];
    assert_eq!(swine.heading, "0103");
    assert_eq!(swine.heading_description, "Live swine");
    assert_eq!(swine.subheading, "");
}

#[test]
fn test_pipeline_descriptions() {
    let chapter = run_pipeline();

    // Next-line fallback
    assert_eq!(chapter.records[1].description, "Other");
    // En dash separator stripped
    assert_eq!(chapter.records[2].description, "Asses");
    // Colon separator stripped
    assert_eq!(chapter.records[4].description, "Pure-bred breeding animals");
    // Next line is another code, so no description
    assert_eq!(chapter.records[6].description, "");
}

#[test]
fn test_pipeline_subheadings_extend_headings() {
    let chapter = run_pipeline();
    for record in &chapter.records {
        assert!(
            record.subheading.is_empty() || record.subheading.starts_with(&record.heading),
            "subheading {} outside heading {}",
            record.subheading,
            record.heading
        );
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    assert_eq!(run_pipeline(), run_pipeline());
}

#[test]
fn test_pipeline_writes_tables() {
    let mut harvest = TariffHarvest::new();
    harvest.add_outcome(1, "01", ChapterOutcome::Harvested(run_pipeline()));
    harvest.add_outcome(1, "01", ChapterOutcome::Harvested(run_pipeline()));
    harvest.dedupe();

    let temp_dir = tempfile::tempdir().unwrap();
    let hierarchy_path = temp_dir.path().join("out").join("hierarchy.csv");
    let chapters_path = temp_dir.path().join("out").join("chapters.csv");

    write_hierarchy_csv(&hierarchy_path, &harvest.records).unwrap();
    write_chapters_csv(&chapters_path, &harvest.chapters).unwrap();

    let hierarchy = fs::read_to_string(&hierarchy_path).unwrap();
    let lines: Vec<&str> = hierarchy.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 9, "header plus 8 unique records");
    assert_eq!(
        lines[1],
        "01,0101,\"Live horses, asses, mules and hinnies\",01012,Horses:,0101210000-00-00,Pure-bred breeding animals"
    );

    let chapters = fs::read_to_string(&chapters_path).unwrap();
    assert!(chapters.starts_with("chapter,chapter_title\r\n01,CHAPTER 01 - LIVE ANIMALS\r\n"));
}

#[test]
fn test_pipeline_entity_line_breaks_split_heading() {
    let html = "<table><tr><td>0101&#13;Live horses</td>\
<td>0101210000-00-00 Pure-bred</td></tr>\
<tr><td>0102&#x2028;Live bovine animals</td>\
<td>0102210000-00-00 Bison</td></tr></table>";
    let chapter = extract_chapter(&html_to_text(html), 1);

    assert_eq!(chapter.records.len(), 2);
    assert_eq!(chapter.records[0].heading, "0101");
    assert_eq!(chapter.records[0].heading_description, "Live horses");
    assert_eq!(chapter.records[1].heading, "0102");
    assert_eq!(chapter.records[1].heading_description, "Live bovine animals");
}
