//! CSV output for the hierarchy and chapter tables.
//!
//! Files use comma delimiters, minimal quoting and CRLF record terminators.
//! The header row is always written, also for an empty table.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::{ChapterTitle, TariffRecord, CHAPTER_COLUMNS, HIERARCHY_COLUMNS};

/// Serialize rows under a fixed header into CSV bytes.
fn to_csv<T: Serialize>(columns: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }

    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write bytes to `path` atomically.
///
/// Writes to a temp file next to the target, syncs to disk, then renames.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}

/// Write the hierarchy table.
pub fn write_hierarchy_csv(path: &Path, records: &[TariffRecord]) -> Result<()> {
    let content = to_csv(&HIERARCHY_COLUMNS, records)?;
    write_atomic(path, &content)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "Wrote hierarchy CSV");
    Ok(())
}

/// Write the chapter title table.
pub fn write_chapters_csv(path: &Path, chapters: &[ChapterTitle]) -> Result<()> {
    let content = to_csv(&CHAPTER_COLUMNS, chapters)?;
    write_atomic(path, &content)?;
    tracing::debug!(path = %path.display(), rows = chapters.len(), "Wrote chapters CSV");
    Ok(())
}
