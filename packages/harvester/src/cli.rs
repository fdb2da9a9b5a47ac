//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{HarvestConfig, DEFAULT_CHAPTERS_OUTFILE, DEFAULT_HIERARCHY_OUTFILE};
use crate::error::Result;
use crate::harvester::{harvest_tariff, HarvestEvent};
use crate::output::{ensure_parent_dir, write_chapters_csv, write_hierarchy_csv};
use crate::types::TariffHarvest;

/// Export the complete Gibraltar harmonised tariff structure to CSV.
#[derive(Parser)]
#[command(name = "gibraltar-tariff-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output CSV file path for the complete hierarchy
    #[arg(long, default_value = DEFAULT_HIERARCHY_OUTFILE)]
    pub hierarchy_outfile: PathBuf,

    /// Output CSV file path for chapter names
    #[arg(long, default_value = DEFAULT_CHAPTERS_OUTFILE)]
    pub chapters_outfile: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    export_command(&cli.hierarchy_outfile, &cli.chapters_outfile)
}

/// Harvest all chapters and write both tables.
fn export_command(hierarchy_outfile: &Path, chapters_outfile: &Path) -> Result<()> {
    let config = HarvestConfig::default();

    let chapter_count = config.chapters.clone().count() as u64;
    let pb = ProgressBar::new(chapter_count);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} chapters")
            .expect("valid template"),
    );

    let harvest = harvest_tariff(&config, |event| {
        // suspend() keeps these lines visible when the bar is hidden (no TTY)
        pb.suspend(|| print_event(&event));
        if !matches!(event, HarvestEvent::Fetching { .. }) {
            pb.inc(1);
        }
    });
    pb.finish_and_clear();
    let harvest = harvest?;

    println!(
        "{} {}",
        style("Total codes collected:").bold(),
        harvest.records.len()
    );

    write_tables(hierarchy_outfile, chapters_outfile, &harvest)?;

    if !harvest.skipped.is_empty() {
        let codes: Vec<String> = harvest
            .skipped
            .iter()
            .map(|s| format!("{:02}", s.chapter))
            .collect();
        println!(
            "{} {}",
            style("Skipped chapters:").yellow().bold(),
            codes.join(", ")
        );
    }

    Ok(())
}

/// Write both tables, creating the output directories for both first.
fn write_tables(
    hierarchy_outfile: &Path,
    chapters_outfile: &Path,
    harvest: &TariffHarvest,
) -> Result<()> {
    ensure_parent_dir(hierarchy_outfile)?;
    ensure_parent_dir(chapters_outfile)?;

    write_hierarchy_csv(hierarchy_outfile, &harvest.records)?;
    println!(
        "{} {}",
        style("Wrote hierarchy CSV to").green().bold(),
        hierarchy_outfile.display()
    );

    write_chapters_csv(chapters_outfile, &harvest.chapters)?;
    println!(
        "{} {}",
        style("Wrote chapters CSV to").green().bold(),
        chapters_outfile.display()
    );

    Ok(())
}

/// Print one progress line for the operator.
fn print_event(event: &HarvestEvent<'_>) {
    match event {
        HarvestEvent::Fetching { code, .. } => {
            println!("Fetching chapter {}...", style(code).cyan());
        }
        HarvestEvent::Harvested { records, .. } => {
            println!("  -> found {} codes", style(records).green());
        }
        HarvestEvent::Skipped { code, error, .. } => {
            println!(
                "  {} {} for chapter {code}: {error}",
                style("!!").red().bold(),
                error.kind_label()
            );
        }
    }
}
