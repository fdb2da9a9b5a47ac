//! Gibraltar Tariff Harvester - Export the HM Customs Gibraltar tariff to CSV.
//!
//! This crate downloads the printed chapters of the Gibraltar customs tariff,
//! rebuilds the chapter → heading → subheading → code hierarchy from the page
//! text, and writes it out as two CSV tables.
//!
//! # Example
//!
//! ```
//! use gibraltar_tariff_harvester::extract::extract_chapter;
//!
//! let text = "CHAPTER 01 - LIVE ANIMALS\n0101\nLive horses\n0101210000-00-00 Pure-bred";
//! let chapter = extract_chapter(text, 1);
//! assert_eq!(chapter.title, "CHAPTER 01 - LIVE ANIMALS");
//! assert_eq!(chapter.records[0].heading_description, "Live horses");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (TariffRecord, ChapterTitle, etc.)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for the tariff portal
//! - [`html`]: HTML to line text conversion
//! - [`page`]: Chapter page downloading
//! - [`extract`]: Hierarchy reconstruction from chapter text
//! - [`output`]: CSV output
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvester service

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod harvester;
pub mod html;
pub mod http;
pub mod output;
pub mod page;
pub mod types;

// Re-export main functions
pub use harvester::{harvest_tariff, harvest_with_client, HarvestEvent};

// Re-export commonly used items
pub use config::HarvestConfig;
pub use error::{HarvesterError, Result};
pub use types::{ChapterTitle, TariffHarvest, TariffRecord};
