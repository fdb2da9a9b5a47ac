//! Reconstruction of the tariff hierarchy from chapter text.

mod code;
mod hierarchy;
mod lines;

pub use code::{find_codes, starts_with_code, CodeMatch};
pub use hierarchy::{extract_chapter, extract_chapter_title, extract_hierarchy, HierarchyState};
pub use lines::split_lines;
