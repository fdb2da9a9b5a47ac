//! Tariff code recognition.

use regex::Regex;
use std::sync::LazyLock;

/// Tariff code: ten digits, two digits, two digits, hyphen separated.
/// Any digit position may be a literal `*` wildcard.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9*]{10}-[0-9*]{2}-[0-9*]{2}\b").expect("valid regex"));

/// A tariff code found in a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeMatch<'a> {
    /// The matched code.
    pub code: &'a str,

    /// Text after the code up to the end of the line.
    pub rest: &'a str,
}

/// Find every tariff code in a line, left to right.
///
/// # Examples
/// ```
/// use gibraltar_tariff_harvester::extract::find_codes;
///
/// let codes: Vec<_> = find_codes("0101210000-00-00 Pure-bred").map(|m| m.code).collect();
/// assert_eq!(codes, vec!["0101210000-00-00"]);
/// ```
pub fn find_codes(line: &str) -> impl Iterator<Item = CodeMatch<'_>> {
    CODE_PATTERN.find_iter(line).map(move |m| CodeMatch {
        code: m.as_str(),
        rest: &line[m.end()..],
    })
}

/// Whether a tariff code begins at the very start of the line.
pub fn starts_with_code(line: &str) -> bool {
    CODE_PATTERN.find(line).is_some_and(|m| m.start() == 0)
}
