//! Line splitting for page text.

/// Characters that end a line, besides `\r\n` which counts as one break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on every Unicode line boundary.
///
/// Besides `\n` and `\r\n` this breaks on a lone `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators. Text decoded from HTML entities such as `&#13;` can
/// carry any of these inside a single text node. A trailing break does not
/// produce an empty final line.
///
/// # Examples
/// ```
/// use gibraltar_tariff_harvester::extract::split_lines;
///
/// assert_eq!(split_lines("0101\rLive horses\r\n"), vec!["0101", "Live horses"]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
