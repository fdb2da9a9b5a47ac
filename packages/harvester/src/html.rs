//! Conversion of rendered tariff pages to line-oriented text.

use scraper::{Html, Node};

/// Elements whose text content is never shown to a reader.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Extract the visible text of an HTML document, one text node per line.
///
/// Every text node is trimmed; empty ones are dropped. Comments, the doctype
/// and the content of script-like elements are skipped.
///
/// # Examples
/// ```
/// use gibraltar_tariff_harvester::html::html_to_text;
///
/// let html = "<table><tr><td> 0101 </td><td>Live horses</td></tr></table>";
/// assert_eq!(html_to_text(html), "0101\nLive horses");
/// ```
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node
            .ancestors()
            .filter_map(|ancestor| ancestor.value().as_element())
            .any(|element| HIDDEN_ELEMENTS.contains(&element.name()));
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_splits_blocks() {
        let html = r#"<html><head><title>Tariff</title></head>
<body>
  <h1>CHAPTER 01 - LIVE ANIMALS</h1>
  <div>0101</div>
  <div>Live horses, asses, mules and hinnies</div>
</body></html>"#;
        assert_eq!(
            html_to_text(html),
            "Tariff\nCHAPTER 01 - LIVE ANIMALS\n0101\nLive horses, asses, mules and hinnies"
        );
    }

    #[test]
    fn test_html_to_text_skips_scripts_and_comments() {
        let html = r#"<body><script>var x = 1;</script><style>p { color: red }</style>
<!-- hidden --><p>visible</p></body>"#;
        assert_eq!(html_to_text(html), "visible");
    }

    #[test]
    fn test_html_to_text_keeps_noscript_text() {
        let html = "<body><noscript>Enable JavaScript</noscript><template><p>x</p></template><p>0101</p></body>";
        assert_eq!(html_to_text(html), "Enable JavaScript\n0101");
    }

    #[test]
    fn test_html_to_text_keeps_decoded_line_breaks() {
        let html = "<td>0101&#13;Live horses</td>";
        assert_eq!(html_to_text(html), "0101\rLive horses");
    }

    #[test]
    fn test_html_to_text_decodes_entities() {
        let html = "<p>Fish &amp; crustaceans&nbsp;</p>";
        assert_eq!(html_to_text(html), "Fish & crustaceans");
    }

    #[test]
    fn test_html_to_text_inline_elements_become_separate_lines() {
        let html = "<td>0101210000-00-00 <b>Pure-bred</b> breeding animals</td>";
        assert_eq!(
            html_to_text(html),
            "0101210000-00-00\nPure-bred\nbreeding animals"
        );
    }

    #[test]
    fn test_html_to_text_empty_document() {
        assert_eq!(html_to_text(""), "");
    }
}
