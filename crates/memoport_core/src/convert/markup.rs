//! HTML-like memo markup to plain text.

use scraper::Html;

/// Extracts visible text from markup.
///
/// Every text node is kept in document order and joined with `\n`; each
/// newline in the result is then doubled so paragraphs are separated by a
/// blank line. Formatting, links and images are dropped.
pub fn markup_to_plain_text(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(markup);
    let joined = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join("\n");
    joined.replace('\n', "\n\n")
}
