//! Projection of a markdown document onto the plain text of its headings.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Returns the plain text of every heading in `content`, in document order.
///
/// All heading levels, ATX and setext, are included and the level is
/// dropped. Inline formatting is stripped while the text underneath it is
/// kept; raw inline html is skipped and line breaks become a single space.
/// Markdown never fails to parse, so malformed input is handled best
/// effort and a document without headings yields an empty vector.
pub fn extract_headings(content: &str) -> Vec<String> {
    let mut headings = vec![];
    let mut current: Option<String> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                current = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(text) = current.take() {
                    headings.push(text.trim().to_string());
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}
