//! Module name and section heading extraction.

use super::top_level_nodes;
use pulldown_cmark::{Event, HeadingLevel, Tag};

/// Headings found on a page.
///
/// A heading whose first inline child carries no literal text (emphasis,
/// link, image, ...) is recorded as `None`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Headings {
    /// Level-2 heading texts, in document order.
    pub headers: Vec<Option<String>>,
    /// Text of the last level-1 heading with content.
    pub main_header: Option<String>,
}

/// Collect top-level level-1 and level-2 headings.
///
/// Only the first inline child of a heading counts: `## map / mapU` yields
/// `map / mapU`, `## *map* / mapU` yields `None`. Headings without inline
/// content are skipped.
pub fn extract(events: &[Event<'_>]) -> Headings {
    let mut headings = Headings::default();

    for node in top_level_nodes(events) {
        let level = match node.first() {
            Some(Event::Start(Tag::Heading { level, .. })) => *level,
            _ => continue,
        };
        // Strip the heading's own Start/End pair.
        let inline = &node[1..node.len() - 1];
        if inline.is_empty() {
            continue;
        }
        let text = first_inline_text(inline);
        match level {
            HeadingLevel::H1 => headings.main_header = text,
            HeadingLevel::H2 => headings.headers.push(text),
            _ => {}
        }
    }

    headings
}

/// Literal text of the first inline child in a heading's content.
fn first_inline_text(inline: &[Event<'_>]) -> Option<String> {
    match inline.first()? {
        Event::Text(_) | Event::SoftBreak => {
            // The parser may split one text run into several events.
            let mut text = String::new();
            for event in inline {
                match event {
                    Event::Text(t) => text.push_str(t),
                    Event::SoftBreak => text.push('\n'),
                    _ => break,
                }
            }
            Some(text)
        }
        Event::Code(code) => Some(code.to_string()),
        Event::InlineHtml(html) | Event::Html(html) => Some(html.to_string()),
        _ => None,
    }
}
