//! Per-page extraction — parse once, then run each extractor over the
//! top-level nodes of the event stream.

pub mod headings;
pub mod signatures;

use crate::config::SIGNATURE_LANG;
use crate::model::PageDoc;
use pulldown_cmark::{Event, Options, Parser};

/// Parse markdown (CommonMark plus the GFM tables/strikethrough/tasklist
/// extensions) into a flat event list.
pub fn parse(content: &str) -> Vec<Event<'_>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    Parser::new_ext(content, options).collect()
}

/// Split an event stream into its top-level nodes.
///
/// Each slice is either a single leaf event or a `Start` event through its
/// matching `End`.
pub fn top_level_nodes<'e, 'a>(events: &'e [Event<'a>]) -> Vec<&'e [Event<'a>]> {
    let mut nodes = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth == 0 {
            nodes.push(&events[start..=i]);
            start = i + 1;
        }
    }
    nodes
}

/// Run every extractor over one markdown page.
pub fn extract_page(content: &str) -> PageDoc {
    let events = parse(content);
    let headings = headings::extract(&events);
    let mut blocks = signatures::extract(&events);

    PageDoc {
        headers: headings.headers,
        signatures: blocks.shift_remove(SIGNATURE_LANG),
        module_name: headings.main_header,
    }
}
