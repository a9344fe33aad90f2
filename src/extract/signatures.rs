//! Signature block extraction.
//!
//! A signature block is a top-level fenced code block whose info string is
//! `re sig`. Its body is flattened onto one line for the index.

use super::top_level_nodes;
use crate::config::{SIGNATURE_LANG, SIGNATURE_META};
use indexmap::IndexMap;
use pulldown_cmark::{CodeBlockKind, Event, Tag};
use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static RE_AFTER_OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s+").unwrap());

static RE_BEFORE_CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\)").unwrap());

/// Formatted signature blocks keyed by language tag.
pub type CodeBlocks = IndexMap<String, Vec<String>>;

/// Collect every top-level signature block, formatted, in document order.
pub fn extract(events: &[Event<'_>]) -> CodeBlocks {
    let mut blocks = CodeBlocks::new();

    for node in top_level_nodes(events) {
        let info = match node.first() {
            Some(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))) => info,
            _ => continue,
        };
        let body = block_body(node);
        if body.is_empty() {
            continue;
        }
        let (lang, meta) = split_info(info);
        if lang == SIGNATURE_LANG && meta == Some(SIGNATURE_META) {
            blocks
                .entry(lang.to_string())
                .or_default()
                .push(format_signature(&body));
        }
    }

    blocks
}

/// Flatten a signature onto one line with single spacing and no padding
/// inside parentheses.
pub fn format_signature(raw: &str) -> String {
    let text = raw.replace('\n', " ");
    let text = RE_WHITESPACE.replace_all(&text, " ");
    let text = RE_AFTER_OPEN_PAREN.replace_all(&text, "(");
    RE_BEFORE_CLOSE_PAREN.replace_all(&text, ")").into_owned()
}

/// Split a fence info string into language tag and meta.
fn split_info(info: &str) -> (&str, Option<&str>) {
    let info = info.trim();
    match info.split_once(char::is_whitespace) {
        Some((lang, rest)) => {
            let meta = rest.trim();
            (lang, (!meta.is_empty()).then_some(meta))
        }
        None => (info, None),
    }
}

/// Code block text without the final line terminator.
fn block_body(node: &[Event<'_>]) -> String {
    let mut body = String::new();
    for event in node {
        if let Event::Text(text) = event {
            body.push_str(text);
        }
    }
    if body.ends_with('\n') {
        body.pop();
        if body.ends_with('\r') {
            body.pop();
        }
    }
    body
}
