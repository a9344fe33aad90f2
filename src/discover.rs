//! Markdown file discovery.

use crate::config::MARKDOWN_EXTENSIONS;
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Glob options: case-sensitive, and `*` never matches a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// List the markdown files directly inside `dir` (no recursion).
///
/// The result is sorted so repeated runs see the same order. A directory
/// that does not exist simply matches nothing.
pub fn discover_markdown(dir: &Path) -> Result<Vec<PathBuf>> {
    let base = Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();

    for ext in MARKDOWN_EXTENSIONS {
        let pattern = format!("{}/*.{}", base, ext);
        let entries = glob::glob_with(&pattern, MATCH_OPTIONS)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("failed to read directory: {}", dir.display()))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort_by(|a, b| locale_order(a, b));
    files.dedup();
    Ok(files)
}

/// Case-insensitive path order; on a tie lowercase sorts first
/// (`array.md`, `Array.md`, `zed.md`, `Zed.md`).
fn locale_order(a: &Path, b: &Path) -> Ordering {
    let a = a.to_string_lossy();
    let b = b.to_string_lossy();
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(&a))
}
