//! belt-index — build the Belt API documentation indexes.
//!
//! Scans a directory of markdown pages and writes two JSON artifacts for the
//! documentation site:
//!
//! - **API index**: route → `{signatures, moduleName, headers}`
//! - **search index**: one entry per page with one item per `##` heading
//!
//! Two modes:
//!
//! - **index mode** (default): `belt-index` with the default paths, or
//!   `belt-index -d pages/belt_docs --api-index out/api.json ...`
//! - **stdin mode**: `belt-index --stdin < page.md` prints what would be
//!   extracted from a single page

mod config;
mod discover;
mod extract;
mod index;
mod logging;
mod model;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "belt-index",
    about = "Generate the API and search indexes from Belt markdown docs"
)]
struct Cli {
    /// Directory containing the *.md / *.mdx pages (not searched recursively)
    #[arg(short = 'd', long, default_value = config::DEFAULT_DOCS_DIR)]
    docs_dir: PathBuf,

    /// Output path of the API index
    #[arg(long, default_value = config::DEFAULT_API_INDEX)]
    api_index: PathBuf,

    /// Output path of the search index
    #[arg(long, default_value = config::DEFAULT_SEARCH_INDEX)]
    search_index: PathBuf,

    /// Route prefix joined with each page's file stem
    #[arg(long, default_value = config::DEFAULT_HREF_PREFIX)]
    href_prefix: String,

    /// Read a single page from stdin and print its extracted data
    #[arg(long)]
    stdin: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.stdin {
        return stdin_mode();
    }

    index_mode(&cli)
}

/// stdin mode: extract one page and print it as JSON to stdout.
fn stdin_mode() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let page = extract::extract_page(&input);
    let json = serde_json::to_string_pretty(&page).context("failed to serialize page")?;
    println!("{}", json);
    Ok(())
}

/// index mode: discover, extract every page, then write both indexes.
///
/// Nothing is written unless every page was read successfully.
fn index_mode(cli: &Cli) -> Result<()> {
    let files = discover::discover_markdown(&cli.docs_dir)?;
    info!(
        "found {} markdown files in {}",
        files.len(),
        cli.docs_dir.display()
    );
    if files.is_empty() {
        warn!("no markdown files in {}", cli.docs_dir.display());
    }

    let mut records = Vec::with_capacity(files.len());
    for path in &files {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        // Invalid UTF-8 becomes U+FFFD rather than failing the run.
        let content = String::from_utf8_lossy(&bytes);
        let page = extract::extract_page(&content);
        debug!(
            "{}: {} headers, {} signatures",
            path.display(),
            page.headers.len(),
            page.signatures.as_ref().map_or(0, Vec::len)
        );
        records.push(model::DocumentRecord {
            href: index::href_for(&cli.href_prefix, path),
            page,
        });
    }

    let api_index = index::build_api_index(&records);
    let search_index = index::build_search_index(&records);

    index::write_json(&cli.api_index, &api_index)?;
    index::write_json(&cli.search_index, &search_index)?;
    Ok(())
}
