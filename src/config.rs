//! Fixed names and default locations used by the indexer.

/// Markdown input directory, relative to the site root.
pub const DEFAULT_DOCS_DIR: &str = "pages/belt_docs";

/// Lookup index consumed by the site's API pages.
pub const DEFAULT_API_INDEX: &str = "index_data/belt_api_index.json";

/// Flattened per-heading index consumed by client-side search.
pub const DEFAULT_SEARCH_INDEX: &str = "index_data/belt_search_index.json";

/// Route prefix joined with each file stem, e.g. `belt_docs/array`.
pub const DEFAULT_HREF_PREFIX: &str = "belt_docs";

/// File extensions picked up by discovery.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Language tag of a signature block (```` ```re sig ````).
pub const SIGNATURE_LANG: &str = "re";

/// Meta annotation of a signature block.
pub const SIGNATURE_META: &str = "sig";
