//! Index assembly and output.
//!
//! Folds per-page records into the two artifacts the site loads: an API
//! lookup keyed by route and a flat per-heading search index.

use crate::model::DocumentRecord;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Route → page metadata, in discovery order.
pub type ApiIndex = IndexMap<String, ApiIndexEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIndexEntry {
    pub signatures: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    pub headers: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    pub href: String,
    pub content: Vec<SearchContent>,
}

/// One searchable heading. `signature` and `js` are always empty; `reason`
/// is omitted for a heading without literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub signature: String,
    pub js: Vec<String>,
}

impl SearchContent {
    fn for_header(header: Option<&str>) -> Self {
        Self {
            reason: header.map(str::to_string),
            signature: String::new(),
            js: Vec::new(),
        }
    }
}

/// Route for a page: `<prefix>/<file stem>`.
/// "pages/belt_docs/array.md" with prefix "belt_docs" → "belt_docs/array"
pub fn href_for(prefix: &str, path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        stem
    } else {
        format!("{}/{}", prefix, stem)
    }
}

/// Build the API index. A later page with the same route replaces the
/// earlier one but keeps its position.
pub fn build_api_index(records: &[DocumentRecord]) -> ApiIndex {
    let mut index = ApiIndex::with_capacity(records.len());
    for record in records {
        let key = format!("/{}", record.href);
        let entry = ApiIndexEntry {
            signatures: record.page.signatures.clone().unwrap_or_default(),
            module_name: record.page.module_name.clone(),
            headers: record.page.headers.clone(),
        };
        if index.insert(key.clone(), entry).is_some() {
            warn!("duplicate route {}, keeping the last page", key);
        }
    }
    index
}

/// Build the search index, one entry per page in discovery order.
pub fn build_search_index(records: &[DocumentRecord]) -> Vec<SearchIndexEntry> {
    records
        .iter()
        .map(|record| SearchIndexEntry {
            module_name: record.page.module_name.clone(),
            href: format!("/{}", record.href),
            content: record
                .page
                .headers
                .iter()
                .map(|h| SearchContent::for_header(h.as_deref()))
                .collect(),
        })
        .collect()
}

/// Serialize `value` as compact JSON, overwriting `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageDoc;
    use tempfile::TempDir;

    fn record(href: &str, module: Option<&str>, headers: &[&str]) -> DocumentRecord {
        DocumentRecord {
            href: href.to_string(),
            page: PageDoc {
                headers: headers.iter().map(|h| Some(h.to_string())).collect(),
                signatures: None,
                module_name: module.map(str::to_string),
            },
        }
    }

    #[test]
    fn href_from_path() {
        assert_eq!(
            href_for("belt_docs", Path::new("pages/belt_docs/array.md")),
            "belt_docs/array"
        );
        assert_eq!(href_for("belt_docs/", Path::new("list.mdx")), "belt_docs/list");
        assert_eq!(href_for("", Path::new("docs/map.md")), "map");
        assert_eq!(
            href_for("belt_docs", Path::new("docs/hash.map.md")),
            "belt_docs/hash.map"
        );
    }

    #[test]
    fn api_index_keys_and_defaults() {
        let mut a = record("belt_docs/a", Some("Belt.A"), &["f1", "f2"]);
        a.page.signatures = Some(vec!["let f1: int;".to_string()]);
        let b = record("belt_docs/b", Some("Belt.B"), &[]);

        let index = build_api_index(&[a, b]);
        let keys: Vec<_> = index.keys().map(String::as_str).collect();
        assert_eq!(keys, ["/belt_docs/a", "/belt_docs/b"]);
        assert_eq!(
            index["/belt_docs/a"].headers,
            [Some("f1".to_string()), Some("f2".to_string())]
        );
        assert_eq!(index["/belt_docs/a"].signatures, ["let f1: int;"]);
        assert_eq!(index["/belt_docs/b"].module_name.as_deref(), Some("Belt.B"));
        assert!(index["/belt_docs/b"].signatures.is_empty());
    }

    #[test]
    fn duplicate_route_keeps_first_position_last_value() {
        let records = [
            record("belt_docs/a", Some("First"), &[]),
            record("belt_docs/b", None, &[]),
            record("belt_docs/a", Some("Second"), &[]),
        ];
        let index = build_api_index(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get_index(0).unwrap().0, "/belt_docs/a");
        assert_eq!(index["/belt_docs/a"].module_name.as_deref(), Some("Second"));
    }

    #[test]
    fn search_index_content_placeholders() {
        let records = [
            record("belt_docs/a", Some("Belt.A"), &["f1", "f2"]),
            record("belt_docs/b", Some("Belt.B"), &[]),
        ];
        let search = build_search_index(&records);
        assert_eq!(search.len(), 2);
        assert_eq!(search[0].href, "/belt_docs/a");
        assert_eq!(search[0].content.len(), 2);
        assert_eq!(search[1].content.len(), 0);
        for item in &search[0].content {
            assert_eq!(item.signature, "");
            assert!(item.js.is_empty());
        }
        assert_eq!(search[0].content[1].reason.as_deref(), Some("f2"));
    }

    #[test]
    fn json_shape_omits_missing_module_name() {
        let records = [record("belt_docs/a", None, &["f1"])];
        let api = serde_json::to_string(&build_api_index(&records)).unwrap();
        let search = serde_json::to_string(&build_search_index(&records)).unwrap();
        assert_eq!(api, r#"{"/belt_docs/a":{"signatures":[],"headers":["f1"]}}"#);
        assert_eq!(
            search,
            r#"[{"href":"/belt_docs/a","content":[{"reason":"f1","signature":"","js":[]}]}]"#
        );
    }

    #[test]
    fn header_without_text_is_null_and_has_no_reason() {
        let mut a = record("belt_docs/a", Some("Belt.A"), &["f1"]);
        a.page.headers.push(None);
        let records = [a];

        let api = serde_json::to_string(&build_api_index(&records)).unwrap();
        let search = serde_json::to_string(&build_search_index(&records)).unwrap();
        assert!(api.contains(r#""headers":["f1",null]"#));
        assert!(search.contains(r#"{"signature":"","js":[]}"#));
    }

    #[test]
    fn empty_indexes_serialize_as_empty_json() {
        let dir = TempDir::new().unwrap();
        let api_path = dir.path().join("api.json");
        let search_path = dir.path().join("search.json");

        write_json(&api_path, &build_api_index(&[])).unwrap();
        write_json(&search_path, &build_search_index(&[])).unwrap();

        assert_eq!(fs::read_to_string(api_path).unwrap(), "{}");
        assert_eq!(fs::read_to_string(search_path).unwrap(), "[]");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/api.json");
        let err = write_json(&path, &build_api_index(&[])).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
