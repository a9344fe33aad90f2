//! Data model for extracted documentation pages.

use serde::Serialize;

/// Everything extracted from a single markdown page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDoc {
    /// Level-2 heading texts, in document order. `None` (serialized as
    /// `null`) for a heading that starts with non-literal content.
    pub headers: Vec<Option<String>>,
    /// Formatted signature blocks. `None` when the page has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<String>>,
    /// Text of the last level-1 heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
}

/// A page together with the route it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Route without the leading slash, e.g. `belt_docs/array`.
    pub href: String,
    pub page: PageDoc,
}
