//! Content records as they come out of the catalog store
//!
//! A record is a bundle tag, a node id, a display title and a map of named
//! fields. A field that is missing from the map is absent; a field that is
//! present but holds zero entries is empty. The two are kept apart so the
//! accessors can decide between `null` and `[]` per field kind.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JsonLdError;

/// The four content types that have a JSON-LD template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    AuthorAuthority,
    Work,
    ItemRecord,
    WebPage,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::AuthorAuthority,
        ContentType::Work,
        ContentType::ItemRecord,
        ContentType::WebPage,
    ];

    /// Bundle name used by the content store
    pub fn bundle(self) -> &'static str {
        match self {
            ContentType::AuthorAuthority => "author_authorities",
            ContentType::Work => "dll_work",
            ContentType::ItemRecord => "repository_item",
            ContentType::WebPage => "web_page",
        }
    }

    /// Map a bundle name back to a content type
    pub fn from_bundle(bundle: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ct| ct.bundle() == bundle)
    }

    /// First path segment of the public JSON-LD endpoint
    pub fn route_segment(self) -> &'static str {
        match self {
            ContentType::AuthorAuthority => "dll-author",
            ContentType::Work => "dll-work",
            ContentType::ItemRecord => "dll-item-record",
            ContentType::WebPage => "dll-web-page",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bundle())
    }
}

impl FromStr for ContentType {
    type Err = JsonLdError;

    /// Accepts bundle names (`dll_work`) and short names (`work`, `item-record`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ct) = Self::from_bundle(s) {
            return Ok(ct);
        }
        match s {
            "author" | "author-authority" => Ok(ContentType::AuthorAuthority),
            "work" => Ok(ContentType::Work),
            "item" | "item-record" => Ok(ContentType::ItemRecord),
            "web-page" | "webpage" => Ok(ContentType::WebPage),
            other => Err(JsonLdError::UnknownContentType(other.to_string())),
        }
    }
}

/// A link entry: target URI plus optional display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub uri: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Link {
    pub fn new(uri: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            uri: uri.into(),
            title: title.map(str::to_string),
        }
    }
}

/// Value stored under a field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Single text value
    Scalar(String),
    /// Ordered multi-value text field
    List(Vec<String>),
    /// Link entries; readers use the first one
    Link(Vec<Link>),
    /// Taxonomy term ids; readers use the first one
    Term(Vec<u64>),
    /// Node ids of referenced records
    Reference {
        targets: Vec<u64>,
        /// Whether the field storage is declared multi-value
        #[serde(default)]
        multiple: bool,
    },
}

impl FieldValue {
    /// Number of stored entries
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Scalar(_) => 1,
            FieldValue::List(values) => values.len(),
            FieldValue::Link(links) => links.len(),
            FieldValue::Term(ids) => ids.len(),
            FieldValue::Reference { targets, .. } => targets.len(),
        }
    }

    /// A field is empty when it has zero entries; `Scalar("")` is not empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A stored catalog entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: u64,
    pub bundle: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl ContentRecord {
    pub fn new(id: u64, content_type: ContentType, title: impl Into<String>) -> Self {
        Self::with_bundle(id, content_type.bundle(), title)
    }

    /// Create a record with an arbitrary bundle tag
    pub fn with_bundle(id: u64, bundle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            bundle: bundle.into(),
            title: title.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Content type, or `None` for bundles without a template
    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_bundle(&self.bundle)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Internal path used for alias lookups
    pub fn internal_path(&self) -> String {
        node_path(self.id)
    }
}

/// Internal path of a node: `/node/<id>`
pub fn node_path(id: u64) -> String {
    format!("/node/{}", id)
}

/// Parse `/node/<id>` back into a node id
pub fn parse_node_path(path: &str) -> Option<u64> {
    path.strip_prefix("/node/")?.parse().ok()
}

/// Controlled-vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: u64,
    pub name: String,
}
