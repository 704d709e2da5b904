//! In-memory catalog backing the record, taxonomy and alias lookups
//!
//! A catalog is loaded once from a JSON dump (local file or URL) and then
//! shared read-only. The dump layout is:
//!
//! ```json
//! {
//!   "base_url": "https://catalog.digitallatin.org",
//!   "records": [{"id": 1, "bundle": "author_authorities", "title": "Ovid", "fields": {}}],
//!   "terms": [{"id": 3, "name": "Augustan"}],
//!   "aliases": {"/node/1": "/authors/ovid"}
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::error::JsonLdError;
use crate::record::{ContentRecord, ContentType, FieldValue, TaxonomyTerm};
use crate::store::{AliasResolver, RecordStore, TaxonomyStore};
use crate::vocab::CATALOG_BASE;

/// Field holding the external identifier used in public endpoints
pub const UNIQUE_ID_FIELD: &str = "field_unique_id";

#[derive(Debug, Deserialize)]
struct CatalogDump {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    records: Vec<ContentRecord>,
    #[serde(default)]
    terms: Vec<TaxonomyTerm>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Records, terms and aliases held in memory
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    base_url: Url,
    records: BTreeMap<u64, ContentRecord>,
    terms: BTreeMap<u64, TaxonomyTerm>,
    aliases: HashMap<String, String>,
    reverse_aliases: HashMap<String, String>,
}

impl MemoryCatalog {
    /// Empty catalog rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self, JsonLdError> {
        Ok(Self {
            base_url: with_trailing_slash(Url::parse(base_url)?),
            records: BTreeMap::new(),
            terms: BTreeMap::new(),
            aliases: HashMap::new(),
            reverse_aliases: HashMap::new(),
        })
    }

    pub fn set_base_url(&mut self, base_url: Url) {
        self.base_url = with_trailing_slash(base_url);
    }

    pub fn insert_record(&mut self, record: ContentRecord) {
        self.records.insert(record.id, record);
    }

    pub fn insert_term(&mut self, term: TaxonomyTerm) {
        self.terms.insert(term.id, term);
    }

    /// Map an internal path (`/node/<id>`) to a public alias path
    pub fn insert_alias(&mut self, internal_path: impl Into<String>, alias: impl Into<String>) {
        let internal_path = internal_path.into();
        let alias = alias.into();
        self.reverse_aliases
            .insert(alias.clone(), internal_path.clone());
        self.aliases.insert(internal_path, alias);
    }

    pub fn with_record(mut self, record: ContentRecord) -> Self {
        self.insert_record(record);
        self
    }

    pub fn with_term(mut self, id: u64, name: impl Into<String>) -> Self {
        self.insert_term(TaxonomyTerm {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_alias(mut self, internal_path: impl Into<String>, alias: impl Into<String>) -> Self {
        self.insert_alias(internal_path, alias);
        self
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Parse a catalog dump
    ///
    /// `origin` names the source in error messages.
    pub fn from_json(content: &str, origin: &str) -> Result<Self, JsonLdError> {
        let dump: CatalogDump =
            serde_json::from_str(content).map_err(|e| JsonLdError::LoadError {
                path: origin.to_string(),
                reason: format!("Invalid catalog JSON: {}", e),
            })?;

        let mut catalog = Self::new(dump.base_url.as_deref().unwrap_or(CATALOG_BASE))?;
        for record in dump.records {
            catalog.insert_record(record);
        }
        for term in dump.terms {
            catalog.insert_term(term);
        }
        for (internal_path, alias) in dump.aliases {
            catalog.insert_alias(internal_path, alias);
        }

        debug!(
            origin,
            records = catalog.records.len(),
            terms = catalog.terms.len(),
            aliases = catalog.aliases.len(),
            "Parsed catalog dump"
        );
        Ok(catalog)
    }
}

impl RecordStore for MemoryCatalog {
    fn load(&self, id: u64) -> Option<ContentRecord> {
        self.records.get(&id).cloned()
    }

    fn load_by_type_and_external_id(
        &self,
        content_type: ContentType,
        external_id: &str,
    ) -> Option<ContentRecord> {
        self.records
            .values()
            .find(|record| {
                record.bundle == content_type.bundle()
                    && matches!(
                        record.get(UNIQUE_ID_FIELD),
                        Some(FieldValue::Scalar(value)) if value == external_id
                    )
            })
            .cloned()
    }
}

impl TaxonomyStore for MemoryCatalog {
    fn load_term(&self, id: u64) -> Option<TaxonomyTerm> {
        self.terms.get(&id).cloned()
    }
}

impl AliasResolver for MemoryCatalog {
    fn resolve(&self, internal_path: &str) -> String {
        let alias = self
            .aliases
            .get(internal_path)
            .map(String::as_str)
            .unwrap_or(internal_path);
        absolute_url(&self.base_url, alias)
    }

    fn internal_path(&self, alias: &str) -> String {
        self.reverse_aliases
            .get(alias)
            .cloned()
            .unwrap_or_else(|| alias.to_string())
    }
}

/// Append a site-relative path to the catalog base path.
///
/// The path is never parsed as a URL reference, so an alias whose first
/// segment looks like a scheme (`/urn:cts:...`) stays under the base.
fn absolute_url(base: &Url, path: &str) -> String {
    let relative = path.trim_start_matches('/');
    let mut url = base.clone();
    url.set_path(&format!("{}{}", base.path(), relative));
    url.to_string()
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Check if a source string is a URL
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load a catalog dump from a local path or URL
pub fn load_catalog(source: &str) -> Result<MemoryCatalog, JsonLdError> {
    let content = if is_url(source) {
        info!(url = source, "Fetching catalog");
        fetch_url(source)?
    } else {
        read_file(Path::new(source))?
    };

    let catalog = MemoryCatalog::from_json(&content, source)?;
    info!(
        source,
        records = catalog.record_count(),
        "Loaded catalog"
    );
    Ok(catalog)
}

fn read_file(path: &Path) -> Result<String, JsonLdError> {
    if !path.is_file() {
        return Err(JsonLdError::LoadError {
            path: path.display().to_string(),
            reason: "No such catalog file".to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| JsonLdError::LoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Simple URL fetch
fn fetch_url(url: &str) -> Result<String, JsonLdError> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|e| JsonLdError::LoadError {
            path: url.to_string(),
            reason: format!("HTTP request failed: {}", e),
        })?
        .text()
        .map_err(|e| JsonLdError::LoadError {
            path: url.to_string(),
            reason: format!("Failed to read response: {}", e),
        })
}
