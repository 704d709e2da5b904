//! JSON-LD formatting of catalog records
//!
//! One formatter per content type, selected by [`dispatch`]. Every formatter
//! produces the same key set for its type no matter which fields are
//! populated; missing data shows up as `null` or `[]`.

pub mod author;
pub mod item_record;
pub mod web_page;
pub mod work;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::JsonLdError;
use crate::record::{ContentRecord, ContentType};
use crate::store::Lookups;

/// A JSON-LD document, keys in template order
pub type Document = Map<String, Value>;

fn into_document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}

/// Format a record with the template for its content type
///
/// Records whose bundle has no template produce an empty document.
pub fn dispatch(record: &ContentRecord, lookups: Lookups<'_>) -> Document {
    match record.content_type() {
        Some(ContentType::AuthorAuthority) => author::format(record, lookups),
        Some(ContentType::Work) => work::format(record, lookups),
        Some(ContentType::ItemRecord) => item_record::format(record, lookups),
        Some(ContentType::WebPage) => web_page::format(record, lookups),
        None => {
            debug!(
                node = record.id,
                bundle = %record.bundle,
                "No JSON-LD template for bundle"
            );
            Document::new()
        }
    }
}

/// Serialize a document to a JSON string
pub fn to_json_string(doc: &Document, pretty: bool) -> Result<String, JsonLdError> {
    if pretty {
        Ok(serde_json::to_string_pretty(doc)?)
    } else {
        Ok(serde_json::to_string(doc)?)
    }
}
