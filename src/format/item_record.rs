//! Item Record documents

use serde_json::json;

use super::{into_document, Document};
use crate::fields::{FieldReader, ReferencePart};
use crate::record::ContentRecord;
use crate::store::Lookups;
use crate::vocab::{item_record_context, ITEM_RECORD_TYPE};

/// Format an Item Record as JSON-LD
pub fn format(record: &ContentRecord, lookups: Lookups<'_>) -> Document {
    let f = FieldReader::new(record, lookups);

    into_document(json!({
        "@context": item_record_context(),
        "@id": f.node_alias(),
        "DLLid": f.scalar("field_dll_identifier"),
        "@type": ITEM_RECORD_TYPE,
        "Author": f.multi_value("field_creator"),
        "Title": f.multi_value("field_record_title"),
        "References": {
            "DLL Author": f.entity_reference_url("field_dll_creator"),
            "DLL Work": f.entity_reference_url("field_work_reference")
        },
        "Editor": f.entity_reference_field("field_dll_contributor", ReferencePart::Title),
        "Coverage": f.entity_reference_field("field_coverage", ReferencePart::Title),
        "Format": f.scalar("field_format"),
        "Place": f.scalar("field_place_of_publication"),
        "Publisher": f.scalar("field_publisher"),
        "Repository": f.scalar("field_repository_source"),
        "Rights": f.scalar("field_rights"),
        "SourceURI": f.link_url("field_source_work"),
        "Type": f.multi_value("field_type")
    }))
}
