//! Work documents

use serde_json::json;

use super::{into_document, Document};
use crate::fields::FieldReader;
use crate::record::ContentRecord;
use crate::store::Lookups;
use crate::vocab::{work_context, WORK_TYPE};

/// Format a Work record as JSON-LD
pub fn format(record: &ContentRecord, lookups: Lookups<'_>) -> Document {
    let f = FieldReader::new(record, lookups);

    into_document(json!({
        "@context": work_context(),
        "@id": f.node_alias(),
        "@type": WORK_TYPE,
        "Title": f.scalar("field_work_name"),
        "Variant": {
            "VariantTitle": f.multi_value("field_alternative_title"),
            "ShortTitle": f.scalar("field_short_title")
        },
        "Abbreviation": f.scalar("field_work_abbreviated"),
        "Author": f.entity_reference_url("field_author"),
        "DubiousAttribution": {
            "AttributedName": f.multi_value("field_attributed_to"),
            "Dubious": f.term_name("field_dubious_spurious_attributi")
        },
        "HasPart": f.multi_value("field_has_part"),
        "PartOf": f.multi_value("field_part_of"),
        "Identifier": {
            "CTS-URN": f.scalar("field_cts_urn"),
            "DLLid": f.scalar("field_dll_identifier"),
            "PHIid": f.scalar("field_phi_number"),
            "STOAid": f.scalar("field_stoa_number")
        },
        "WorkAuthority": f.term_name("field_work_authority")
    }))
}
