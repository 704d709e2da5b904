//! Web Page documents

use serde_json::json;

use super::{into_document, Document};
use crate::fields::FieldReader;
use crate::record::ContentRecord;
use crate::store::Lookups;
use crate::vocab::{web_page_context, WEB_PAGE_TYPE};

/// Format a Web Page record as JSON-LD
pub fn format(record: &ContentRecord, lookups: Lookups<'_>) -> Document {
    let f = FieldReader::new(record, lookups);

    into_document(json!({
        "@context": web_page_context(),
        "@id": f.node_alias(),
        "DLLid": f.scalar("field_dll_identifier"),
        "@type": WEB_PAGE_TYPE,
        "AccessDate": f.scalar("field_access_date"),
        "Title": f.scalar("field_record_title"),
        "Author": f.multi_value("field_creator"),
        "References": {
            "DLL Author": f.entity_reference_url("field_dll_creator"),
            "DLL Work": f.entity_reference_url("field_work_reference")
        },
        "Publisher": f.scalar("field_publisher"),
        "Repository": f.scalar("field_repository_source"),
        "Rights": f.scalar("field_rights"),
        "SourceEdition": f.scalar("field_source_edition"),
        "SourceURI": f.link_url("field_source_work")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::record::{ContentType, FieldValue, Link};
    use crate::vocab::CATALOG_BASE;
    use serde_json::Value;

    #[test]
    fn test_web_page() {
        let catalog = MemoryCatalog::new(CATALOG_BASE)
            .unwrap()
            .with_record(ContentRecord::new(1, ContentType::AuthorAuthority, "Ovid"))
            .with_alias("/node/1", "/authors/ovid")
            .with_alias("/node/40", "/web-pages/ovid-latin-library");
        let record = ContentRecord::new(40, ContentType::WebPage, "Ovid at The Latin Library")
            .field("field_access_date", FieldValue::Scalar("2019-06-01".into()))
            .field(
                "field_record_title",
                FieldValue::List(vec!["P. OVIDI NASONIS OPERA".into(), "ignored".into()]),
            )
            .field(
                "field_dll_creator",
                FieldValue::Reference {
                    targets: vec![1],
                    multiple: true,
                },
            )
            .field(
                "field_source_work",
                FieldValue::Link(vec![Link::new(
                    "https://www.thelatinlibrary.com/ovid.html",
                    None,
                )]),
            );
        let doc = Value::Object(format(&record, Lookups::from_catalog(&catalog)));

        assert_eq!(doc["@type"], "Web Page");
        assert_eq!(
            doc["@id"],
            "https://catalog.digitallatin.org/web-pages/ovid-latin-library"
        );
        assert_eq!(doc["AccessDate"], "2019-06-01");
        assert_eq!(doc["Title"], "P. OVIDI NASONIS OPERA");
        assert_eq!(doc["Author"], json!([]));
        assert_eq!(
            doc["References"]["DLL Author"],
            "https://catalog.digitallatin.org/authors/ovid"
        );
        assert_eq!(doc["References"]["DLL Work"], Value::Null);
        assert_eq!(doc["SourceURI"], "https://www.thelatinlibrary.com/ovid.html");
        assert_eq!(doc["SourceEdition"], Value::Null);
    }

    #[test]
    fn test_empty_web_page_keeps_shape() {
        let catalog = MemoryCatalog::new(CATALOG_BASE).unwrap();
        let record = ContentRecord::new(41, ContentType::WebPage, "Empty");
        let doc = format(&record, Lookups::from_catalog(&catalog));

        assert_eq!(doc.len(), 13);
        assert_eq!(doc["@id"], "https://catalog.digitallatin.org/node/41");
        assert!(doc.contains_key("DLLid"));
        assert!(doc["DLLid"].is_null());
    }
}
