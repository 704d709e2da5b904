//! Vocabulary definitions for catalog JSON-LD documents
//!
//! Each content type carries its own fixed `@context` table. The tables are
//! part of the wire contract and are reproduced exactly as published,
//! including the `dcterms` prefix that the Item Record, Work and Web Page
//! tables bind to the RDF namespace.

use serde_json::{json, Value};

/// Public base of the catalog site
pub const CATALOG_BASE: &str = "https://catalog.digitallatin.org";

/// Dublin Core terms namespace (only the Author Authority table uses it)
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";

/// RDF syntax namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// MADS/RDF namespace
pub const MADSRDF_NS: &str = "http://www.loc.gov/mads/rdf/v1#";

/// FRBR core namespace
pub const FRBR_NS: &str = "http://vocab.org/frbr/core#";

/// schema.org namespace
pub const SCHEMA_NS: &str = "http://schema.org/";

/// `@type` label of author authority documents
pub const AUTHOR_AUTHORITY_TYPE: &str = "Author Authority";

/// `@type` label of work documents
pub const WORK_TYPE: &str = "DLL Work";

/// `@type` label of item record documents
pub const ITEM_RECORD_TYPE: &str = "Item Record";

/// `@type` label of web page documents
pub const WEB_PAGE_TYPE: &str = "Web Page";

/// Typed-reference term descriptor: `{"@id": term, "@type": "@id"}`
fn id_reference(term: &str) -> Value {
    json!({
        "@id": term,
        "@type": "@id"
    })
}

/// Context for Author Authority documents
pub fn author_authority_context() -> Value {
    json!({
        "@base": "https://catalog.digitallatin.org/",
        "Abbreviation": "madsrdf:hasAbbreviationVariant",
        "AlsoKnownAs": "madsrdf:variantLabel",
        "AuthorizedName": "madsrdf:authoritativeLabel",
        "BNE": "rdf:resource",
        "BNF": "rdf:resource",
        "BirthDate": "madsrdf:birthDate",
        "CTS": "madsrdf:idValue",
        "DLLid": "madsrdf:idValue",
        "DNB": "rdf:resource",
        "Date": "dcmi:date",
        "DeathDate": "madsrdf:deathDate",
        "EnglishName": "madsrdf:variantLabel",
        "ExactExternalAuthority": id_reference("madsrdf:hasExactExternalAuthority"),
        "Floruit": "madsrdf:temporal",
        "FrenchName": "madsrdf:variantLabel",
        "GermanName": "madsrdf:variantLabel",
        "ICCU": "rdf:resource",
        "ISNI": "rdf:resource",
        "ISNIName": "madsrdf:variantLabel",
        "Identifier": id_reference("madsrdf:Identifier"),
        "ItalianName": "madsrdf:variantLabel",
        "LCCN": "rdf:resource",
        "LOC": "rdf:resource",
        "LOCid": "madsrdf:idValue",
        "LatinVariant": "madsrdf:variantLabel",
        "Name": "madsrdf:PersonalName",
        "NativeLanguageVariant": "madsrdf:variantLabel",
        "PHIid": "madsrdf:idValue",
        "PerseusName": "madsrdf:variantLabel",
        "STOAid": "madsrdf:idValue",
        "SpanishName": "madsrdf:variantLabel",
        "TimePeriod": "dcterms:coverage",
        "VIAF": "rdf:resource",
        "VIAFid": "madsrdf:idValue",
        "Variant": "madsrdf:hasVariant",
        "Wikidata": "rdf:resource",
        "WorldCat": "rdf:resource",
        "dcterms": DCTERMS_NS,
        "madsrdf": MADSRDF_NS,
        "rdf": RDF_NS
    })
}

/// Context for Work documents
pub fn work_context() -> Value {
    json!({
        "@base": "https://catalog.digitallatin.org/",
        "Abbreviation": "madsrdf:hasAbbreviationVariant",
        "Author": "dcterms:creator",
        "AuthorName": id_reference("madsrdf:PersonalName"),
        "AuthorizedName": "madsrdf:authoritativeLabel",
        "CTS-ID": "madsrdf:idValue",
        "CTS-URN": "madsrdf:idValue",
        "DLLid": "madsrdf:idValue",
        "Dubious": "madsrdf:hasChararacteristic",
        "DubiousAttribution": id_reference("dcterms:description"),
        "HasPart": "dcterms:hasPart",
        "Identifier": id_reference("madsrdf:Identifier"),
        "PHIid": "madsrdf:idValue",
        "PartOf": "dcterms:isPartOf",
        "References": "dcterms:references",
        "STOAid": "madsrdf:idValue",
        "Title": "madsrdf:Title",
        "Variant": "madsrdf:hasVariant",
        "VariantTitle": "madsrdf:variantLabel",
        "ShortTitle": "madsrdf:variantLabel",
        "WorkAuthority": "madsrdf:isMemberOfMADSCollection",
        "dcterms": RDF_NS,
        "madsrdf": MADSRDF_NS,
        "rdf": RDF_NS
    })
}

/// Context for Item Record documents
pub fn item_record_context() -> Value {
    json!({
        "@base": CATALOG_BASE,
        "Author": "dcterms:creator",
        "DLL Author": "dcterms:creator",
        "DLL Editor": "dcterms:contributor",
        "DLL Work": "frbr:exemplarOf",
        "DLLid": "dcterms:identifier",
        "Date": "dcterms:date",
        "Editor": "dcterms:contributor",
        "Format": "dcterms:format",
        "Place": "schema:City",
        "Publisher": "dcterms:publisher",
        "References": id_reference("dcterms:references"),
        "Repository": "schema:Library",
        "Rights": "dcterms:rights",
        "SourceURI": "dcterms:URI",
        "Title": "dcterms:title",
        "Type": "dcterms:type",
        "Coverage": "dcterms:coverage",
        "dcterms": RDF_NS,
        "frbr": FRBR_NS,
        "madsrdf": MADSRDF_NS,
        "rdf": RDF_NS,
        "schema": SCHEMA_NS
    })
}

/// Context for Web Page documents
pub fn web_page_context() -> Value {
    json!({
        "@base": CATALOG_BASE,
        "AccessDate": "dcterms:date",
        "Author": "dcterms:creator",
        "DLL Author": "frbr:Creator",
        "DLL Work": "frbr:exemplarOf",
        "DLLid": "dcterms:identifier",
        "Publisher": "dcterms:publisher",
        "References": id_reference("dcterms:references"),
        "Repository": "schema:WebSite",
        "Rights": "dcterms:rights",
        "SourceEdition": "dcterms:source",
        "SourceURI": "dcterms:URI",
        "Title": "dcterms:title",
        "dcterms": RDF_NS,
        "frbr": FRBR_NS,
        "madsrdf": MADSRDF_NS,
        "rdf": RDF_NS,
        "schema": SCHEMA_NS
    })
}
