//! Author Authority documents

use serde_json::json;

use super::{into_document, Document};
use crate::fields::FieldReader;
use crate::record::ContentRecord;
use crate::store::Lookups;
use crate::vocab::{author_authority_context, AUTHOR_AUTHORITY_TYPE};

/// Format an Author Authority record as JSON-LD
///
/// Language variants are taken from the link titles of the national library
/// authority links, so the same link fields feed both `Name.Variant` and
/// `ExactExternalAuthority`.
pub fn format(record: &ContentRecord, lookups: Lookups<'_>) -> Document {
    let f = FieldReader::new(record, lookups);

    into_document(json!({
        "@context": author_authority_context(),
        "@id": f.node_alias(),
        "@type": AUTHOR_AUTHORITY_TYPE,
        "Name": {
            "AuthorizedName": f.scalar("field_authorized_name"),
            "Variant": {
                "AlsoKnownAs": f.multi_value("field_other_alternative_name_for"),
                "EnglishName": f.scalar("field_author_name_english"),
                "FrenchName": f.link_text("field_bnf_url"),
                "GermanName": f.link_text("field_dnb_url"),
                "ItalianName": f.link_text("field_iccu_url"),
                "SpanishName": f.link_text("field_bne_url"),
                "LatinName": f.scalar("field_author_name_latin"),
                "NativeLanguageVariant": f.scalar("field_author_name_native_languag"),
                "PerseusName": f.scalar("field_perseus_name")
            }
        },
        "Abbreviation": f.multi_value("field_author_name_abbreviations"),
        "Date": {
            "BirthDate": f.scalar("field_author_birth_date"),
            "DeathDate": f.scalar("field_author_death_date"),
            "Floruit": f.scalar("field_floruit_active"),
            "TimePeriod": f.term_name("field_time_period")
        },
        "identifier": {
            "CTS": f.scalar("field_cts_urn"),
            "DLLid": f.scalar("field_dll_identifier"),
            "LOCid": f.scalar("field_loc_id"),
            "PHIid": f.scalar("field_phi_number"),
            "STOAid": f.scalar("field_stoa_number"),
            "VIAFid": f.scalar("field_viaf_id")
        },
        "ExactExternalAuthority": {
            "BNE": f.link_url("field_bne_url"),
            "BNF": f.link_url("field_bnf_url"),
            "DNB": f.link_url("field_dnb_url"),
            "ICCU": f.link_url("field_iccu_url"),
            // ISNI reads field_iccu_url
            "ISNI": f.link_url("field_iccu_url"),
            "LCCN": f.link_url("field_locsource"),
            "LOC": f.link_url("field_lofc_uri"),
            "VIAF": f.link_url("field_viaf_source"),
            "Wikidata": f.link_url("field_wikidata_url"),
            "Wikipedia": f.link_url("field_wikipedia"),
            "Worldcat": f.link_url("field_worldcat_identity")
        }
    }))
}
