//! Collaborator interfaces the formatters read through
//!
//! The formatting core never owns data. Referenced records, taxonomy terms
//! and public aliases are all looked up through these traits, bundled into a
//! [`Lookups`] value that callers pass in.

use crate::record::{ContentRecord, ContentType, TaxonomyTerm};

/// Trait for loading content records
pub trait RecordStore {
    /// Load a record by node id
    fn load(&self, id: u64) -> Option<ContentRecord>;

    /// Load the record of the given type whose `field_unique_id` matches
    fn load_by_type_and_external_id(
        &self,
        content_type: ContentType,
        external_id: &str,
    ) -> Option<ContentRecord>;
}

/// Trait for loading taxonomy terms
pub trait TaxonomyStore {
    fn load_term(&self, id: u64) -> Option<TaxonomyTerm>;
}

/// Trait mapping internal paths to public URLs
pub trait AliasResolver {
    /// Resolve an internal path (`/node/<id>`) to its canonical absolute URL
    fn resolve(&self, internal_path: &str) -> String;

    /// Reverse lookup: public alias path to internal path.
    /// Returns the input unchanged when no alias matches.
    fn internal_path(&self, alias: &str) -> String {
        alias.to_string()
    }
}

/// The read-only lookups a formatting pass may use
#[derive(Clone, Copy)]
pub struct Lookups<'a> {
    pub records: &'a dyn RecordStore,
    pub terms: &'a dyn TaxonomyStore,
    pub aliases: &'a dyn AliasResolver,
}

impl<'a> Lookups<'a> {
    pub fn new(
        records: &'a dyn RecordStore,
        terms: &'a dyn TaxonomyStore,
        aliases: &'a dyn AliasResolver,
    ) -> Self {
        Self {
            records,
            terms,
            aliases,
        }
    }

    /// Use one value for all three lookups
    pub fn from_catalog<C>(catalog: &'a C) -> Self
    where
        C: RecordStore + TaxonomyStore + AliasResolver,
    {
        Self::new(catalog, catalog, catalog)
    }
}
