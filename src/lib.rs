//! Digital Latin Library JSON-LD Library
//!
//! This library renders catalog records (author authorities, works, item
//! records and web pages) as JSON-LD documents, and serves them over HTTP.
//!
//! # Overview
//!
//! Each content type has a fixed template: a static `@context`, a `@type`
//! label and a recipe mapping record fields into nested output keys. Field
//! values are normalized by the accessors in [`fields`]:
//!
//! 1. Scalars come out as a string or `null`
//! 2. Multi-value fields come out as a list, `[]` when absent
//! 3. Link fields are split into URI and display text
//! 4. Taxonomy references are resolved to term names
//! 5. Entity references are resolved to the canonical URLs of their targets
//!
//! The shape of a document never depends on which fields are populated.
//!
//! # Usage
//!
//! ```ignore
//! use dll_jsonld::{dispatch, load_catalog, to_json_string, ContentType, Lookups, RecordStore};
//!
//! let catalog = load_catalog("catalog.json")?;
//! let record = catalog
//!     .load_by_type_and_external_id(ContentType::Work, "W0959-001")
//!     .unwrap();
//! let doc = dispatch(&record, Lookups::from_catalog(&catalog));
//!
//! println!("{}", to_json_string(&doc, true)?);
//! ```

// The context tables are large json! literals
#![recursion_limit = "256"]

pub mod catalog;
pub mod error;
pub mod fields;
pub mod format;
pub mod record;
pub mod server;
pub mod store;
pub mod vocab;

// Re-export main types for convenience
pub use crate::catalog::{load_catalog, MemoryCatalog};
pub use crate::error::JsonLdError;
pub use crate::fields::{FieldReader, LinkPart, ReferencePart, TermPart};
pub use crate::format::{dispatch, to_json_string, Document};
pub use crate::record::{ContentRecord, ContentType, FieldValue, Link, TaxonomyTerm};
pub use crate::server::{build_router, serve, AppState};
pub use crate::store::{AliasResolver, Lookups, RecordStore, TaxonomyStore};
