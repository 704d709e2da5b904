//! Field accessors
//!
//! Each accessor reads one named field off a record and normalizes it into
//! the JSON shape the templates expect. Absent or empty fields never fail:
//! they become `None` (serialized as `null`) or an empty list, depending on
//! the accessor.
//!
//! The part-selecting accessors return small untagged enums so that the
//! serialized shape is fixed by the type: a resolved URL list with exactly
//! one entry serializes as a bare string, any other count as an array.

use serde::Serialize;

use crate::record::{node_path, ContentRecord, FieldValue, Link};
use crate::store::Lookups;

/// Which part of a link field to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPart {
    Url,
    Text,
    Both,
}

/// Which part of a taxonomy term to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPart {
    Id,
    Name,
}

/// Which part of a referenced record to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePart {
    Id,
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkValue {
    Url(String),
    Text(Option<String>),
    Both { url: String, text: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TermValue {
    Id(u64),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReferenceValue {
    Id(u64),
    Title(String),
}

/// Result of reading an entity reference field: scalar for single-value
/// storage, list for multi-value storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityRefs {
    Single(ReferenceValue),
    Multiple(Vec<ReferenceValue>),
}

/// Canonical URLs of referenced records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedUrls {
    One(String),
    Many(Vec<String>),
}

impl ResolvedUrls {
    /// Exactly one URL collapses to a scalar; zero or several stay a list
    pub fn from_urls(mut urls: Vec<String>) -> Self {
        if urls.len() == 1 {
            ResolvedUrls::One(urls.remove(0))
        } else {
            ResolvedUrls::Many(urls)
        }
    }
}

/// Reads fields off a single record
pub struct FieldReader<'a> {
    record: &'a ContentRecord,
    lookups: Lookups<'a>,
}

impl<'a> FieldReader<'a> {
    pub fn new(record: &'a ContentRecord, lookups: Lookups<'a>) -> Self {
        Self { record, lookups }
    }

    /// Present, non-empty field
    fn non_empty(&self, field: &str) -> Option<&'a FieldValue> {
        self.record.get(field).filter(|value| !value.is_empty())
    }

    /// First scalar value of a text field.
    ///
    /// An empty string is returned as-is; only a field with no entries is `None`.
    pub fn scalar(&self, field: &str) -> Option<String> {
        match self.non_empty(field)? {
            FieldValue::Scalar(value) => Some(value.clone()),
            FieldValue::List(values) => values.first().cloned(),
            _ => None,
        }
    }

    /// Every scalar of a multi-value field, in storage order
    pub fn multi_value(&self, field: &str) -> Vec<String> {
        match self.non_empty(field) {
            Some(FieldValue::Scalar(value)) => vec![value.clone()],
            Some(FieldValue::List(values)) => values.clone(),
            _ => Vec::new(),
        }
    }

    fn first_link(&self, field: &str) -> Option<&'a Link> {
        match self.non_empty(field)? {
            FieldValue::Link(links) => links.first(),
            _ => None,
        }
    }

    pub fn link_field(&self, field: &str, part: LinkPart) -> Option<LinkValue> {
        let link = self.first_link(field)?;
        Some(match part {
            LinkPart::Url => LinkValue::Url(link.uri.clone()),
            LinkPart::Text => LinkValue::Text(link.title.clone()),
            LinkPart::Both => LinkValue::Both {
                url: link.uri.clone(),
                text: link.title.clone(),
            },
        })
    }

    /// Shorthand for `link_field(field, LinkPart::Url)`
    pub fn link_url(&self, field: &str) -> Option<LinkValue> {
        self.link_field(field, LinkPart::Url)
    }

    /// Shorthand for `link_field(field, LinkPart::Text)`
    pub fn link_text(&self, field: &str) -> Option<LinkValue> {
        self.link_field(field, LinkPart::Text)
    }

    /// Resolve the first referenced taxonomy term
    pub fn taxonomy_field(&self, field: &str, part: TermPart) -> Option<TermValue> {
        let term_id = match self.non_empty(field)? {
            FieldValue::Term(ids) => *ids.first()?,
            _ => return None,
        };
        let term = self.lookups.terms.load_term(term_id)?;
        Some(match part {
            TermPart::Id => TermValue::Id(term.id),
            TermPart::Name => TermValue::Name(term.name),
        })
    }

    /// Shorthand for `taxonomy_field(field, TermPart::Name)`
    pub fn term_name(&self, field: &str) -> Option<TermValue> {
        self.taxonomy_field(field, TermPart::Name)
    }

    fn reference_targets(&self, field: &str) -> Option<(&'a [u64], bool)> {
        match self.non_empty(field)? {
            FieldValue::Reference { targets, multiple } => Some((targets.as_slice(), *multiple)),
            _ => None,
        }
    }

    /// Read ids or titles of referenced records.
    ///
    /// Multi-value fields yield a list that skips unresolvable targets;
    /// single-value fields yield the first target or `None`.
    pub fn entity_reference_field(&self, field: &str, part: ReferencePart) -> Option<EntityRefs> {
        let (targets, multiple) = self.reference_targets(field)?;
        let read = |id: &u64| {
            self.lookups.records.load(*id).map(|target| match part {
                ReferencePart::Id => ReferenceValue::Id(target.id),
                ReferencePart::Title => ReferenceValue::Title(target.title),
            })
        };

        if multiple {
            Some(EntityRefs::Multiple(targets.iter().filter_map(read).collect()))
        } else {
            targets.first().and_then(read).map(EntityRefs::Single)
        }
    }

    /// Canonical URLs of every resolvable referenced record
    pub fn entity_reference_url(&self, field: &str) -> Option<ResolvedUrls> {
        let (targets, _) = self.reference_targets(field)?;
        let urls = targets
            .iter()
            .filter_map(|id| self.lookups.records.load(*id))
            .map(|target| self.lookups.aliases.resolve(&node_path(target.id)))
            .collect();
        Some(ResolvedUrls::from_urls(urls))
    }

    /// The record's own canonical URL
    pub fn node_alias(&self) -> String {
        self.lookups.aliases.resolve(&self.record.internal_path())
    }
}
