// src/catalog/model.rs
//! Catalog records.
//!
//! Everything here is built once per run and never mutated afterwards. The
//! JSON shape (camelCase keys, identifier fields flattened into the record)
//! is what downstream tooling reads.

use std::collections::{ BTreeMap, BTreeSet, HashSet };

use chrono::{ DateTime, Utc };
use serde::Serialize;

use crate::config::consts::PREFIX;
use crate::error::CatalogError;

/// `microsoft.<type>.<name>`; both parts are non-empty `[A-Za-z0-9_]+`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    prefixed_name: String,
    resource_type: String,
    original_name: String,
}

impl ResourceIdentifier {
    pub fn new(resource_type: &str, original_name: &str) -> Result<Self, CatalogError> {
        if !is_identifier_part(resource_type) || !is_identifier_part(original_name) {
            return Err(CatalogError::InvalidIdentifier(join!(resource_type, ".", original_name)));
        }
        Ok(Self {
            prefixed_name: join!(PREFIX, ".", resource_type, ".", original_name),
            resource_type: s!(resource_type),
            original_name: s!(original_name),
        })
    }

    /// Schema key form. Exactly three dot-separated parts, the first `microsoft`.
    pub fn parse(key: &str) -> Result<Self, CatalogError> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            [prefix, kind, name] if *prefix == PREFIX => Self::new(kind, name),
            _ => Err(CatalogError::InvalidIdentifier(s!(key))),
        }
    }

    pub fn prefixed_name(&self) -> &str { &self.prefixed_name }
    pub fn resource_type(&self) -> &str { &self.resource_type }
    pub fn original_name(&self) -> &str { &self.original_name }
}

pub fn is_identifier_part(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One permissions-table row. `permissions` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperationPermissionEntry {
    pub operation: String,
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    #[serde(flatten)]
    pub identifier: ResourceIdentifier,
    pub friendly_name: String,
    pub description: Option<String>,
    pub anchor_url: Option<String>,
    pub application_permissions: BTreeSet<String>,
    pub operation_permissions: Vec<OperationPermissionEntry>,
    pub last_updated: DateTime<Utc>,
}

impl ResourceRecord {
    pub fn prefixed_name(&self) -> &str { self.identifier.prefixed_name() }
    pub fn resource_type(&self) -> &str { self.identifier.resource_type() }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub generated_at: DateTime<Utc>,
    pub total_resources: usize,
    pub resource_types: Vec<String>,
    pub summary: BTreeMap<String, usize>,
    pub resources: Vec<ResourceRecord>,
}

impl Catalog {
    /// Sort by prefixed name, drop case-insensitive duplicates (first kept),
    /// count per type.
    pub fn from_records(records: Vec<ResourceRecord>, generated_at: DateTime<Utc>) -> Self {
        let mut seen = HashSet::new();
        let mut resources: Vec<ResourceRecord> = records
            .into_iter()
            .filter(|r| seen.insert(r.prefixed_name().to_lowercase()))
            .collect();
        resources.sort_by(|a, b| a.prefixed_name().cmp(b.prefixed_name()));

        let mut summary: BTreeMap<String, usize> = BTreeMap::new();
        for r in &resources {
            *summary.entry(s!(r.resource_type())).or_default() += 1;
        }

        Self {
            generated_at,
            total_resources: resources.len(),
            resource_types: summary.keys().cloned().collect(),
            summary,
            resources,
        }
    }
}
