// src/catalog/schema.rs
//! Schema mode: resources come from the keys of the schema's `$defs`.
//!
//! Names are resolved with the full precedence chain; the camelCase tier is
//! fed from the documentation pages, which also supply permissions for any
//! resource whose section can be found there.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;

use crate::catalog::docs::{ fetch_pages, section_permissions, FetchedPage };
use crate::catalog::model::{ Catalog, ResourceIdentifier, ResourceRecord };
use crate::config::sources::DocPage;
use crate::core::net::Fetch;
use crate::error::CatalogError;
use crate::naming::{ CamelCaseMap, NameResolver, NameSource };
use crate::progress::Progress;
use crate::specs::{ camel_case_map, find_section, PermissionSet };

const DEFINITIONS_KEY: &str = "$defs";

/// What a schema build left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// `$defs` keys that are not `microsoft.<type>.<name>`.
    pub skipped_keys: Vec<String>,
    /// Sources that could not be read.
    pub failed_sources: Vec<String>,
}

/// `pages` may be empty, in which case names come from overrides or the
/// algorithm only and records carry just the type rules' permissions.
pub fn build(
    fetcher: &dyn Fetch,
    schema_src: &str,
    pages: &[DocPage],
    resolver: NameResolver,
    progress: &mut dyn Progress,
) -> Result<(Catalog, BuildReport), CatalogError> {
    progress.begin(pages.len() + 1);
    let mut report = BuildReport::default();

    let fetched = fetch_pages(fetcher, pages, progress);
    report.failed_sources.extend(
        pages
            .iter()
            .filter(|p| !fetched.iter().any(|f| f.page.url == p.url))
            .map(|p| p.url.clone()),
    );
    let resolver = resolver.with_camel_case(collect_camel_case(&fetched));

    let schema = match fetcher.fetch_json(schema_src) {
        Ok(v) => {
            progress.item_done(schema_src);
            v
        }
        Err(e) => {
            tracing::warn!("skipping schema {schema_src}: {e}");
            progress.source_failed(schema_src, &e.to_string());
            report.failed_sources.push(s!(schema_src));
            progress.finish();
            return Ok((Catalog::from_records(Vec::new(), Utc::now()), report));
        }
    };

    let result = records_from_schema(&schema, &resolver, &fetched, &mut report);
    progress.finish();
    let records = result?;
    progress.log(&format!(
        "  {} resource(s) from schema, {} key(s) skipped",
        records.len(),
        report.skipped_keys.len()
    ));
    Ok((Catalog::from_records(records, Utc::now()), report))
}

/// Turn `$defs` entries into records. A schema without `$defs` is fatal;
/// malformed keys are skipped and listed in `report`.
pub fn records_from_schema(
    schema: &Value,
    resolver: &NameResolver,
    pages: &[FetchedPage],
    report: &mut BuildReport,
) -> Result<Vec<ResourceRecord>, CatalogError> {
    let defs = schema
        .get(DEFINITIONS_KEY)
        .and_then(Value::as_object)
        .ok_or(CatalogError::MissingDefinitions)?;

    let mut by_type: HashMap<&str, Vec<&FetchedPage>> = HashMap::new();
    for f in pages {
        by_type.entry(f.page.resource_type.as_str()).or_default().push(f);
    }
    let now = Utc::now();
    let mut records = Vec::with_capacity(defs.len());

    for (key, def) in defs {
        let identifier = match ResourceIdentifier::parse(key) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("skipping schema key: {e}");
                report.skipped_keys.push(key.clone());
                continue;
            }
        };

        let (friendly_name, source) = resolver.resolve(identifier.original_name());
        if source != NameSource::Algorithm {
            tracing::debug!("{} named from {source}: {friendly_name}", identifier.prefixed_name());
        }

        let key = identifier.original_name().to_lowercase();
        let page = by_type
            .get(identifier.resource_type())
            .and_then(|same_type| same_type.iter().find(|f| find_section(&f.html, &key).is_some()));
        let (permissions, anchor_url) = match page {
            Some(page) => section_permissions(page, &key),
            None => {
                let mut p = PermissionSet::default();
                p.apply_type_rules(identifier.resource_type());
                (p, None)
            }
        };

        records.push(ResourceRecord {
            identifier,
            friendly_name,
            description: def.get("description").and_then(Value::as_str).map(String::from),
            anchor_url,
            application_permissions: permissions.all,
            operation_permissions: permissions.operations,
            last_updated: now,
        });
    }
    Ok(records)
}

/* ---------- helpers ---------- */

/// Union of every page's map; an id seen on an earlier page keeps its text.
fn collect_camel_case(pages: &[FetchedPage]) -> CamelCaseMap {
    let mut merged = CamelCaseMap::new();
    for fetched in pages {
        for (id, text) in camel_case_map(&fetched.html) {
            merged.entry(id).or_insert(text);
        }
    }
    merged
}
