// src/catalog/docs.rs
//! Doc-crawl mode: every resource a documentation page names becomes a record.

use std::collections::BTreeSet;

use chrono::{ DateTime, Utc };

use crate::catalog::model::{ Catalog, ResourceIdentifier, ResourceRecord };
use crate::config::sources::DocPage;
use crate::core::net::Fetch;
use crate::naming::NameResolver;
use crate::progress::Progress;
use crate::specs::{ discover_resource_names, extract_permissions, find_section, PermissionSet, SectionAnchor };

/// A documentation page that was read successfully.
#[derive(Clone, Debug)]
pub struct FetchedPage {
    pub page: DocPage,
    pub html: String,
}

/// Read each page in order. Failures are logged, reported and skipped.
pub fn fetch_pages(
    fetcher: &dyn Fetch,
    pages: &[DocPage],
    progress: &mut dyn Progress,
) -> Vec<FetchedPage> {
    let mut out = Vec::with_capacity(pages.len());
    for page in pages {
        match fetcher.fetch_text(&page.url) {
            Ok(html) => {
                tracing::info!("read {} ({} bytes, type {})", page.url, html.len(), page.resource_type);
                progress.item_done(&page.url);
                out.push(FetchedPage { page: page.clone(), html });
            }
            Err(e) => {
                tracing::warn!("skipping {}: {e}", page.url);
                progress.source_failed(&page.url, &e.to_string());
            }
        }
    }
    out
}

pub fn build(
    fetcher: &dyn Fetch,
    pages: &[DocPage],
    resolver: &NameResolver,
    progress: &mut dyn Progress,
) -> Catalog {
    progress.begin(pages.len());
    let now = Utc::now();

    let mut records = Vec::new();
    for fetched in fetch_pages(fetcher, pages, progress) {
        let found = page_records(&fetched, resolver, now);
        progress.log(&format!("  {} resource(s) on {}", found.len(), fetched.page.url));
        records.extend(found);
    }

    let catalog = Catalog::from_records(records, now);
    progress.finish();
    catalog
}

/// Records for every name discovered on one page, in discovery order.
pub fn page_records(
    fetched: &FetchedPage,
    resolver: &NameResolver,
    now: DateTime<Utc>,
) -> Vec<ResourceRecord> {
    let kind = &fetched.page.resource_type;
    let mut out = Vec::new();

    for name in discover_resource_names(&fetched.html) {
        let identifier = match ResourceIdentifier::new(kind, &name) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("skipping name on {}: {e}", fetched.page.url);
                continue;
            }
        };
        let (permissions, anchor_url) = section_permissions(fetched, &name);

        out.push(ResourceRecord {
            friendly_name: resolver.format(&name),
            identifier,
            description: None,
            anchor_url,
            application_permissions: permissions.all,
            operation_permissions: permissions.operations,
            last_updated: now,
        });
    }
    out
}

/// Permissions from the resource's section (type rules applied) and, when
/// the section was found by its id, a deep link to it.
pub(crate) fn section_permissions(fetched: &FetchedPage, name: &str) -> (PermissionSet, Option<String>) {
    let section = find_section(&fetched.html, name);
    let mut permissions = section.map(|s| extract_permissions(s.text)).unwrap_or_default();
    permissions.apply_type_rules(&fetched.page.resource_type);

    let anchor_url = section
        .filter(|s| s.anchor == SectionAnchor::Id)
        .map(|_| join!(&fetched.page.url, "#", name));

    if section.is_none() {
        tracing::debug!("no section for {name} on {}", fetched.page.url);
    }
    (permissions, anchor_url)
}

/// Every permission named anywhere in the catalog.
pub fn distinct_permissions(catalog: &Catalog) -> BTreeSet<&str> {
    catalog
        .resources
        .iter()
        .flat_map(|r| r.application_permissions.iter().map(String::as_str))
        .collect()
}
