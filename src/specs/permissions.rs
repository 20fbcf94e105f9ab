// src/specs/permissions.rs
//! Application-permission tables inside a resource section.
//!
//! The docs are not consistent about how the table is introduced, so the
//! extractor tries a fixed cascade of shapes and stops at the first that
//! yields a table:
//!
//! 1. `<hN>Application permissions</hN>` then `<table>`
//! 2. a "Microsoft Graph ... Application permissions" heading then `<table>`
//! 3. any `h3`-`h6` mentioning "permissions" then `<table>`
//! 4. a `div`/`p`/`strong`/`span`/`section` mentioning "permissions" then `<table>`
//! 5. a markdown pipe table after an "Application permissions" line
//!
//! With no table at all, permission-shaped tokens are picked out of the text
//! right after an "Application permissions" mention. They carry no operation.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::model::OperationPermissionEntry;
use crate::config::consts::{ EXCHANGE_PERMISSION, EXCHANGE_TYPE, RAW_PERMISSION_WINDOW };
use crate::core::html::{ floor_char_boundary, tag_blocks, to_lower, find_open_tag, inner_after_open_tag };
use crate::core::sanitize::clean_text;

/// Parts that show up in `A.B.C`-shaped text but are never permissions.
const STOPWORDS: &[&str] = &["Operation", "Supported", "Permissions", "Microsoft", "Graph"];

/// First-cell labels that mark a header row.
const HEADER_LABELS: &[&str] = &[
    "operation",
    "operations",
    "supported operation",
    "supported operations",
    "method",
    "action",
    "permission type",
];

static_regex! { PERMISSION_TOKEN = r"\b[A-Z][A-Za-z0-9]*\.[A-Z][A-Za-z0-9]*\.[A-Z][A-Za-z0-9]*\b"; }
static_regex! { APP_PERMISSIONS = r"(?i)application\s+permissions"; }

static_regex! {
    APP_HEADING_TABLE =
        r"(?is)<h[1-6]\b[^>]*>\s*application\s+permissions\s*</h[1-6]>.*?(<table\b.*?</table>)";
}
static_regex! {
    GRAPH_HEADING_TABLE =
        r"(?is)<h[1-6]\b[^>]*>[^<]*microsoft\s+graph[^<]*application\s+permissions[^<]*</h[1-6]>.*?(<table\b.*?</table>)";
}
static_regex! {
    SUBHEADING_TABLE =
        r"(?is)<h[3-6]\b[^>]*>[^<]*permissions[^<]*</h[3-6]>.*?(<table\b.*?</table>)";
}
static_regex! {
    CONTAINER_TABLE =
        r"(?is)<(?:div|p|strong|span|section)\b[^>]*>[^<]*permissions[^<]*</(?:div|p|strong|span|section)>.*?(<table\b.*?</table>)";
}
static_regex! {
    MARKDOWN_TABLE =
        r"(?i)application\s+permissions[^\n]*\n(?:[ \t]*\n)*((?:[ \t]*\|[^\n]*(?:\n|$))+)";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TableKind {
    Html,
    Markdown,
}

/// The cascade, in priority order.
static MATCHERS: [(&str, &LazyLock<Regex>, TableKind); 5] = [
    ("application-permissions heading", &APP_HEADING_TABLE, TableKind::Html),
    ("microsoft-graph heading", &GRAPH_HEADING_TABLE, TableKind::Html),
    ("permissions sub-heading", &SUBHEADING_TABLE, TableKind::Html),
    ("permissions container", &CONTAINER_TABLE, TableKind::Html),
    ("markdown table", &MARKDOWN_TABLE, TableKind::Markdown),
];

/// Permissions for one resource: the flat set plus per-operation rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionSet {
    pub all: BTreeSet<String>,
    pub operations: Vec<OperationPermissionEntry>,
}

impl PermissionSet {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.operations.is_empty()
    }

    /// Type-wide requirements not always written in the tables.
    pub fn apply_type_rules(&mut self, resource_type: &str) {
        if resource_type.eq_ignore_ascii_case(EXCHANGE_TYPE) {
            self.all.insert(s!(EXCHANGE_PERMISSION));
        }
    }
}

pub fn extract_permissions(section: &str) -> PermissionSet {
    for (label, re, kind) in &MATCHERS {
        let Some(table) = re.captures(section).and_then(|c| c.get(1)) else {
            continue;
        };
        tracing::trace!("permissions table via {label}");
        let rows = match kind {
            TableKind::Html => html_rows(table.as_str()),
            TableKind::Markdown => markdown_rows(table.as_str()),
        };
        return from_rows(rows);
    }
    raw_fallback(section)
}

/* ---------- helpers ---------- */

/// Data rows of an HTML table as raw cell inners. Header rows are dropped.
fn html_rows(table: &str) -> Vec<Vec<String>> {
    tag_blocks(table, "tr")
        .into_iter()
        .filter_map(|tr| {
            let (cells, has_th) = row_cells(tr);
            (!has_th && !is_header(&cells)).then_some(cells)
        })
        .collect()
}

/// `<td>`/`<th>` inners in document order, and whether any was a `<th>`.
fn row_cells(tr: &str) -> (Vec<String>, bool) {
    let lc = to_lower(tr);
    let mut cells = Vec::new();
    let mut has_th = false;
    let mut pos = 0usize;

    loop {
        let td = find_open_tag(&lc, "td", pos);
        let th = find_open_tag(&lc, "th", pos);
        let (start, tag) = match (td, th) {
            (Some(d), Some(h)) if h < d => (h, "th"),
            (Some(d), _) => (d, "td"),
            (None, Some(h)) => (h, "th"),
            (None, None) => break,
        };
        let close = join!("</", tag, ">");
        let end = lc[start..]
            .find(&close)
            .map_or(tr.len(), |i| start + i + close.len());
        cells.push(s!(inner_after_open_tag(&tr[start..end])));
        has_th |= tag == "th";
        pos = end;
    }
    (cells, has_th)
}

fn markdown_rows(table: &str) -> Vec<Vec<String>> {
    let lines: Vec<Vec<String>> = table
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with('|'))
        .map(markdown_cells)
        .collect();

    // a row directly above a separator row is the header
    let mut rows = Vec::new();
    for (i, cells) in lines.iter().enumerate() {
        let above_separator = lines.get(i + 1).is_some_and(|next| is_separator(next));
        if is_separator(cells) || above_separator || is_header(cells) {
            continue;
        }
        rows.push(cells.clone());
    }
    rows
}

fn markdown_cells(line: &str) -> Vec<String> {
    let inner = line.trim_start_matches('|');
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|c| s!(c.trim())).collect()
}

fn is_separator(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|c| {
            let c = c.trim();
            !c.is_empty() && c.contains('-') && c.chars().all(|ch| ch == '-' || ch == ':')
        })
}

fn is_header(cells: &[String]) -> bool {
    cells
        .first()
        .map(|c| clean_text(c).to_lowercase())
        .is_some_and(|c| HEADER_LABELS.contains(&c.as_str()))
}

fn from_rows(rows: Vec<Vec<String>>) -> PermissionSet {
    let mut set = PermissionSet::default();
    for cells in rows {
        let [op, perms, ..] = cells.as_slice() else {
            continue;
        };
        let permissions = permission_tokens(&clean_text(perms));
        if permissions.is_empty() {
            continue;
        }
        set.all.extend(permissions.iter().cloned());
        set.operations.push(OperationPermissionEntry { operation: clean_text(op), permissions });
    }
    set
}

fn raw_fallback(section: &str) -> PermissionSet {
    let Some(m) = APP_PERMISSIONS.find(section) else {
        return PermissionSet::default();
    };
    let end = floor_char_boundary(section, m.end().saturating_add(RAW_PERMISSION_WINDOW));
    let window = clean_text(&section[m.end()..end]);
    PermissionSet {
        all: permission_tokens(&window).into_iter().collect(),
        operations: Vec::new(),
    }
}

/// `Word.Word.Word` tokens in order of appearance, deduplicated.
fn permission_tokens(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for m in PERMISSION_TOKEN.find_iter(text) {
        let token = m.as_str();
        if token.split('.').any(|part| STOPWORDS.contains(&part)) {
            continue;
        }
        if !out.iter().any(|t| t == token) {
            out.push(s!(token));
        }
    }
    out
}
