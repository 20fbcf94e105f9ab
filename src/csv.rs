// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::catalog::{ Catalog, OperationPermissionEntry, ResourceRecord };

pub const CATALOG_HEADERS: [&str; 9] = [
    "PrefixedName",
    "ResourceType",
    "OriginalName",
    "FriendlyName",
    "Description",
    "AnchorUrl",
    "ApplicationPermissions",
    "OperationPermissions",
    "LastUpdated",
];

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). Used to read exports back.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // escaped quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // trailing row without a newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer, quoting per RFC 4180.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Catalog rows ---------------- */

/// `Read: A.B.C, D.E.F | Update: G.H.I`
pub fn format_operations(ops: &[OperationPermissionEntry]) -> String {
    ops.iter()
        .map(|e| format!("{}: {}", e.operation, e.permissions.join(", ")))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn record_row(r: &ResourceRecord) -> Vec<String> {
    vec![
        s!(r.prefixed_name()),
        s!(r.resource_type()),
        s!(r.identifier.original_name()),
        r.friendly_name.clone(),
        r.description.clone().unwrap_or_default(),
        r.anchor_url.clone().unwrap_or_default(),
        r.application_permissions.iter().map(String::as_str).collect::<Vec<_>>().join(", "),
        format_operations(&r.operation_permissions),
        r.last_updated.to_rfc3339(),
    ]
}

/// Header line plus one line per resource.
pub fn write_catalog<W: Write>(mut w: W, catalog: &Catalog) -> io::Result<()> {
    write_row(&mut w, &CATALOG_HEADERS[..], ',')?;
    for r in &catalog.resources {
        write_row(&mut w, &record_row(r), ',')?;
    }
    Ok(())
}
