// src/specs/names.rs
//! Resource names on a documentation page.
//!
//! Three independent sources, each matching the shape of a section marker:
//! - `id` attributes on headings,
//! - in-page links (`href="#name"`),
//! - headings whose whole text is a single identifier.
//!
//! They are merged case-insensitively in that order, so the casing of an id
//! anchor beats a heading's, which beats a link's.

use std::collections::HashSet;

use crate::naming::CamelCaseMap;

static_regex! {
    ID_ANCHOR = r#"(?i)<h[1-6]\b[^>]*\sid\s*=\s*["']([A-Za-z][A-Za-z0-9_]*)["']"#;
}
static_regex! {
    LINK_ANCHOR = r##"(?i)<a\b[^>]*\shref\s*=\s*["']#([A-Za-z][A-Za-z0-9_]*)["']"##;
}
static_regex! {
    HEADING_TEXT = r"(?is)<h[1-6]\b[^>]*>\s*(?:<[^>]+>\s*)*([A-Za-z][A-Za-z0-9_]*)\s*(?:<[^>]+>\s*)*</h[1-6]>";
}
static_regex! {
    ID_HEADING_TEXT = r#"(?is)<h[1-6]\b[^>]*\sid\s*=\s*["']([A-Za-z0-9_]+)["'][^>]*>\s*(?:<[^>]+>\s*)*([A-Za-z][A-Za-z0-9_]*)\s*(?:<[^>]+>\s*)*</h[1-6]>"#;
}

/// Single-word headings and link targets that are page furniture.
const STRUCTURAL: &[&str] = &[
    "overview", "introduction", "contents", "summary", "description",
    "properties", "property", "relationships", "permissions", "methods",
    "examples", "example", "request", "response", "remarks", "syntax",
    "parameters", "prerequisites", "resources", "feedback", "json",
    "main", "top", "see", "related", "notes", "limitations",
];

/// Candidate resource names in first-seen order, one per lowercased form.
pub fn discover_resource_names(page: &str) -> Vec<String> {
    let ids = ID_ANCHOR.captures_iter(page).filter_map(|c| c.get(1));
    let headings = HEADING_TEXT.captures_iter(page).filter_map(|c| c.get(1));
    let links = LINK_ANCHOR.captures_iter(page).filter_map(|c| c.get(1));

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in ids.chain(headings).chain(links).map(|m| m.as_str()) {
        let lc = name.to_lowercase();
        if name.len() < 3 || STRUCTURAL.contains(&lc.as_str()) {
            continue;
        }
        if seen.insert(lc) {
            out.push(s!(name));
        }
    }
    out
}

/// Lowercased name → camelCase form, from headings like
/// `<h2 id="devicecompliancepolicy">deviceCompliancePolicy</h2>`.
/// Pairs where the text has no capital, or does not lowercase to the id,
/// are ignored. The first pairing of an id wins.
pub fn camel_case_map(page: &str) -> CamelCaseMap {
    let mut map = CamelCaseMap::new();
    for c in ID_HEADING_TEXT.captures_iter(page) {
        let (Some(id), Some(text)) = (c.get(1), c.get(2)) else {
            continue;
        };
        let (id, text) = (id.as_str(), text.as_str());
        if id.chars().any(char::is_uppercase) || !text.chars().any(char::is_uppercase) {
            continue;
        }
        if text.to_lowercase() == id {
            map.entry(s!(id)).or_insert_with(|| s!(text));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
<nav>
  <a href="#administrativeunit">Administrative unit</a>
  <a href="#conditionalAccessPolicy">Conditional access policy</a>
  <a href="#overview">Overview</a>
</nav>
<h1>Overview</h1>
<h2 id="administrativeunit">administrativeUnit</h2>
<h3>Permissions</h3>
<h2 id="groupLifecyclePolicy"><code>groupLifecyclePolicy</code></h2>
<h2>namedLocationPolicy</h2>
<h2 id="authenticationmethodpolicy">Authentication method policy</h2>
"##;

    #[test]
    fn merges_sources_in_priority_order() {
        let names = discover_resource_names(PAGE);
        assert_eq!(names, vec![
            "administrativeunit",
            "groupLifecyclePolicy",
            "authenticationmethodpolicy",
            "namedLocationPolicy",
            "conditionalAccessPolicy",
        ]);
    }

    #[test]
    fn structural_words_are_skipped() {
        let names = discover_resource_names(PAGE);
        assert!(!names.iter().any(|n| n.eq_ignore_ascii_case("overview")));
        assert!(!names.iter().any(|n| n.eq_ignore_ascii_case("permissions")));
    }

    #[test]
    fn empty_page_has_no_names() {
        assert!(discover_resource_names("<p>nothing</p>").is_empty());
    }

    #[test]
    fn camel_case_pairs() {
        let map = camel_case_map(PAGE);
        assert_eq!(map.get("administrativeunit").map(String::as_str), Some("administrativeUnit"));
        // id is not lowercase
        assert!(!map.contains_key("grouplifecyclepolicy"));
        // text is several words
        assert!(!map.contains_key("authenticationmethodpolicy"));
        assert_eq!(map.len(), 1);
    }
}
