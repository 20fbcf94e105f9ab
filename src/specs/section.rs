// src/specs/section.rs
//! Locate the part of a documentation page that describes one resource.
//!
//! Primary marker is an `id="<key>"` attribute; the section runs from the tag
//! carrying it to the next heading of the same or a higher level (`<h2>` when
//! the marker is not itself a heading), capped at `SECTION_WINDOW` characters.
//! If no id matches, the same window is taken from the first `href="#<key>"`
//! link. Not finding either is routine: the caller gets `None` and treats the
//! resource as having no known permissions.

use crate::config::consts::SECTION_WINDOW;
use crate::core::html::{ enclosing_tag_start, find_ci, find_open_tag, to_lower };

/// How the section start was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionAnchor {
    Id,
    Link,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub text: &'a str,
    pub anchor: SectionAnchor,
}

pub fn locate_section<'a>(page: &'a str, key: &str) -> Option<&'a str> {
    find_section(page, key).map(|s| s.text)
}

pub fn find_section<'a>(page: &'a str, key: &str) -> Option<Section<'a>> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let page_lc = to_lower(page);
    let key_lc = to_lower(key);

    if let Some(at) = find_attr(&page_lc, "id", &key_lc) {
        return Some(Section { text: cut(page, &page_lc, at), anchor: SectionAnchor::Id });
    }
    let target = join!("#", &key_lc);
    find_attr(&page_lc, "href", &target)
        .map(|at| Section { text: cut(page, &page_lc, at), anchor: SectionAnchor::Link })
}

/* ---------- helpers ---------- */

/// Offset of `attr="value"` (either quote style) where `attr` is a whole
/// attribute name, i.e. preceded by whitespace. Earliest match wins.
fn find_attr(page_lc: &str, attr: &str, value_lc: &str) -> Option<usize> {
    ['"', '\'']
        .iter()
        .filter_map(|q| {
            let needle = format!("{attr}={q}{value_lc}{q}");
            let mut from = 0usize;
            while let Some(at) = find_ci(page_lc, &needle, from) {
                let before = page_lc[..at].chars().next_back();
                if before.is_some_and(char::is_whitespace) {
                    return Some(at);
                }
                from = at + needle.len();
            }
            None
        })
        .min()
}

fn cut<'a>(page: &'a str, page_lc: &str, attr_at: usize) -> &'a str {
    let start = enclosing_tag_start(page, attr_at);
    let tag_end = page[attr_at..].find('>').map_or(page.len(), |i| attr_at + i + 1);

    let level = heading_level(&page_lc[start..]).unwrap_or(2);
    let next_heading = (1..=level)
        .filter_map(|l| find_open_tag(page_lc, &format!("h{l}"), tag_end))
        .min()
        .unwrap_or(page.len());

    let cap = page[start..]
        .char_indices()
        .nth(SECTION_WINDOW)
        .map_or(page.len(), |(i, _)| start + i);
    &page[start..next_heading.min(cap)]
}

/// `Some(n)` when `tag_lc` opens with `<hN` (N in 1..=6).
fn heading_level(tag_lc: &str) -> Option<u8> {
    let b = tag_lc.as_bytes();
    match (b.first(), b.get(1), b.get(2), b.get(3)) {
        (Some(b'<'), Some(b'h'), Some(d @ b'1'..=b'6'), next)
            if next.is_none_or(|c| c.is_ascii_whitespace() || *c == b'>') =>
        {
            Some(d - b'0')
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<html><body>
<nav><a href="#devicecompliancepolicy">Device compliance</a></nav>
<h2 id="administrativeunit">administrativeUnit</h2>
<p>Admin units.</p>
<h3>Permissions</h3>
<table><tr><td>Read</td><td>AdministrativeUnit.Read.All</td></tr></table>
<h2 id='devicecompliancepolicy'>deviceCompliancePolicy</h2>
<p>Policies.</p>
</body></html>"##;

    #[test]
    fn id_section_stops_at_next_h2() {
        let s = find_section(PAGE, "administrativeunit").unwrap();
        assert_eq!(s.anchor, SectionAnchor::Id);
        assert!(s.text.starts_with("<h2 id=\"administrativeunit\">"));
        assert!(s.text.contains("AdministrativeUnit.Read.All"));
        assert!(!s.text.contains("deviceCompliancePolicy"));
    }

    #[test]
    fn key_is_case_insensitive_and_single_quotes_work() {
        let s = find_section(PAGE, "DeviceCompliancePolicy").unwrap();
        assert_eq!(s.anchor, SectionAnchor::Id);
        assert!(s.text.starts_with("<h2 id='devicecompliancepolicy'>"));
        assert!(s.text.ends_with("</html>"));
    }

    #[test]
    fn falls_back_to_link() {
        let page = r##"<ul><li><a href="#intuneWidget">x</a></li></ul><h2>Next</h2>"##;
        let s = find_section(page, "intunewidget").unwrap();
        assert_eq!(s.anchor, SectionAnchor::Link);
        assert_eq!(s.text, r##"<a href="#intuneWidget">x</a></li></ul>"##);
    }

    #[test]
    fn missing_marker_is_none() {
        assert_eq!(locate_section(PAGE, "conditionalaccesspolicy"), None);
        assert_eq!(locate_section(PAGE, ""), None);
    }

    #[test]
    fn attribute_name_must_be_whole() {
        let page = r#"<div data-id="user">no</div><h2 id="user">user</h2>"#;
        let s = locate_section(page, "user").unwrap();
        assert!(s.starts_with("<h2 id=\"user\">"));
    }

    #[test]
    fn h3_marker_stops_at_next_h3() {
        let page = "<h3 id=\"a\">a</h3><p>x</p><h3 id=\"b\">b</h3>";
        assert_eq!(locate_section(page, "a"), Some("<h3 id=\"a\">a</h3><p>x</p>"));
    }

    #[test]
    fn window_counts_characters() {
        let mut page = s!("<h2 id=\"big\">big</h2>");
        page.push_str(&"é".repeat(SECTION_WINDOW));
        let s = locate_section(&page, "big").unwrap();
        assert_eq!(s.chars().count(), SECTION_WINDOW);
        assert!(s.ends_with('é'));
    }
}
