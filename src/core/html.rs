// src/core/html.rs
// Low-level HTML string helpers.
// Deliberately naive: no DOM, just case-insensitive scanning for tag blocks.
// Lowercasing is ASCII-only, so byte offsets in the lowered copy line up
// with the original.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte offset of `needle` (already lowercase) in `hay_lc` at or after `from`.
pub fn find_ci(hay_lc: &str, needle: &str, from: usize) -> Option<usize> {
    hay_lc.get(from..)?.find(needle).map(|i| i + from)
}

/// Find `<tag` at or after `from` where the tag name ends right there
/// (so `<th` does not match `<thead`).
pub fn find_open_tag(hay_lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("<", tag);
    let mut pos = from;
    while let Some(at) = find_ci(hay_lc, &pat, pos) {
        match hay_lc.as_bytes().get(at + pat.len()) {
            Some(b'>' | b'/') | None => return Some(at),
            Some(b) if b.is_ascii_whitespace() => return Some(at),
            _ => pos = at + pat.len(),
        }
    }
    None
}

/// Next complete `<tag ...> ... </tag>` block at or after `from`.
/// Returns `(start, end)` byte offsets into `s`; `end` is past the closing tag.
/// Nested blocks of the same tag are not balanced.
pub fn next_tag_block_ci(s: &str, s_lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_open_tag(s_lc, tag, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let close = join!("</", tag, ">");
    let end = find_ci(s_lc, &close, open_end)? + close.len();
    Some((start, end))
}

/// All `<tag>` blocks in order, non-overlapping.
pub fn tag_blocks<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_tag_block_ci(s, &lc, tag, pos) {
        out.push(&s[b..e]);
        pos = e;
    }
    out
}

/// Given `<td ...>INNER</td>`, return INNER (may still hold nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let (Some(oe), Some(cs)) = (block.find('>'), block.rfind('<')) {
        if cs > oe {
            return &block[oe + 1..cs];
        }
    }
    ""
}

/// Replace every `<...>` tag with one space so `a<br>b` stays two words.
/// Collapse afterwards with `sanitize::clean_text`.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Start of the tag enclosing byte offset `idx` (the nearest `<` before it).
pub fn enclosing_tag_start(s: &str, idx: usize) -> usize {
    s[..idx].rfind('<').unwrap_or(idx)
}

/// Largest char boundary `<= idx`.
pub fn floor_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut i = idx;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
