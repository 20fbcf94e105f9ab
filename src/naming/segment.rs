// src/naming/segment.rs
// Greedy longest-match word splitter for run-together lowercase identifiers.
//
// Each step takes the first dictionary word (longest first) that prefixes
// what is left; with no match it takes a single char. Every step consumes at
// least one char, so the loop always terminates and the tokens concatenate
// back to the input.

use super::dictionary::WordDictionary;

pub fn segment(dict: &WordDictionary, identifier: &str) -> Vec<String> {
    let lowered = identifier.to_lowercase();
    let mut rest = lowered.as_str();
    let mut out = Vec::new();

    while !rest.is_empty() {
        let step = match dict.words().find(|w| rest.starts_with(w)) {
            Some(word) => word.len(),
            None => rest.chars().next().map_or(rest.len(), char::len_utf8),
        };
        out.push(s!(&rest[..step]));
        rest = &rest[step..];
    }
    out
}
