// src/naming/friendly.rs
//! Identifier → display name.
//!
//! Two paths, picked by whether the name has any capital:
//! - all lowercase: dictionary segmentation, each word capitalized;
//! - mixed case: split before capitals, with `iOS`, `macOS`, `AD` and `IP`
//!   held together.
//!
//! Both end in the same abbreviation pass (`Api` → `API`, `Windows10` →
//! `Windows 10`, ...).

use regex::Regex;
use std::sync::LazyLock;

use super::dictionary::WordDictionary;
use super::segment::segment;
use crate::core::sanitize::normalize_ws;

/// Whole-word, case-insensitive fixes, applied in order.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Ios", "iOS"),
    ("Mac Os", "macOS"),
    ("Api", "API"),
    ("Id", "ID"),
    ("Vpp", "VPP"),
    ("Mdm", "MDM"),
    ("Mam", "MAM"),
    ("Url", "URL"),
    ("Vpn", "VPN"),
    ("Wifi", "WiFi"),
    ("Scep", "SCEP"),
    ("Pkcs", "PKCS"),
    ("Pfx", "PFX"),
    ("Ad", "AD"),
    ("Ip", "IP"),
    ("Asr", "ASR"),
];

/// Plain substring fixes, applied after the word pass.
const LITERALS: &[(&str, &str)] = &[
    ("Windows10", "Windows 10"),
    ("O365", "Office 365"),
];

static ABBREVIATION_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .map(|(from, to)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from))).unwrap();
            (re, *to)
        })
        .collect()
});

/// Compounds kept whole on the mixed-case path: (placeholder, restored form).
/// Placeholders are private-use chars, so they are neither capitals nor
/// whitespace.
const COMPOUNDS: [(char, &str); 4] = [
    ('\u{E000}', "iOS"),
    ('\u{E001}', "macOS"),
    ('\u{E002}', "AD"),
    ('\u{E003}', "IP"),
];

pub fn to_friendly_name(dict: &WordDictionary, name: &str) -> String {
    if name.chars().any(char::is_uppercase) {
        from_camel_case(name)
    } else {
        fix_abbreviations(&split_lowercase(dict, name))
    }
}

/// Mixed-case path only; for names already known to be camelCase.
pub fn from_camel_case(name: &str) -> String {
    fix_abbreviations(&split_mixed_case(name))
}

fn split_lowercase(dict: &WordDictionary, name: &str) -> String {
    segment(dict, name)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_mixed_case(name: &str) -> String {
    let held = hold_acronyms(&name.replace("macOS", "\u{E001}").replace("iOS", "\u{E000}"));

    let mut spaced = String::with_capacity(held.len() + 8);
    for ch in held.chars() {
        if ch.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let mut restored = normalize_ws(&spaced);
    for (mark, word) in COMPOUNDS {
        restored = restored.replace(mark, &join!(" ", word));
    }
    let restored = normalize_ws(&restored);

    // a leading compound keeps its canonical casing ("macOS ...", not "MacOS ...")
    if COMPOUNDS.iter().any(|(_, w)| restored.split(' ').next() == Some(*w)) {
        restored
    } else {
        capitalize(&restored)
    }
}

/// Replace `AD` / `IP` with placeholders when they sit between a lowercase
/// letter and a capital (or the end), or open the name right before a capital.
fn hold_acronyms(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0usize;

    while i < chars.len() {
        if let Some(mark) = acronym_at(&chars, i) {
            out.push(mark);
            i += 2;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn acronym_at(chars: &[char], i: usize) -> Option<char> {
    let mark = match (chars[i], chars.get(i + 1).copied()?) {
        ('A', 'D') => COMPOUNDS[2].0,
        ('I', 'P') => COMPOUNDS[3].0,
        _ => return None,
    };
    let next = chars.get(i + 2);
    let inside = i > 0
        && chars[i - 1].is_lowercase()
        && next.is_none_or(|c| c.is_uppercase());
    let leading = i == 0 && next.is_some_and(|c| c.is_uppercase());
    (inside || leading).then_some(mark)
}

fn fix_abbreviations(s: &str) -> String {
    let mut out = s.to_string();
    for (re, to) in ABBREVIATION_RES.iter() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *to).into_owned();
        }
    }
    for (from, to) in LITERALS {
        out = out.replace(from, to);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}
