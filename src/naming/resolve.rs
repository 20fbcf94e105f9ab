// src/naming/resolve.rs
// Naming precedence: manual override → documentation camelCase → algorithm.
// The first tier with an answer wins; there is no fallthrough after that.

use std::collections::BTreeMap;
use std::fmt;

use super::dictionary::WordDictionary;
use super::friendly::{ from_camel_case, to_friendly_name };
use super::overrides::ManualOverrides;

/// Lowercase anchor id → camelCase display text, as written in the docs.
pub type CamelCaseMap = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameSource {
    Override,
    Documentation,
    Algorithm,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameSource::Override => "override",
            NameSource::Documentation => "documentation",
            NameSource::Algorithm => "algorithm",
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct NameResolver {
    dictionary: WordDictionary,
    overrides: ManualOverrides,
    camel_case: CamelCaseMap,
}

impl NameResolver {
    pub fn new(dictionary: WordDictionary, overrides: ManualOverrides) -> Self {
        Self { dictionary, overrides, camel_case: CamelCaseMap::new() }
    }

    pub fn with_camel_case(mut self, camel_case: CamelCaseMap) -> Self {
        self.camel_case = camel_case;
        self
    }

    pub fn dictionary(&self) -> &WordDictionary { &self.dictionary }

    /// Full precedence chain.
    pub fn resolve(&self, original_name: &str) -> (String, NameSource) {
        let key = original_name.to_lowercase();

        if let Some(name) = self.overrides.get(&key) {
            return (s!(name), NameSource::Override);
        }
        if let Some(camel) = self.camel_case.get(&key) {
            return (from_camel_case(camel), NameSource::Documentation);
        }
        (self.format(original_name), NameSource::Algorithm)
    }

    /// Algorithm tier only.
    pub fn format(&self, original_name: &str) -> String {
        to_friendly_name(&self.dictionary, original_name)
    }
}
