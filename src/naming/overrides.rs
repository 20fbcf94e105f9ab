// src/naming/overrides.rs
// Hand-written display names for identifiers the algorithm gets wrong.
// Keys are lowercase original names.

use std::collections::BTreeMap;

pub const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    ("aadgroup", "AAD Group"),
    ("aadapplication", "AAD Application"),
    ("aadserviceprincipal", "AAD Service Principal"),
    ("groupsettings", "Group Settings"),
    ("groupsettingtemplate", "Group Setting Template"),
    ("namedlocationpolicy", "Named Location Policy"),
    ("atppolicyforo365", "ATP Policy for Office 365"),
    ("eoprotectionpolicyrule", "EOP Protection Policy Rule"),
    ("owamailboxpolicy", "OWA Mailbox Policy"),
    ("dkimsigningconfig", "DKIM Signing Config"),
    ("casmailboxplan", "CAS Mailbox Plan"),
    ("casmailboxsettings", "CAS Mailbox Settings"),
    ("mobiledevicemailboxpolicy", "Mobile Device Mailbox Policy"),
    ("dlpcompliancepolicy", "DLP Compliance Policy"),
    ("dlpcompliancerule", "DLP Compliance Rule"),
    ("sccfileplanpropertycategory", "SCC File Plan Property Category"),
    ("pstnusage", "PSTN Usage"),
    ("onlinepstngateway", "Online PSTN Gateway"),
    ("wifiwindows10", "WiFi Windows 10"),
    ("win32lobapp", "Win32 LOB App"),
];

/// Immutable lookup; exact match on the lowercased original name.
#[derive(Clone, Debug)]
pub struct ManualOverrides {
    names: BTreeMap<String, String>,
}

impl ManualOverrides {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let names = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { names }
    }

    pub fn empty() -> Self {
        Self { names: BTreeMap::new() }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_OVERRIDES.iter().copied())
    }

    /// Built-in table with `extra` layered on top (extra wins).
    pub fn with_extra<'a, I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut merged = Self::builtin();
        for (k, v) in extra {
            merged.names.insert(k.to_lowercase(), v.clone());
        }
        merged
    }

    pub fn get(&self, original_name: &str) -> Option<&str> {
        self.names.get(&original_name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }
}

impl Default for ManualOverrides {
    fn default() -> Self { Self::builtin() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let o = ManualOverrides::builtin();
        assert_eq!(o.get("AADGroup"), Some("AAD Group"));
        assert_eq!(o.get("aadgroup"), Some("AAD Group"));
        assert_eq!(o.get("somethingElse"), None);
    }

    #[test]
    fn extra_entries_win() {
        let extra = BTreeMap::from([(s!("AADGroup"), s!("Entra Group")), (s!("newthing"), s!("New Thing"))]);
        let o = ManualOverrides::with_extra(&extra);
        assert_eq!(o.get("aadgroup"), Some("Entra Group"));
        assert_eq!(o.get("NewThing"), Some("New Thing"));
        assert_eq!(o.len(), BUILTIN_OVERRIDES.len() + 1);
    }

    #[test]
    fn default_is_the_builtin_table() {
        assert_eq!(ManualOverrides::default().len(), BUILTIN_OVERRIDES.len());
        assert!(ManualOverrides::empty().is_empty());
    }
}
